//! skyshield-run: headless campaign driver with a simple autopilot.
//!
//! Usage:
//!   skyshield-run --seed 7 --levels 5
//!   skyshield-run --config skyshield.toml --start-level 20 --json

use std::collections::HashSet;
use std::path::PathBuf;
use std::process;

use skyshield_core::config::GameConfig;
use skyshield_core::enums::{CampaignStatus, LevelStatus};
use skyshield_core::state::GameStateSnapshot;
use skyshield_core::types::{EntityId, Position};
use skyshield_sim::input;
use skyshield_sim::Campaign;

struct Options {
    seed: u64,
    levels: u32,
    start_level: u32,
    config: Option<PathBuf>,
    json: bool,
    autopilot: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args
        .iter()
        .any(|a| matches!(a.as_str(), "help" | "--help" | "-h"))
    {
        print_usage();
        return;
    }

    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("Error: {msg}");
            print_usage();
            process::exit(2);
        }
    };

    let config = match &options.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("failed to load config {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let last = run_campaign(config, &options);
    if options.json {
        match serde_json::to_string_pretty(&last) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("failed to encode snapshot: {e}");
                process::exit(1);
            }
        }
    }
}

fn print_usage() {
    eprintln!(
        "skyshield-run: play SKYSHIELD levels headlessly\n\
         \n\
         Options:\n\
         \n\
           --seed <N>         Campaign seed (default: 42)\n\
           --levels <N>       Number of levels to play (default: 3)\n\
           --start-level <N>  First level to play (default: 1)\n\
           --config <path>    TOML config file (optional)\n\
           --no-autopilot     Do not fire interceptors\n\
           --json             Print the final snapshot as JSON\n\
         \n\
         Log verbosity follows RUST_LOG (default: info).\n"
    );
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        seed: 42,
        levels: 3,
        start_level: 1,
        config: None,
        json: false,
        autopilot: true,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => options.seed = parse_value(args, i)?,
            "--levels" => options.levels = parse_value(args, i)?,
            "--start-level" => options.start_level = parse_value(args, i)?,
            "--config" => {
                let path = args.get(i + 1).ok_or("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--json" => {
                options.json = true;
                i += 1;
                continue;
            }
            "--no-autopilot" => {
                options.autopilot = false;
                i += 1;
                continue;
            }
            other => return Err(format!("unknown option: {other}")),
        }
        i += 2;
    }
    Ok(options)
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize) -> Result<T, String> {
    let raw = args
        .get(i + 1)
        .ok_or_else(|| format!("{} needs a value", args[i]))?;
    raw.parse()
        .map_err(|_| format!("invalid value for {}: {raw}", args[i]))
}

/// Play up to `options.levels` levels; returns the last snapshot taken.
fn run_campaign(config: GameConfig, options: &Options) -> GameStateSnapshot {
    // Generous bound: the clock itself never ends a level.
    let max_ticks = u64::from(config.level.tick_rate) * (config.level.duration_secs as u64 + 120);
    let mut campaign = Campaign::starting_at(config, options.seed, options.start_level);
    let mut last = campaign.snapshot();

    for _ in 0..options.levels {
        let mut pilot = Autopilot::default();
        let mut outcome = None;

        for _ in 0..max_ticks {
            if options.autopilot {
                pilot.engage(&mut campaign, &last);
            }
            outcome = campaign.tick();
            last = campaign.snapshot();
            if outcome.is_some() {
                break;
            }
        }

        let engine = campaign.engine();
        let score = engine.score();
        log::info!(
            "level {}: {:?} after {} ticks | score {} | destroyed {} impacted {} fired {}",
            campaign.level(),
            outcome.unwrap_or(LevelStatus::Active),
            last.tick,
            score.points,
            score.rockets_destroyed,
            score.rockets_impacted,
            score.interceptors_fired
        );

        match outcome {
            Some(LevelStatus::LevelComplete) => {
                campaign.advance();
                if campaign.status() == CampaignStatus::Victory {
                    break;
                }
                last = campaign.snapshot();
            }
            Some(LevelStatus::Lost) => break,
            _ => {
                log::warn!("level {} did not finish in {max_ticks} ticks", campaign.level());
                break;
            }
        }
    }

    log::info!(
        "campaign {:?}: {} levels completed, final score {}",
        campaign.status(),
        campaign.levels_completed(),
        campaign.score()
    );
    last
}

/// Fires one interceptor at each new rocket, lowest rocket first, aiming
/// ahead along its track.
#[derive(Default)]
struct Autopilot {
    engaged: HashSet<EntityId>,
}

impl Autopilot {
    const MAX_SHOTS_PER_TICK: usize = 1;

    fn engage(&mut self, campaign: &mut Campaign, snap: &GameStateSnapshot) {
        let interceptor_speed = campaign.engine().config().interceptors.speed;

        let mut threats: Vec<_> = snap
            .rockets
            .iter()
            .filter(|r| !self.engaged.contains(&r.id))
            .collect();
        threats.sort_by(|a, b| b.position.y.total_cmp(&a.position.y));

        for rocket in threats.into_iter().take(Self::MAX_SHOTS_PER_TICK) {
            let heading = (rocket.target.as_vec() - rocket.position.as_vec()).normalize_or_zero();
            let range = rocket.position.range_to(&rocket.target);
            let flight_ticks = (nearest_battery_distance(snap, &rocket.position) / interceptor_speed)
                .min(range / rocket.speed.max(f64::EPSILON));
            let lead = rocket.position.as_vec() + heading * rocket.speed * flight_ticks;

            let command = input::pointer_command(campaign.engine().config(), Position::from(lead));
            campaign.engine_mut().queue_command(command);
            self.engaged.insert(rocket.id);
        }
    }
}

/// Distance from the closest loaded battery to a point.
fn nearest_battery_distance(snap: &GameStateSnapshot, point: &Position) -> f64 {
    snap.batteries
        .iter()
        .filter(|b| !b.destroyed && b.ammo > 0)
        .map(|b| b.position.range_to(point))
        .fold(f64::INFINITY, f64::min)
}
