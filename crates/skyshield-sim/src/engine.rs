//! Simulation engine for a single level of play.
//!
//! `SimulationEngine` owns the entity store, the level clock and the seeded
//! RNG, processes player commands, runs all systems in a fixed order and
//! produces `GameStateSnapshot`s. Completely headless, so any number of
//! instances can run side by side and a fixed seed replays a level exactly.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyshield_core::commands::{LaunchResult, PlayerCommand};
use skyshield_core::config::GameConfig;
use skyshield_core::enums::LevelStatus;
use skyshield_core::events::SimEvent;
use skyshield_core::state::GameStateSnapshot;
use skyshield_core::types::{Position, SimClock};

use crate::level::{self, LevelSetup};
use crate::score::ScoreState;
use crate::store::EntityStore;
use crate::systems;
use crate::systems::snapshot::SnapshotContext;

/// Configuration for starting a level.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same level.
    pub seed: u64,
    /// Level index; clamped into [1, total_levels].
    pub level: u32,
    /// Score carried in from earlier levels.
    pub starting_score: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            level: 1,
            starting_score: 0,
        }
    }
}

/// The simulation engine. Owns the store and all level state.
pub struct SimulationEngine {
    config: GameConfig,
    setup: LevelSetup,
    store: EntityStore,
    clock: SimClock,
    rng: ChaCha8Rng,
    status: LevelStatus,
    paused: bool,
    rockets_remaining: u32,
    score: ScoreState,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a level from the given config. The level's batteries and
    /// cities are spawned immediately.
    pub fn new(config: GameConfig, sim: SimConfig) -> Self {
        let setup = level::configure(&config, sim.level);
        let mut store = EntityStore::new();
        level::populate(&mut store, &config, &setup);

        log::info!(
            "level {} start: {} rockets, ammo {:?}, seed {}",
            setup.level,
            setup.rocket_quota,
            setup.battery_allocations,
            sim.seed
        );

        Self {
            clock: SimClock::new(config.level.tick_rate, config.level.duration_secs),
            rockets_remaining: setup.rocket_quota,
            config,
            setup,
            store,
            rng: ChaCha8Rng::seed_from_u64(sim.seed),
            status: LevelStatus::Active,
            paused: false,
            score: ScoreState::with_points(sim.starting_score),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at spawn-time of the next tick.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Launch immediately. Only call between ticks; queued launches go
    /// through `queue_command` instead. A terminal level refuses launches.
    pub fn launch_interceptor(&mut self, origin: Position, target: Position) -> LaunchResult {
        if self.status.is_terminal() {
            return LaunchResult::NoEligibleBattery;
        }
        systems::launch::launch_interceptor(
            &mut self.store,
            &self.config,
            origin,
            target,
            &mut self.score,
            &mut self.events,
        )
    }

    /// Advance the level by one tick. Returns the terminal status on the
    /// tick it is reached, `None` otherwise. Once terminal, or while paused,
    /// ticking is a no-op.
    pub fn tick(&mut self) -> Option<LevelStatus> {
        if self.status.is_terminal() {
            return None;
        }

        // Pause/resume are honoured even while paused; launches wait.
        self.process_control_commands();
        if self.paused {
            return None;
        }

        self.clock.advance();
        self.run_systems();

        let status = systems::outcome::evaluate(&self.store, self.rockets_remaining);
        if status.is_terminal() {
            self.status = status;
            log::info!(
                "level {} ended: {:?} at tick {} (score {})",
                self.setup.level,
                status,
                self.clock.tick,
                self.score.points
            );
            self.events.push(SimEvent::LevelStatusChanged {
                status,
                tick: self.clock.tick,
            });
            return Some(status);
        }
        None
    }

    /// Build a snapshot of the current state. Events collected since the
    /// previous snapshot are handed out with it.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.store,
            SnapshotContext {
                clock: &self.clock,
                level: self.setup.level,
                status: self.status,
                paused: self.paused,
                score: self.score.points,
                rockets_remaining: self.rockets_remaining,
            },
            events,
        )
    }

    /// Tick and snapshot in one call, for hosts that render every frame.
    pub fn step(&mut self) -> (Option<LevelStatus>, GameStateSnapshot) {
        let transition = self.tick();
        (transition, self.snapshot())
    }

    pub fn status(&self) -> LevelStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn setup(&self) -> &LevelSetup {
        &self.setup
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn rockets_remaining(&self) -> u32 {
        self.rockets_remaining
    }

    /// Read-only access to the entity store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Mutable store access for test scenarios.
    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// Override the remaining quota for test scenarios.
    #[cfg(test)]
    pub(crate) fn set_rockets_remaining(&mut self, remaining: u32) {
        self.rockets_remaining = remaining;
    }

    /// Apply Pause/Resume, keeping launches queued in order.
    fn process_control_commands(&mut self) {
        let mut pending = VecDeque::with_capacity(self.command_queue.len());
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::Pause => self.paused = true,
                PlayerCommand::Resume => self.paused = false,
                launch @ PlayerCommand::LaunchInterceptor { .. } => pending.push_back(launch),
            }
        }
        self.command_queue = pending;
    }

    /// Drain queued launches. Runs at spawn-time, before anything moves.
    fn process_launch_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let PlayerCommand::LaunchInterceptor { origin, target } = command {
                systems::launch::launch_interceptor(
                    &mut self.store,
                    &self.config,
                    origin,
                    target,
                    &mut self.score,
                    &mut self.events,
                );
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Spawn-time: queued launches, then the spawn roll
        self.process_launch_commands();
        systems::spawn_scheduler::run(
            &mut self.store,
            &mut self.rng,
            &self.config,
            &self.clock,
            &mut self.rockets_remaining,
            &mut self.events,
        );
        // 2. Kinematics
        systems::movement::run(&mut self.store);
        // 3. Impacts, intercepts, blast kills, out-of-bounds
        systems::collision::run(
            &mut self.store,
            &self.config,
            &mut self.score,
            &mut self.events,
        );
        // 4. Explosion lifecycle
        systems::explosion::run(&mut self.store, &self.config);
        // 5. Cleanup (destroyed, exploded, finished)
        systems::cleanup::run(&mut self.store);
    }
}
