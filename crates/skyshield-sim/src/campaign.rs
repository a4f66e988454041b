//! Level progression across a whole campaign.
//!
//! The campaign owns one `SimulationEngine` at a time. Score carries over
//! between levels; each level gets its own seed derived from the campaign
//! seed so a campaign replays exactly.

use skyshield_core::config::GameConfig;
use skyshield_core::enums::{CampaignStatus, LevelStatus};
use skyshield_core::state::GameStateSnapshot;

use crate::engine::{SimConfig, SimulationEngine};
use crate::level;

/// Seed for one level of a campaign.
pub fn level_seed(campaign_seed: u64, level: u32) -> u64 {
    campaign_seed ^ u64::from(level).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

pub struct Campaign {
    config: GameConfig,
    seed: u64,
    engine: SimulationEngine,
    status: CampaignStatus,
    /// Score the current level started with; a retry restores it.
    level_start_score: u64,
    levels_completed: u32,
}

impl Campaign {
    /// Start a campaign at level 1.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::starting_at(config, seed, 1)
    }

    /// Start a campaign at an arbitrary level (clamped like any level index).
    pub fn starting_at(config: GameConfig, seed: u64, level: u32) -> Self {
        let level = level::clamp_level(&config, level);
        log::info!(
            "campaign start: level {} of {}, seed {}",
            level,
            config.level.total_levels,
            seed
        );
        let engine = Self::start_level(&config, seed, level, 0);
        Self {
            config,
            seed,
            engine,
            status: CampaignStatus::InProgress,
            level_start_score: 0,
            levels_completed: 0,
        }
    }

    fn start_level(config: &GameConfig, seed: u64, level: u32, score: u64) -> SimulationEngine {
        SimulationEngine::new(
            config.clone(),
            SimConfig {
                seed: level_seed(seed, level),
                level,
                starting_score: score,
            },
        )
    }

    /// Tick the current level. Nothing happens once the campaign is won.
    pub fn tick(&mut self) -> Option<LevelStatus> {
        if self.status == CampaignStatus::Victory {
            return None;
        }
        self.engine.tick()
    }

    /// Move on after a completed level: either the next level starts, or the
    /// final level was just cleared and the campaign is won. Returns false
    /// when the current level is not complete.
    pub fn advance(&mut self) -> bool {
        if self.status == CampaignStatus::Victory
            || self.engine.status() != LevelStatus::LevelComplete
        {
            return false;
        }

        self.levels_completed += 1;
        let level = self.level();
        let score = self.score();

        if level >= self.config.level.total_levels {
            self.status = CampaignStatus::Victory;
            log::info!("campaign won after level {} with score {}", level, score);
            return true;
        }

        let next = level + 1;
        log::info!("advancing to level {} (score {})", next, score);
        self.engine = Self::start_level(&self.config, self.seed, next, score);
        self.level_start_score = score;
        true
    }

    /// Restart a lost level with the score it started with. Returns false
    /// unless the current level is lost.
    pub fn retry_level(&mut self) -> bool {
        if self.engine.status() != LevelStatus::Lost {
            return false;
        }
        let level = self.level();
        log::info!("retrying level {}", level);
        self.engine = Self::start_level(&self.config, self.seed, level, self.level_start_score);
        true
    }

    pub fn snapshot(&mut self) -> GameStateSnapshot {
        self.engine.snapshot()
    }

    pub fn status(&self) -> CampaignStatus {
        self.status
    }

    pub fn level(&self) -> u32 {
        self.engine.setup().level
    }

    pub fn level_status(&self) -> LevelStatus {
        self.engine.status()
    }

    pub fn score(&self) -> u64 {
        self.engine.score().points
    }

    pub fn levels_completed(&self) -> u32 {
        self.levels_completed
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }
}
