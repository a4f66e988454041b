#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::commands::{LaunchResult, PlayerCommand};
    use crate::config::{ConfigError, GameConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{EntityId, Position, SimClock, Velocity};

    // ---- Clock ----

    #[test]
    fn test_clock_elapsed_and_remaining() {
        let mut clock = SimClock::new(60, 60.0);
        for _ in 0..90 {
            clock.advance();
        }
        assert_eq!(clock.tick, 90);
        assert_relative_eq!(clock.elapsed_secs(), 1.5);
        assert_relative_eq!(clock.remaining_secs(), 58.5);
        assert_relative_eq!(clock.progress(), 0.025);
        assert!(!clock.is_expired());
    }

    #[test]
    fn test_clock_remaining_floors_at_zero() {
        let mut clock = SimClock::new(10, 1.0);
        for _ in 0..25 {
            clock.advance();
        }
        assert_eq!(clock.remaining_secs(), 0.0);
        assert_eq!(clock.progress(), 1.0);
        assert!(clock.is_expired());
    }

    // ---- Geometry ----

    #[test]
    fn test_within_box_is_axis_aligned_and_strict() {
        let city = Position::new(100.0, 500.0);
        // Diagonal offset outside a 15px circle but inside the 15px box.
        assert!(Position::new(112.0, 512.0).within_box(&city, 15.0));
        assert!(Position::new(112.0, 512.0).range_to(&city) > 15.0);
        // Exactly on the tolerance is a miss.
        assert!(!Position::new(115.0, 500.0).within_box(&city, 15.0));
        assert!(!Position::new(100.0, 484.0).within_box(&city, 15.0));
    }

    #[test]
    fn test_velocity_speed() {
        assert_relative_eq!(Velocity::new(3.0, -4.0).speed(), 5.0);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.level.tick_rate, TICK_RATE);
        assert_eq!(config.level.total_levels, 100);
        assert_eq!(config.field.city_x_fractions.len(), 6);
        assert_eq!(config.explosions.max_radius, 40.0);
        assert_eq!(config.explosions.growth_rate, 1.5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            [level]
            total_levels = 10
            rockets_first_level = 5

            [scoring]
            points_per_kill = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.level.total_levels, 10);
        assert_eq!(config.level.rockets_first_level, 5);
        assert_eq!(config.level.rockets_final_level, ROCKETS_FINAL_LEVEL);
        assert_eq!(config.scoring.points_per_kill, 25);
        assert_eq!(config.interceptors.speed, INTERCEPTOR_SPEED);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GameConfig::default();
        let text = config.to_toml_string().unwrap();
        let back = GameConfig::from_toml_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_invalid_speed_range_rejected() {
        let err = GameConfig::from_toml_str(
            r#"
            [rockets]
            speed_min = 2.0
            speed_max = 1.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err}");
    }

    #[test]
    fn test_inverted_quota_rejected() {
        let mut config = GameConfig::default();
        config.level.rockets_first_level = 500;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = GameConfig::from_toml_str("[level\ntotal_levels = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load("/nonexistent/skyshield.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    // ---- Commands / events ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::LaunchInterceptor {
                origin: Position::new(10.0, 20.0),
                target: Position::new(30.0, 40.0),
            },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_launch_result_accessors() {
        let ok = LaunchResult::Launched {
            battery_id: EntityId(2),
            interceptor_id: EntityId(17),
        };
        assert!(ok.is_ok());
        assert_eq!(ok.battery_id(), Some(EntityId(2)));
        assert_eq!(ok.interceptor_id(), Some(EntityId(17)));

        let noop = LaunchResult::NoEligibleBattery;
        assert!(!noop.is_ok());
        assert_eq!(noop.battery_id(), None);
    }

    #[test]
    fn test_snapshot_serializes_with_events() {
        let snapshot = GameStateSnapshot {
            level: 3,
            status: LevelStatus::Lost,
            events: vec![SimEvent::LevelStatusChanged {
                status: LevelStatus::Lost,
                tick: 99,
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("LevelStatusChanged"));
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.level, 3);
        assert_eq!(back.events, snapshot.events);
    }

    #[test]
    fn test_status_helpers() {
        assert!(!LevelStatus::Active.is_terminal());
        assert!(LevelStatus::Lost.is_terminal());
        assert!(LevelStatus::LevelComplete.is_terminal());
        assert!(BlastSource::Defensive.awards_points());
        assert!(!BlastSource::Ground.awards_points());
    }
}
