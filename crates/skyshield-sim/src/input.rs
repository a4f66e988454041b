//! Pointer input to launch commands.

use skyshield_core::commands::PlayerCommand;
use skyshield_core::config::GameConfig;
use skyshield_core::types::Position;

/// Clamp a pointer position into the playfield.
pub fn clamp_to_field(config: &GameConfig, point: Position) -> Position {
    let field = &config.field;
    Position::new(
        point.x.max(0.0).min(field.width),
        point.y.max(0.0).min(field.height),
    )
}

/// A click becomes a launch whose origin and aim point are both the clicked
/// point, so the nearest battery fires at it.
pub fn pointer_command(config: &GameConfig, point: Position) -> PlayerCommand {
    let point = clamp_to_field(config, point);
    PlayerCommand::LaunchInterceptor {
        origin: point,
        target: point,
    }
}
