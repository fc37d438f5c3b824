//! Command plumbing between the host and the frame-loop thread.

use popshot_core::commands::PlayerCommand;

/// Commands accepted by the frame-loop thread.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    Player(PlayerCommand),
    Shutdown,
}
