//! Local session state: which player, which game, which secrets are known.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use tracing::{info, instrument};

/// A resolved player identity.
///
/// The secret is known only when the player was created in this process
/// or the user typed it in; it is opaque and only ever forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct PlayerIdentity {
    /// Player name as registered with the service.
    name: String,
    /// Opaque write-access secret, when known.
    secret: Option<String>,
}

/// A resolved game identity.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct GameIdentity {
    /// Game name as registered with the service.
    name: String,
    /// Opaque game secret, when known. Not demanded by any operation
    /// this console performs.
    secret: Option<String>,
}

/// Missing prerequisite for a session-guarded action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Precondition {
    /// No player has been selected.
    #[display("You must select a player with a secret.")]
    NoPlayer,
    /// A player is selected but its secret is unknown.
    #[display("You must select a player with a secret.")]
    NoPlayerSecret,
    /// No game has been selected.
    #[display("You must select a game.")]
    NoGame,
}

/// A player cleared for write access: name and secret both present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmedPlayer<'a> {
    /// Player name.
    pub name: &'a str,
    /// Player secret.
    pub secret: &'a str,
}

/// The player and game this process is currently operating as.
///
/// Created empty at startup, mutated only by the menu navigator after a
/// successful identity resolution, and discarded at process exit. An
/// identity is replaced whole or not at all.
#[derive(Debug, Clone, Default, Getters)]
pub struct Session {
    /// Currently resolved player, if any.
    player: Option<PlayerIdentity>,
    /// Currently resolved game, if any.
    game: Option<GameIdentity>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the resolved player identity.
    #[instrument(skip(self, player), fields(name = %player.name()))]
    pub fn set_player(&mut self, player: PlayerIdentity) {
        info!(secret_known = player.secret().is_some(), "Player selected");
        self.player = Some(player);
    }

    /// Replaces the resolved game identity.
    #[instrument(skip(self, game), fields(name = %game.name()))]
    pub fn set_game(&mut self, game: GameIdentity) {
        info!(secret_known = game.secret().is_some(), "Game selected");
        self.game = Some(game);
    }

    /// The player guarded for write access: present and holding a
    /// secret. Showing ships and striking go through this.
    pub fn armed_player(&self) -> Result<ArmedPlayer<'_>, Precondition> {
        let player = self.player.as_ref().ok_or(Precondition::NoPlayer)?;
        let secret = player
            .secret()
            .as_deref()
            .ok_or(Precondition::NoPlayerSecret)?;
        Ok(ArmedPlayer {
            name: player.name(),
            secret,
        })
    }

    /// The game guarded for game-scoped operations (starting, adding
    /// players, striking).
    pub fn selected_game(&self) -> Result<&GameIdentity, Precondition> {
        self.game.as_ref().ok_or(Precondition::NoGame)
    }
}
