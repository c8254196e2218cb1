//! Select-or-create flow shared by player and game identities.

use crate::api::{ApiError, GameService, NamedEntry};
use crate::console::Console;
use async_trait::async_trait;
use std::io;
use tracing::{info, instrument, warn};

/// A directory of named entities supporting listing and registration.
///
/// Adapters bind this to the players and games operations so a single
/// flow serves both identity kinds.
#[async_trait]
pub trait Roster {
    /// Human label used in prompts ("player" or "game").
    fn noun(&self) -> &'static str;

    /// Lists the known entities, in service order.
    async fn list(&self) -> Result<Vec<NamedEntry>, ApiError>;

    /// Registers a new entity, returning its opaque secret.
    async fn register(&self, name: &str) -> Result<String, ApiError>;
}

/// Players directory of a game service.
pub struct PlayerRoster<'a, S: GameService>(
    /// Service whose players are listed and registered.
    pub &'a S,
);

/// Games directory of a game service.
pub struct GameRoster<'a, S: GameService>(
    /// Service whose games are listed and registered.
    pub &'a S,
);

#[async_trait]
impl<S: GameService> Roster for PlayerRoster<'_, S> {
    fn noun(&self) -> &'static str {
        "player"
    }

    async fn list(&self) -> Result<Vec<NamedEntry>, ApiError> {
        self.0.list_players().await
    }

    async fn register(&self, name: &str) -> Result<String, ApiError> {
        self.0.register_player(name).await
    }
}

#[async_trait]
impl<S: GameService> Roster for GameRoster<'_, S> {
    fn noun(&self) -> &'static str {
        "game"
    }

    async fn list(&self) -> Result<Vec<NamedEntry>, ApiError> {
        self.0.list_games().await
    }

    async fn register(&self, name: &str) -> Result<String, ApiError> {
        self.0.register_game(name).await
    }
}

/// How the selector obtains a secret for an entity picked from the list.
///
/// Registration always yields the secret directly; this only governs the
/// pick-by-index branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretPrompt {
    /// The secret must be typed in. An empty line leaves the identity
    /// without a secret, to be refused later by the session guards.
    Required,
    /// An empty line is accepted outright and stored as unknown.
    Optional,
}

/// Outcome of a successful selection: a name plus whatever secret is
/// known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// Entity name, as listed or newly registered.
    pub name: String,
    /// Secret, when created here or supplied by the user.
    pub secret: Option<String>,
}

/// Runs the select-or-create flow against one roster.
///
/// Lists the entities with zero-based indices, then reads one line:
/// `Q` quits, `C` creates a new entity (registration yields the secret),
/// and anything else is taken as an index into the listing. Every
/// failure renders a line and yields `None` — an identity is either
/// fully resolved or not returned at all.
#[instrument(skip(roster, console, secret_prompt), fields(noun = roster.noun()))]
pub async fn select_or_create<R: Roster>(
    roster: &R,
    console: &mut dyn Console,
    secret_prompt: SecretPrompt,
) -> io::Result<Option<ResolvedIdentity>> {
    let noun = roster.noun();
    console.say(&format!("List of current {noun}s:\n"));

    let entries = match roster.list().await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "Listing failed");
            console.say(&format!("Something went wrong: {e}"));
            return Ok(None);
        }
    };
    for (index, entry) in entries.iter().enumerate() {
        console.say(&format!("{index}. {name}", name = entry.name));
    }

    let choice = console.ask(&format!(
        "\nEnter a number to select a {noun}, or 'C' to create or 'Q' to quit: "
    ))?;

    match choice.as_str() {
        "Q" | "q" => Ok(None),
        "C" | "c" => {
            let name = console.ask(&format!("\nPlease enter the new {noun} name: "))?;
            match roster.register(&name).await {
                Ok(secret) => {
                    info!(name = %name, "Registered new entity");
                    console.say(&format!(
                        "\nNew {noun} created, PLEASE NOTE the secret {secret}."
                    ));
                    Ok(Some(ResolvedIdentity {
                        name,
                        secret: Some(secret),
                    }))
                }
                Err(e) => {
                    warn!(error = %e, "Registration failed");
                    console.say(&format!("Error: {e}"));
                    Ok(None)
                }
            }
        }
        other => {
            let Ok(index) = other.parse::<usize>() else {
                console.say(&format!("Error: '{other}' is not a listed index."));
                return Ok(None);
            };
            let Some(entry) = entries.get(index) else {
                console.say(&format!("Error: no {noun} at index {index}."));
                return Ok(None);
            };
            let secret = match secret_prompt {
                SecretPrompt::Required => {
                    let secret = console.ask(&format!(
                        "\nPlease enter the secret for your {noun} {name}: ",
                        name = entry.name
                    ))?;
                    (!secret.is_empty()).then_some(secret)
                }
                SecretPrompt::Optional => {
                    let secret = console.ask(&format!(
                        "\nPlease enter the secret for your {noun} (if known, enter otherwise): "
                    ))?;
                    (!secret.is_empty()).then_some(secret)
                }
            };
            info!(name = %entry.name, secret_known = secret.is_some(), "Selected from listing");
            Ok(Some(ResolvedIdentity {
                name: entry.name.clone(),
                secret,
            }))
        }
    }
}
