//! Interactive console client for a remote battleships game service.
//!
//! The authoritative game state — boards, ship placement, strike
//! adjudication, win detection — lives on the remote service. This crate
//! manages the local session (which player, which game, which secrets
//! are known) and drives the remote operations through a menu loop.
//!
//! # Architecture
//!
//! - **Contract**: [`GameService`] covers the remote operations;
//!   [`RestClient`] implements it over HTTP.
//! - **Session**: [`Session`] holds the resolved identities and guards
//!   the actions that need a secret or a game.
//! - **Flows**: [`select_or_create`] resolves identities,
//!   [`TurnController`] runs game mode, [`MenuNavigator`] ties it all
//!   together over a [`Console`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod config;
mod console;
mod coord;
mod menu;
mod rest;
mod select;
mod session;
mod turn;

// Crate-level exports - Service contract
pub use api::{ApiError, GameService, HistoryEntry, NamedEntry, Ship};

// Crate-level exports - Configuration
pub use config::{ClientConfig, ConfigError};

// Crate-level exports - Console seam
pub use console::{Console, StdConsole};

// Crate-level exports - Coordinates
pub use coord::{Coordinate, ParseCoordinateError};

// Crate-level exports - Interactive flows
pub use menu::{MenuNavigator, MenuState};
pub use select::{
    GameRoster, PlayerRoster, ResolvedIdentity, Roster, SecretPrompt, select_or_create,
};
pub use turn::{TurnController, TurnState};

// Crate-level exports - REST client
pub use rest::RestClient;

// Crate-level exports - Session state
pub use session::{ArmedPlayer, GameIdentity, PlayerIdentity, Precondition, Session};
