//! Game service client contract and the data it returns.

use crate::coord::Coordinate;
use async_trait::async_trait;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// One row of a players or games listing.
///
/// Listings never reveal secrets; a name is all the service publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntry {
    /// Entity name as registered with the service.
    pub name: String,
}

/// A ship as reported by the service, visible only to its owning player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    /// Ship name.
    pub name: String,
    /// Occupied locations, in the order the service lists them.
    pub locations: Vec<Coordinate>,
}

/// One strike record from a game's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Name of the player who struck.
    pub player: String,
    /// Target of the strike.
    pub location: Coordinate,
    /// Outcome text as the service recorded it.
    pub result: String,
}

/// Classified failure from a game service call.
///
/// The body of a service-reported failure is rendered verbatim and never
/// interpreted further.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ApiError {
    /// The call could not complete at all.
    #[display("transport failure: {message}")]
    Transport {
        /// Description of the underlying failure.
        message: String,
    },
    /// The call completed but the service reported a non-success status.
    #[display("{status}:{body}")]
    Service {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, passed through untouched.
        body: String,
    },
}

/// The remote operations the console drives.
///
/// Implemented by [`RestClient`](crate::RestClient) against the real
/// service and by in-memory fakes in tests. Every method blocks the
/// session until the service answers or the call fails.
#[async_trait]
pub trait GameService: Send + Sync {
    /// Lists the games known to the service.
    async fn list_games(&self) -> Result<Vec<NamedEntry>, ApiError>;

    /// Registers a new game, returning its opaque secret.
    async fn register_game(&self, name: &str) -> Result<String, ApiError>;

    /// Lists the players known to the service.
    async fn list_players(&self) -> Result<Vec<NamedEntry>, ApiError>;

    /// Registers a new player, returning its opaque secret.
    async fn register_player(&self, name: &str) -> Result<String, ApiError>;

    /// Returns the winner of a game, or `None` while play continues.
    async fn winner(&self, game: &str) -> Result<Option<String>, ApiError>;

    /// Returns the ships of one player in one game. Requires the
    /// player's secret.
    async fn ships(&self, game: &str, player: &str, secret: &str)
    -> Result<Vec<Ship>, ApiError>;

    /// Returns the full strike history of a game, in service order.
    async fn history(&self, game: &str) -> Result<Vec<HistoryEntry>, ApiError>;

    /// Submits a strike, returning the service's outcome text.
    async fn strike(
        &self,
        game: &str,
        player: &str,
        location: Coordinate,
        secret: &str,
    ) -> Result<String, ApiError>;

    /// Adds a player to a game, returning the confirmation text.
    async fn add_player(&self, game: &str, player: &str) -> Result<String, ApiError>;

    /// Starts a game, returning the confirmation text.
    async fn start_game(&self, game: &str) -> Result<String, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_renders_status_and_body() {
        let err = ApiError::Service {
            status: 404,
            body: "No such game".to_string(),
        };
        assert_eq!(err.to_string(), "404:No such game");
    }

    #[test]
    fn transport_error_renders_message() {
        let err = ApiError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "transport failure: connection refused");
    }

    #[test]
    fn ship_decodes_with_string_locations() {
        let ship: Ship =
            serde_json::from_str(r#"{"name":"Destroyer","locations":["(0,1)","(0,2)"]}"#).unwrap();
        assert_eq!(ship.name, "Destroyer");
        assert_eq!(
            ship.locations,
            vec![Coordinate::new(0, 1), Coordinate::new(0, 2)]
        );
    }

    #[test]
    fn history_entry_decodes() {
        let entry: HistoryEntry =
            serde_json::from_str(r#"{"player":"Ada","location":"(2,3)","result":"hit"}"#).unwrap();
        assert_eq!(entry.player, "Ada");
        assert_eq!(entry.location, Coordinate::new(2, 3));
        assert_eq!(entry.result, "hit");
    }
}
