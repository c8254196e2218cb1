//! REST implementation of the game service contract.

use crate::api::{ApiError, GameService, HistoryEntry, NamedEntry, Ship};
use crate::config::ClientConfig;
use crate::coord::Coordinate;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// HTTP client for the remote battleships service.
///
/// Every operation is a GET against `{base_url}/{api_version}/{call}/`.
/// Calls carry a bounded timeout and are retried once on transport
/// failure; a service-reported failure is never retried.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    api_version: String,
    client: reqwest::Client,
}

impl RestClient {
    /// Builds a client from the resolved configuration.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| ApiError::Transport {
                message: e.to_string(),
            })?;
        Ok(Self {
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_version: config.api_version().clone(),
            client,
        })
    }

    fn url(&self, call: &str) -> String {
        format!("{}/{}/{}/", self.base_url, self.api_version, call)
    }

    /// Performs one API call, returning the raw response body.
    #[instrument(skip(self))]
    async fn call(&self, call: &str) -> Result<String, ApiError> {
        let url = self.url(call);
        debug!(url = %url, "API call");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(first) => {
                warn!(error = %first, "Request failed, retrying once");
                self.client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| ApiError::Transport {
                        message: e.to_string(),
                    })?
            }
        };

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Transport {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            warn!(status = %status, body = %body, "API returned error");
            return Err(ApiError::Service {
                status: status.as_u16(),
                body,
            });
        }

        debug!(bytes = body.len(), "API call succeeded");
        Ok(body)
    }

    /// Performs one API call and decodes the JSON body.
    async fn call_json<T: serde::de::DeserializeOwned>(&self, call: &str) -> Result<T, ApiError> {
        let body = self.call(call).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Transport {
            message: format!("undecodable response: {e}"),
        })
    }
}

#[async_trait]
impl GameService for RestClient {
    async fn list_games(&self) -> Result<Vec<NamedEntry>, ApiError> {
        self.call_json("games/index").await
    }

    async fn register_game(&self, name: &str) -> Result<String, ApiError> {
        self.call(&format!("games/register/{name}")).await
    }

    async fn list_players(&self) -> Result<Vec<NamedEntry>, ApiError> {
        self.call_json("players/index").await
    }

    async fn register_player(&self, name: &str) -> Result<String, ApiError> {
        self.call(&format!("players/register/{name}")).await
    }

    async fn winner(&self, game: &str) -> Result<Option<String>, ApiError> {
        let body = self.call(&format!("games/getwinner/{game}")).await?;
        let name = body.trim();
        Ok((!name.is_empty()).then(|| name.to_string()))
    }

    async fn ships(
        &self,
        game: &str,
        player: &str,
        secret: &str,
    ) -> Result<Vec<Ship>, ApiError> {
        self.call_json(&format!("games/getships/{game}/{player}/{secret}"))
            .await
    }

    async fn history(&self, game: &str) -> Result<Vec<HistoryEntry>, ApiError> {
        self.call_json(&format!("games/history/{game}")).await
    }

    async fn strike(
        &self,
        game: &str,
        player: &str,
        location: Coordinate,
        secret: &str,
    ) -> Result<String, ApiError> {
        self.call(&format!(
            "strike/{game}/{player}/{location}/{secret}",
            location = location.wire()
        ))
        .await
    }

    async fn add_player(&self, game: &str, player: &str) -> Result<String, ApiError> {
        self.call(&format!("games/addplayer/{game}/{player}")).await
    }

    async fn start_game(&self, game: &str) -> Result<String, ApiError> {
        self.call(&format!("games/start/{game}")).await
    }
}
