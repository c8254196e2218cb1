//! Shared test doubles: a scripted console and an in-memory game service.

#![allow(dead_code)]

use async_trait::async_trait;
use battleships_console::{
    ApiError, Console, Coordinate, GameService, HistoryEntry, NamedEntry, Ship,
};
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

/// Console fed from a fixed list of input lines, capturing all output.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    /// All captured output joined by newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Number of output entries containing `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.output.iter().filter(|line| line.contains(needle)).count()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.output.push(prompt.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

pub fn entry(name: &str) -> NamedEntry {
    NamedEntry {
        name: name.to_string(),
    }
}

pub fn transport_failure() -> ApiError {
    ApiError::Transport {
        message: "connection refused".to_string(),
    }
}

/// In-memory game service with canned responses and a call log.
#[derive(Debug)]
pub struct FakeService {
    pub players: Result<Vec<NamedEntry>, ApiError>,
    pub games: Result<Vec<NamedEntry>, ApiError>,
    pub register_player_result: Result<String, ApiError>,
    pub register_game_result: Result<String, ApiError>,
    pub winner_result: Result<Option<String>, ApiError>,
    pub ships_result: Result<Vec<Ship>, ApiError>,
    pub history_result: Result<Vec<HistoryEntry>, ApiError>,
    pub strike_result: Result<String, ApiError>,
    pub add_player_result: Result<String, ApiError>,
    pub start_game_result: Result<String, ApiError>,
    calls: Mutex<Vec<String>>,
}

impl FakeService {
    pub fn new() -> Self {
        Self {
            players: Ok(vec![entry("Ada"), entry("Bob")]),
            games: Ok(vec![entry("g1")]),
            register_player_result: Ok("s1".to_string()),
            register_game_result: Ok("gs1".to_string()),
            winner_result: Ok(None),
            ships_result: Ok(Vec::new()),
            history_result: Ok(Vec::new()),
            strike_result: Ok("Hit".to_string()),
            add_player_result: Ok("Player added".to_string()),
            start_game_result: Ok("Game started".to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The calls made so far, in order, one descriptor per call.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn log(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GameService for FakeService {
    async fn list_games(&self) -> Result<Vec<NamedEntry>, ApiError> {
        self.log("list_games".to_string());
        self.games.clone()
    }

    async fn register_game(&self, name: &str) -> Result<String, ApiError> {
        self.log(format!("register_game {name}"));
        self.register_game_result.clone()
    }

    async fn list_players(&self) -> Result<Vec<NamedEntry>, ApiError> {
        self.log("list_players".to_string());
        self.players.clone()
    }

    async fn register_player(&self, name: &str) -> Result<String, ApiError> {
        self.log(format!("register_player {name}"));
        self.register_player_result.clone()
    }

    async fn winner(&self, game: &str) -> Result<Option<String>, ApiError> {
        self.log(format!("winner {game}"));
        self.winner_result.clone()
    }

    async fn ships(
        &self,
        game: &str,
        player: &str,
        secret: &str,
    ) -> Result<Vec<Ship>, ApiError> {
        self.log(format!("ships {game} {player} {secret}"));
        self.ships_result.clone()
    }

    async fn history(&self, game: &str) -> Result<Vec<HistoryEntry>, ApiError> {
        self.log(format!("history {game}"));
        self.history_result.clone()
    }

    async fn strike(
        &self,
        game: &str,
        player: &str,
        location: Coordinate,
        secret: &str,
    ) -> Result<String, ApiError> {
        self.log(format!("strike {game} {player} {} {secret}", location.wire()));
        self.strike_result.clone()
    }

    async fn add_player(&self, game: &str, player: &str) -> Result<String, ApiError> {
        self.log(format!("add_player {game} {player}"));
        self.add_player_result.clone()
    }

    async fn start_game(&self, game: &str) -> Result<String, ApiError> {
        self.log(format!("start_game {game}"));
        self.start_game_result.clone()
    }
}
