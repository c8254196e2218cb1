//! Top-level menu driving the whole interactive process.

use crate::api::GameService;
use crate::console::Console;
use crate::select::{GameRoster, PlayerRoster, SecretPrompt, select_or_create};
use crate::session::{GameIdentity, PlayerIdentity, Session};
use crate::turn::TurnController;
use std::io;
use tracing::{debug, info, instrument, warn};

/// States of the top-level menu machine.
///
/// Each interactive action is its own state; every action returns to
/// [`MenuState::MainMenu`] except quitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Render the banner and the action menu, read one choice.
    MainMenu,
    /// Resolve or replace the player identity.
    SelectingPlayer,
    /// Resolve or replace the game identity.
    SelectingGame,
    /// Add a listed player to the selected game.
    AddingPlayers,
    /// Start the selected game.
    StartingGame,
    /// Hand control to the turn controller.
    Playing,
    /// Leave the process loop.
    Exited,
}

/// Maps one main-menu input line to the next state.
fn classify(choice: &str) -> Option<MenuState> {
    match choice {
        "1" => Some(MenuState::SelectingPlayer),
        "2" => Some(MenuState::SelectingGame),
        "3" => Some(MenuState::AddingPlayers),
        "4" => Some(MenuState::StartingGame),
        "5" => Some(MenuState::Playing),
        "Q" | "q" => Some(MenuState::Exited),
        _ => None,
    }
}

/// Top-level menu loop over the session and the remote service.
///
/// Owns the only mutable [`Session`] in the process; identities change
/// only here, and only after a selector resolves one fully.
#[derive(Debug)]
pub struct MenuNavigator<'a, S: GameService> {
    service: &'a S,
    session: Session,
}

impl<'a, S: GameService> MenuNavigator<'a, S> {
    /// Creates a navigator with an empty session.
    pub fn new(service: &'a S) -> Self {
        Self {
            service,
            session: Session::new(),
        }
    }

    /// Read-only view of the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the menu loop until the user quits.
    #[instrument(skip(self, console))]
    pub async fn run(&mut self, console: &mut dyn Console) -> io::Result<()> {
        info!("Starting menu loop");
        let mut state = MenuState::MainMenu;
        loop {
            debug!(state = ?state, "Menu state");
            state = match state {
                MenuState::MainMenu => self.main_menu(console)?,
                MenuState::SelectingPlayer => self.select_player(console).await?,
                MenuState::SelectingGame => self.select_game(console).await?,
                MenuState::AddingPlayers => self.add_players(console).await?,
                MenuState::StartingGame => self.start_game(console).await?,
                MenuState::Playing => self.play(console).await?,
                MenuState::Exited => {
                    console.say("Thanks for playing!");
                    info!("Menu loop finished");
                    return Ok(());
                }
            };
        }
    }

    /// Renders the banner naming the resolved game and player, if any.
    fn banner(&self, console: &mut dyn Console) {
        let game = self
            .session
            .game()
            .as_ref()
            .map(|g| g.name().as_str())
            .unwrap_or("none");
        let player = self
            .session
            .player()
            .as_ref()
            .map(|p| p.name().as_str())
            .unwrap_or("none");
        console.say(&format!(
            "Welcome to Battleships!\nYou are playing the game: {game}\nYou are player: {player}\n"
        ));
    }

    fn main_menu(&mut self, console: &mut dyn Console) -> io::Result<MenuState> {
        self.banner(console);
        console.say("1. Select a player or create one");
        console.say("2. Select a game or create one");
        console.say("3. Add players to the selected game");
        console.say("4. Start the selected game");
        console.say("5. Play the selected game");
        console.say("Q. Quit");
        let choice = console.ask("Please enter your choice: ")?;
        Ok(match classify(&choice) {
            Some(next) => next,
            None => {
                console.say("Invalid choice!");
                MenuState::MainMenu
            }
        })
    }

    /// Resolves the player identity; a failed resolution leaves the
    /// session unchanged.
    async fn select_player(&mut self, console: &mut dyn Console) -> io::Result<MenuState> {
        let roster = PlayerRoster(self.service);
        if let Some(identity) = select_or_create(&roster, console, SecretPrompt::Required).await? {
            self.session
                .set_player(PlayerIdentity::new(identity.name, identity.secret));
        }
        Ok(MenuState::MainMenu)
    }

    /// Resolves the game identity; a failed resolution leaves the
    /// session unchanged.
    async fn select_game(&mut self, console: &mut dyn Console) -> io::Result<MenuState> {
        let roster = GameRoster(self.service);
        if let Some(identity) = select_or_create(&roster, console, SecretPrompt::Optional).await? {
            self.session
                .set_game(GameIdentity::new(identity.name, identity.secret));
        }
        Ok(MenuState::MainMenu)
    }

    /// Lists the players and adds the chosen one to the selected game.
    /// One player per invocation; `Q` cancels without a call.
    #[instrument(skip(self, console))]
    async fn add_players(&mut self, console: &mut dyn Console) -> io::Result<MenuState> {
        let game = match self.session.selected_game() {
            Ok(game) => game.name().clone(),
            Err(_) => {
                console.say("You need to select a game first.");
                return Ok(MenuState::MainMenu);
            }
        };

        console.say("List of current players:\n");
        let players = match self.service.list_players().await {
            Ok(players) => players,
            Err(e) => {
                warn!(error = %e, "Listing players failed");
                console.say(&format!("Something went wrong: {e}"));
                return Ok(MenuState::MainMenu);
            }
        };
        for (index, player) in players.iter().enumerate() {
            console.say(&format!("{index}. {name}", name = player.name));
        }

        let choice = console.ask("\nEnter a number to select a player, or 'Q' to quit: ")?;
        if matches!(choice.as_str(), "Q" | "q") {
            return Ok(MenuState::MainMenu);
        }
        let Ok(index) = choice.parse::<usize>() else {
            console.say(&format!("Error: '{choice}' is not a listed index."));
            return Ok(MenuState::MainMenu);
        };
        let Some(player) = players.get(index) else {
            console.say(&format!("Error: no player at index {index}."));
            return Ok(MenuState::MainMenu);
        };

        match self.service.add_player(&game, &player.name).await {
            Ok(confirmation) => {
                info!(game = %game, player = %player.name, "Player added to game");
                console.say(&confirmation);
            }
            Err(e) => {
                warn!(error = %e, "Adding player failed");
                console.say(&format!("Error: {e}"));
            }
        }
        Ok(MenuState::MainMenu)
    }

    /// Starts the selected game.
    #[instrument(skip(self, console))]
    async fn start_game(&mut self, console: &mut dyn Console) -> io::Result<MenuState> {
        let game = match self.session.selected_game() {
            Ok(game) => game.name().clone(),
            Err(_) => {
                console.say("You need to select a game first.");
                return Ok(MenuState::MainMenu);
            }
        };
        match self.service.start_game(&game).await {
            Ok(confirmation) => {
                info!(game = %game, "Game started");
                console.say(&confirmation);
            }
            Err(e) => {
                warn!(error = %e, "Starting game failed");
                console.say(&format!("Error: {e}"));
            }
        }
        Ok(MenuState::MainMenu)
    }

    /// Enters game mode when the session preconditions hold; renders
    /// the missing precondition otherwise, leaving the session as-is.
    async fn play(&mut self, console: &mut dyn Console) -> io::Result<MenuState> {
        match TurnController::from_session(self.service, &self.session) {
            Ok(controller) => controller.run(console).await?,
            Err(precondition) => {
                warn!(precondition = %precondition, "Refusing to enter game mode");
                console.say(&precondition.to_string());
            }
        }
        Ok(MenuState::MainMenu)
    }
}
