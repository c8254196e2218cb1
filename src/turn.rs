//! In-game command loop for an armed player.

use crate::api::GameService;
use crate::console::Console;
use crate::coord::Coordinate;
use crate::session::{Precondition, Session};
use std::io;
use tracing::{debug, info, instrument, warn};

/// States of the in-game command loop.
///
/// The winner is re-checked before every prompt, so command states
/// transition back through [`TurnState::CheckingWin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Render the banner and query the winner before prompting.
    CheckingWin,
    /// Prompt for and classify the next command.
    AwaitingCommand,
    /// Submit a strike at the parsed coordinate.
    Striking(Coordinate),
    /// Fetch and render the player's ships.
    ShowingShips,
    /// Fetch and render the game history.
    ShowingHistory,
    /// Leave game mode.
    Exited,
}

/// Maps one input line to the next state.
///
/// `None` means the line was not a recognized command or coordinate.
fn classify(choice: &str) -> Option<TurnState> {
    match choice {
        "Q" | "q" => Some(TurnState::Exited),
        "S" | "s" => Some(TurnState::ShowingShips),
        "A" | "a" => Some(TurnState::ShowingHistory),
        other => Coordinate::parse(other).map(TurnState::Striking),
    }
}

/// Drives game mode for one player in one game.
///
/// Entered only with a selected game and a player whose secret is
/// known. A failed remote call renders one line and the loop continues;
/// only `Q` leaves game mode.
#[derive(Debug)]
pub struct TurnController<'a, S: GameService> {
    service: &'a S,
    game: String,
    player: String,
    secret: String,
}

impl<'a, S: GameService> TurnController<'a, S> {
    /// Builds a controller from the session, enforcing the entry
    /// preconditions: a selected game, and a player with a secret. The
    /// session itself is never modified from game mode.
    pub fn from_session(service: &'a S, session: &Session) -> Result<Self, Precondition> {
        let game = session.selected_game()?;
        let player = session.armed_player()?;
        Ok(Self {
            service,
            game: game.name().clone(),
            player: player.name.to_string(),
            secret: player.secret.to_string(),
        })
    }

    /// Runs the command loop until the player quits.
    #[instrument(skip(self, console), fields(game = %self.game, player = %self.player))]
    pub async fn run(&self, console: &mut dyn Console) -> io::Result<()> {
        info!("Entering game mode");
        let mut state = TurnState::CheckingWin;
        loop {
            debug!(state = ?state, "Turn state");
            state = match state {
                TurnState::CheckingWin => self.check_win(console).await,
                TurnState::AwaitingCommand => self.prompt(console)?,
                TurnState::Striking(location) => self.strike(console, location).await,
                TurnState::ShowingShips => self.show_ships(console).await,
                TurnState::ShowingHistory => self.show_history(console).await,
                TurnState::Exited => {
                    info!("Leaving game mode");
                    return Ok(());
                }
            };
        }
    }

    /// Renders the banner and the win announcement, if any.
    ///
    /// A declared winner does not block further commands; the service
    /// remains the judge of whether a late strike means anything.
    async fn check_win(&self, console: &mut dyn Console) -> TurnState {
        console.say(&format!(
            "Welcome to Battleships!\nYou are playing the game: {}\nYou are player: {}\n",
            self.game, self.player
        ));
        console.say("Game mode:");
        match self.service.winner(&self.game).await {
            Ok(Some(winner)) => {
                info!(winner = %winner, "Game has a winner");
                console.say(&format!(
                    "Player {winner} has won the game!\nGAME OVER!!!\n"
                ));
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "Win check failed");
                console.say(&format!("Something went wrong: {e}"));
            }
        }
        TurnState::AwaitingCommand
    }

    /// Renders the command menu and classifies one line of input.
    fn prompt(&self, console: &mut dyn Console) -> io::Result<TurnState> {
        console.say("Enter coordinates in brackets to strike e.g. (2,3) or:");
        console.say("A. To refresh action list");
        console.say("S. To show your ship positions");
        console.say("Q. To quit game mode");
        let choice = console.ask("Please make a selection: ")?;
        Ok(match classify(&choice) {
            Some(next) => next,
            None => {
                console.say("Invalid choice!");
                TurnState::CheckingWin
            }
        })
    }

    /// Submits a strike and renders the service's outcome text.
    #[instrument(skip(self, console))]
    async fn strike(&self, console: &mut dyn Console, location: Coordinate) -> TurnState {
        match self
            .service
            .strike(&self.game, &self.player, location, &self.secret)
            .await
        {
            Ok(outcome) => {
                info!(%location, outcome = %outcome, "Strike submitted");
                console.say(&format!(
                    "Strike attempt by {player} at {location}.\nResult: {outcome}",
                    player = self.player
                ));
            }
            Err(e) => {
                warn!(error = %e, "Strike failed");
                console.say(&format!("Something went wrong: {e}"));
            }
        }
        TurnState::CheckingWin
    }

    /// Fetches and renders the player's ships.
    #[instrument(skip(self, console))]
    async fn show_ships(&self, console: &mut dyn Console) -> TurnState {
        match self
            .service
            .ships(&self.game, &self.player, &self.secret)
            .await
        {
            Ok(ships) => {
                console.say(&format!(
                    "In game {}, player {} has {} ships.",
                    self.game,
                    self.player,
                    ships.len()
                ));
                for ship in &ships {
                    console.say(&ship.name);
                    for location in &ship.locations {
                        console.say(&location.to_string());
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Fetching ships failed");
                console.say(&format!("Something went wrong: {e}"));
            }
        }
        TurnState::CheckingWin
    }

    /// Fetches and renders the game history, in service order.
    #[instrument(skip(self, console))]
    async fn show_history(&self, console: &mut dyn Console) -> TurnState {
        match self.service.history(&self.game).await {
            Ok(actions) => {
                console.say(&format!(
                    "In game {}, there have been {} actions.",
                    self.game,
                    actions.len()
                ));
                for action in &actions {
                    console.say(&format!(
                        "{player}: {location} - {result}",
                        player = action.player,
                        location = action.location,
                        result = action.result
                    ));
                }
            }
            Err(e) => {
                warn!(error = %e, "Fetching history failed");
                console.say(&format!("Something went wrong: {e}"));
            }
        }
        TurnState::CheckingWin
    }
}
