use log::{info, warn};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::coordinate::Coordinate;
use crate::board::Board;
use crate::chess_move::chess_move::Move;
use crate::chess_move::move_set::MoveSet;
use crate::evaluate::{self, GameState};
use crate::legality::{MoveFilter, StandardRules};

use super::config::GameConfig;
use super::observer::GameObserver;

/// Represents the state and control of a chess game: the board, whose turn it
/// is, the current selection and the rules in force.
pub struct Game {
    board: Board,
    filter: Box<dyn MoveFilter>,
    turn: Color,
    state: GameState,
    selected: Option<Coordinate>,
    move_history: Vec<Move>,
    observers: Vec<Box<dyn GameObserver>>,
}

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("there is no piece on {0}")]
    NoPieceAt(Coordinate),
    #[error("it is {turn}'s turn")]
    NotYourTurn { turn: Color },
    #[error("{from}{to} is not a valid move")]
    InvalidMove { from: Coordinate, to: Coordinate },
}

/// Outcome of `Game::select`.
#[derive(Debug, PartialEq)]
pub enum Selection {
    /// An observer refused the selection.
    Vetoed,
    Rejected,
    Deselected,
    Selected,
    Moved(Move),
    /// The move was found but the board refused it; the previous selection
    /// is kept.
    MoveFailed,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(config.starting_position, config.first_turn)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut game = Self {
            board,
            filter: Box::new(StandardRules),
            turn,
            state: GameState::Normal,
            selected: None,
            move_history: Vec::new(),
            observers: Vec::new(),
        };
        game.state = game.evaluate();
        game
    }

    /// Replaces the legality policy and re-evaluates the position under it.
    pub fn set_filter(&mut self, filter: Box<dyn MoveFilter>) {
        self.filter = filter;
        self.selected = None;
        self.update_state();
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn filter(&self) -> &dyn MoveFilter {
        self.filter.as_ref()
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn selected(&self) -> Option<Coordinate> {
        self.selected
    }

    pub fn history(&self) -> &[Move] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    pub fn legal_moves(&self, at: Coordinate) -> Option<MoveSet> {
        self.board.legal_moves(at, self.filter.as_ref())
    }

    pub fn legal_moves_for_turn(&self) -> MoveSet {
        self.board.legal_moves_for_color(self.turn, self.filter.as_ref())
    }

    /// Legal moves of the selected piece, empty without a selection.
    pub fn selected_moves(&self) -> MoveSet {
        self.selected
            .and_then(|at| self.legal_moves(at))
            .unwrap_or_default()
    }

    /// Executes a move for the side to move. Refused once the game is
    /// decided, for the wrong side, for a move flagged as chained, or when
    /// the board rejects it.
    pub fn execute_move(&mut self, chess_move: &Move) -> bool {
        if self.state.is_over() {
            warn!("rejecting move {}: the game is over ({})", chess_move, self.state);
            return false;
        }
        if chess_move.ignores_legality_recheck() {
            warn!("rejecting move {}: only chained moves may skip legality", chess_move);
            return false;
        }
        match self.board.get(chess_move.start()) {
            Some(piece) if piece.color == self.turn => {}
            _ => {
                warn!("rejecting move {}: not {}'s piece", chess_move, self.turn);
                return false;
            }
        }
        if !self.board.execute_move(chess_move, self.filter.as_ref()) {
            return false;
        }

        self.move_history.push(chess_move.clone());
        let board = &self.board;
        for observer in self.observers.iter_mut() {
            observer.piece_moved(board, chess_move);
        }

        self.turn = self.turn.opposite();
        self.update_state();
        true
    }

    /// Resolves the legal move between two squares and executes it.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> Result<Move, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }
        let piece = self.board.get(from).ok_or(GameError::NoPieceAt(from))?;
        if piece.color != self.turn {
            return Err(GameError::NotYourTurn { turn: self.turn });
        }
        let chess_move = self
            .legal_moves(from)
            .and_then(|moves| moves.find(from, to).cloned())
            .ok_or(GameError::InvalidMove { from, to })?;
        if !self.execute_move(&chess_move) {
            return Err(GameError::InvalidMove { from, to });
        }
        self.selected = None;
        Ok(chess_move)
    }

    /// Handles a click on `at`: selecting a piece of the side to move,
    /// moving the selected piece to one of its legal targets, or toggling
    /// the selection off.
    pub fn select(&mut self, at: Coordinate) -> Selection {
        let board = &self.board;
        if !self.observers.iter_mut().all(|o| o.selecting(board, at)) {
            return Selection::Vetoed;
        }
        if self.state.is_over() {
            return Selection::Rejected;
        }
        if self.selected == Some(at) {
            self.selected = None;
            return Selection::Deselected;
        }

        if let Some(from) = self.selected {
            let target = self
                .legal_moves(from)
                .and_then(|moves| moves.find(from, at).cloned());
            if let Some(chess_move) = target {
                self.selected = None;
                if self.execute_move(&chess_move) {
                    return Selection::Moved(chess_move);
                }
                self.selected = Some(from);
                return Selection::MoveFailed;
            }
        }

        let own_piece = self
            .board
            .get(at)
            .map_or(false, |piece| piece.color == self.turn);
        if !own_piece {
            return Selection::Rejected;
        }

        self.selected = Some(at);
        let moves = self.selected_moves();
        let board = &self.board;
        for observer in self.observers.iter_mut() {
            observer.selected(board, at, &moves);
        }
        Selection::Selected
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    fn evaluate(&self) -> GameState {
        evaluate::game_state(&self.board, self.filter.as_ref(), self.turn)
    }

    fn update_state(&mut self) {
        let state = self.evaluate();
        if state == self.state {
            return;
        }
        info!("game state: {} -> {}", self.state, state);
        self.state = state;
        for observer in self.observers.iter_mut() {
            observer.state_changed(state);
        }
    }
}
