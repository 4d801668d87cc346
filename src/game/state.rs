//! The game orchestrator and turn state machine.
//!
//! ## Turn flow
//!
//! ```text
//! AwaitingRoll --roll()--> AwaitingAction --enter/move + next_turn_if_needed()--> AwaitingRoll
//!                                         --pass()-------------------------------> AwaitingRoll
//! any state ------------------------------------------------------------------> GameOver
//! ```
//!
//! Every action either succeeds completely or returns a `RuleViolation`
//! without touching state: destinations are computed before anything is
//! mutated. Successful mutations notify subscribers synchronously.
//!
//! ## Example
//!
//! ```
//! use patolli::core::{Dice, PlayerColor};
//! use patolli::events::GameEvent;
//! use patolli::game::GameBuilder;
//!
//! let mut game = GameBuilder::new()
//!     .first_player(PlayerColor::Black)
//!     .dice(Dice::loaded([1]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(game.roll(), Ok(1));
//! // Black's seeded piece blocks the start cell, so it has to move.
//! assert!(!game.can_enter_new_piece());
//! let piece = game.movable_pieces()[0];
//! game.move_piece(piece).unwrap();
//! game.next_turn_if_needed();
//!
//! assert_eq!(game.current(), PlayerColor::White);
//! assert_eq!(game.history().last(), Some(&GameEvent::Turn));
//! ```

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{
    Dice, Piece, PieceId, PiecePosition, PieceRef, Player, PlayerColor, RuleViolation,
};
use crate::events::{GameEvent, ObserverRegistry, SubscriberId};
use crate::rules::{Destination, GameOutcome, MovementRules, ScoringRules, WinCause};

/// Where the game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TurnPhase {
    /// No roll pending.
    AwaitingRoll,
    /// Rolled; the player must move, enter, or pass.
    AwaitingAction,
    /// Terminal.
    GameOver,
}

/// What `next_turn_if_needed` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnChange {
    /// Control passed to the opponent.
    Switched,
    /// The same player rolls again.
    ExtraTurn,
    /// Nothing changed because the game is decided.
    Suppressed,
}

/// Pieces a player could move with the current roll.
pub type Movable = SmallVec<[PieceId; 6]>;

/// A game of Patolli.
#[derive(Debug)]
pub struct Game {
    board: Board,
    dice: Dice,
    /// Indexed by `PlayerColor::index()`.
    players: [Player; 2],
    current: PlayerColor,
    last_roll: Option<u8>,
    extra_turn: bool,
    pot: i32,
    movement: MovementRules,
    scoring: ScoringRules,
    observers: ObserverRegistry<Game>,
    history: Vec<GameEvent>,
}

impl Game {
    /// Assemble a game and seed one piece per player on its start cell.
    pub(crate) fn assemble(board: Board, dice: Dice, players: [Player; 2], first: PlayerColor) -> Self {
        debug_assert_eq!(players[0].color(), PlayerColor::Black);
        debug_assert_eq!(players[1].color(), PlayerColor::White);

        let mut game = Self {
            board,
            dice,
            players,
            current: first,
            last_roll: None,
            extra_turn: false,
            pot: 0,
            movement: MovementRules::new(),
            scoring: ScoringRules::new(),
            observers: ObserverRegistry::new(),
            history: Vec::new(),
        };

        for color in PlayerColor::ALL {
            game.place_initial_piece(color);
        }
        log::debug!("new game, {} rolls first", first);
        game.emit(GameEvent::Init);
        game
    }

    fn place_initial_piece(&mut self, color: PlayerColor) {
        let start = self.board.start_index(color);
        if !self.board.is_free(start) {
            return;
        }
        let Some(id) = self.player(color).first_reserved() else {
            return;
        };
        self.put_on_start(PieceRef::new(color, id));
        self.emit(GameEvent::EnterInit);
    }

    // === Observers ===

    /// Register a callback fired after every successful mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&Game, GameEvent) + 'static) -> SubscriberId {
        self.observers.subscribe(observer)
    }

    /// Remove a callback. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Every event emitted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[GameEvent] {
        &self.history
    }

    fn emit(&mut self, event: GameEvent) {
        self.history.push(event);
        let mut observers = std::mem::take(&mut self.observers);
        observers.notify(self, event);
        self.observers = observers;
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, color: PlayerColor) -> &Player {
        &self.players[color.index()]
    }

    fn player_mut(&mut self, color: PlayerColor) -> &mut Player {
        &mut self.players[color.index()]
    }

    #[must_use]
    pub fn black(&self) -> &Player {
        self.player(PlayerColor::Black)
    }

    #[must_use]
    pub fn white(&self) -> &Player {
        self.player(PlayerColor::White)
    }

    /// Color whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerColor {
        self.current
    }

    #[must_use]
    pub fn opponent(&self) -> PlayerColor {
        self.current.opposite()
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    #[must_use]
    pub fn opponent_player(&self) -> &Player {
        self.player(self.opponent())
    }

    /// Pending roll, `None` when awaiting a roll.
    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    /// Whether the current player has earned another turn.
    #[must_use]
    pub fn extra_turn(&self) -> bool {
        self.extra_turn
    }

    /// Coins paid through triangle penalties so far.
    #[must_use]
    pub fn pot(&self) -> i32 {
        self.pot
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.is_game_over() {
            TurnPhase::GameOver
        } else if self.last_roll.is_some() {
            TurnPhase::AwaitingAction
        } else {
            TurnPhase::AwaitingRoll
        }
    }

    /// Resolve a piece reference.
    #[must_use]
    pub fn piece(&self, piece: PieceRef) -> Option<&Piece> {
        self.player(piece.color).piece(piece.id)
    }

    /// The piece standing on a track index.
    #[must_use]
    pub fn piece_at(&self, index: usize) -> Option<&Piece> {
        self.board.occupant(index).and_then(|r| self.piece(r))
    }

    #[must_use]
    pub fn finished_count(&self, color: PlayerColor) -> usize {
        self.player(color).finished_count()
    }

    /// Pieces of `color` still waiting to enter.
    #[must_use]
    pub fn reserved_pieces(&self, color: PlayerColor) -> Vec<PieceId> {
        self.player(color).reserved().map(Piece::id).collect()
    }

    /// Where a piece on `from` would go with the pending roll.
    #[must_use]
    pub fn destination_for(&self, from: usize) -> Option<Destination> {
        let roll = self.last_roll.filter(|&r| r > 0)?;
        Some(self.movement.destination(&self.board, self.current, from, roll as usize))
    }

    // === Rules ===

    /// Toss the coins.
    ///
    /// A toss of 0 leaves nothing to do, so the turn ends immediately.
    pub fn roll(&mut self) -> Result<u8, RuleViolation> {
        if self.is_game_over() {
            return Err(self.reject(RuleViolation::GameOver));
        }
        if self.last_roll.is_some() {
            return Err(self.reject(RuleViolation::RollPending));
        }

        let value = self.dice.toss();
        self.last_roll = Some(value);
        self.extra_turn = false;
        log::debug!("{} rolled {}", self.current, value);
        self.emit(GameEvent::Roll);

        if value == 0 {
            self.next_turn_if_needed();
        }
        Ok(value)
    }

    /// Whether the current player may bring a new piece onto the track.
    #[must_use]
    pub fn can_enter_new_piece(&self) -> bool {
        self.last_roll == Some(1)
            && self.current_player().has_reserved()
            && self.board.can_place_at_start(self.current_player())
    }

    /// Bring the first waiting piece onto the start cell.
    pub fn enter_new_piece(&mut self) -> Result<PieceId, RuleViolation> {
        self.ensure_rolled()?;
        let color = self.current;
        let id = match self.current_player().first_reserved() {
            Some(id) if self.can_enter_new_piece() => id,
            _ => return Err(self.reject(RuleViolation::EntryNotAllowed { color })),
        };

        let start = self.put_on_start(PieceRef::new(color, id));
        log::debug!("{} entered {} at {}", color, id, start);
        self.apply_landing_rules(start);
        self.emit(GameEvent::Enter);
        self.check_consistency();
        Ok(id)
    }

    /// Current player's on-track pieces that have a legal move for the
    /// pending roll.
    #[must_use]
    pub fn movable_pieces(&self) -> Movable {
        let Some(roll) = self.last_roll.filter(|&r| r > 0) else {
            return Movable::new();
        };

        self.current_player()
            .on_track()
            .filter_map(|p| {
                let from = p.track_index()?;
                self.movement
                    .destination(&self.board, self.current, from, roll as usize)
                    .is_legal()
                    .then_some(p.id())
            })
            .collect()
    }

    /// Move one of the current player's pieces by the pending roll.
    ///
    /// Returns the resolved destination (`Advance` or `Finish`).
    pub fn move_piece(&mut self, id: PieceId) -> Result<Destination, RuleViolation> {
        self.move_piece_ref(PieceRef::new(self.current, id))
    }

    /// Like [`move_piece`](Self::move_piece), but names the owner
    /// explicitly so moving an opponent's piece is reported as such.
    pub fn move_piece_ref(&mut self, piece: PieceRef) -> Result<Destination, RuleViolation> {
        let roll = self.ensure_rolled()?;
        let from = self.validate_mover(piece)?;

        let destination = self
            .movement
            .destination(&self.board, self.current, from, roll as usize);
        match destination {
            Destination::Overshoot { distance } => {
                return Err(self.reject(RuleViolation::Overshoot {
                    piece,
                    needed: distance,
                    roll,
                }))
            }
            Destination::Occupied(index) => {
                return Err(self.reject(RuleViolation::DestinationOccupied { index }))
            }
            Destination::Finish => {
                self.board.free(from);
                self.piece_mut(piece).finish();
                self.transfer(self.opponent(), self.current, 1);
                log::debug!("{} finished from {}", piece, from);
                self.emit(GameEvent::Finish);
            }
            Destination::Advance(to) => {
                self.board.free(from);
                self.piece_mut(piece).move_to(to);
                self.board.occupy(to, piece);
                log::debug!("{} moved {} -> {}", piece, from, to);
                self.apply_landing_rules(to);
                self.emit(GameEvent::Move);
            }
        }

        self.check_consistency();
        if let Some(outcome) = self.outcome() {
            log::info!("game over: {:?}", outcome);
        }
        Ok(destination)
    }

    /// Whether the current player has nothing legal to do.
    #[must_use]
    pub fn must_pass(&self) -> bool {
        match self.last_roll {
            None | Some(0) => true,
            Some(_) => self.movable_pieces().is_empty() && !self.can_enter_new_piece(),
        }
    }

    /// Give up the pending roll because no move is possible.
    pub fn pass(&mut self) -> Result<TurnChange, RuleViolation> {
        self.ensure_rolled()?;
        if !self.must_pass() {
            return Err(self.reject(RuleViolation::LegalMoveAvailable));
        }
        log::debug!("{} passed", self.current);
        Ok(self.next_turn_if_needed())
    }

    /// End the current turn.
    ///
    /// Control passes to the opponent unless an extra turn was earned. A
    /// bankrupt current player freezes the game (`NO_COINS`); any other
    /// decided game just drops the pending roll.
    pub fn next_turn_if_needed(&mut self) -> TurnChange {
        if !self.current_player().has_coins() {
            log::debug!("{} has no coins; turn change suppressed", self.current);
            self.emit(GameEvent::NoCoins);
            return TurnChange::Suppressed;
        }
        if self.is_game_over() {
            self.last_roll = None;
            self.extra_turn = false;
            return TurnChange::Suppressed;
        }

        let change = if self.extra_turn {
            TurnChange::ExtraTurn
        } else {
            self.current = self.opponent();
            TurnChange::Switched
        };
        self.last_roll = None;
        self.extra_turn = false;
        log::debug!("turn: {} to roll ({:?})", self.current, change);
        self.emit(GameEvent::Turn);
        change
    }

    /// True once either player is out of coins or has finished every piece.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players
            .iter()
            .any(|p| !p.has_coins() || p.all_finished())
    }

    /// Structured result, `None` while the game continues.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        let (black, white) = (self.black(), self.white());
        let winner = |color, cause| Some(GameOutcome::Winner { color, cause });

        match (black.has_coins(), white.has_coins()) {
            (false, false) => return Some(GameOutcome::Draw),
            (false, true) => return winner(PlayerColor::White, WinCause::OpponentOutOfCoins),
            (true, false) => return winner(PlayerColor::Black, WinCause::OpponentOutOfCoins),
            (true, true) => {}
        }
        if black.all_finished() {
            return winner(PlayerColor::Black, WinCause::AllPiecesFinished);
        }
        if white.all_finished() {
            return winner(PlayerColor::White, WinCause::AllPiecesFinished);
        }
        None
    }

    /// Human-readable result, `None` while the game continues.
    #[must_use]
    pub fn game_over_message(&self) -> Option<String> {
        self.outcome().map(|outcome| match outcome {
            GameOutcome::Draw => "Both players ran out of coins. Draw!".to_string(),
            GameOutcome::Winner { color, cause } => format!(
                "{} ({}) wins - {}",
                self.player(color).name(),
                color,
                cause.describe()
            ),
        })
    }

    // === Internals ===

    /// Common guard for post-roll actions; yields the pending roll.
    fn ensure_rolled(&self) -> Result<u8, RuleViolation> {
        if self.is_game_over() {
            return Err(self.reject(RuleViolation::GameOver));
        }
        self.last_roll
            .ok_or_else(|| self.reject(RuleViolation::NoRoll))
    }

    /// Check that `piece` may be moved by the current player; yields its
    /// track index.
    fn validate_mover(&self, piece: PieceRef) -> Result<usize, RuleViolation> {
        if piece.color != self.current {
            return Err(self.reject(RuleViolation::NotYourPiece {
                piece,
                owner: piece.color,
                current: self.current,
            }));
        }
        let Some(p) = self.piece(piece) else {
            return Err(self.reject(RuleViolation::UnknownPiece { piece }));
        };
        match p.position() {
            PiecePosition::OnTrack(index) => Ok(index),
            PiecePosition::Finished => Err(self.reject(RuleViolation::PieceFinished { piece })),
            PiecePosition::OffBoard => Err(self.reject(RuleViolation::PieceNotOnTrack { piece })),
        }
    }

    fn reject(&self, violation: RuleViolation) -> RuleViolation {
        log::trace!("{} rejected: {}", self.current, violation);
        violation
    }

    fn piece_mut(&mut self, piece: PieceRef) -> &mut Piece {
        self.players[piece.color.index()]
            .piece_mut(piece.id)
            .unwrap_or_else(|| panic!("{} vanished mid-move", piece))
    }

    /// Place an off-board piece on its color's start cell.
    fn put_on_start(&mut self, piece: PieceRef) -> usize {
        let start = self.board.start_index(piece.color);
        self.piece_mut(piece).place_at_start(start);
        self.board.occupy(start, piece);
        start
    }

    /// Penalty and bonus tags go out before the action's own tag.
    fn apply_landing_rules(&mut self, index: usize) {
        let effect = self.scoring.landing_effect(&self.board, index);
        if effect.coin_delta != 0 {
            let amount = -effect.coin_delta;
            self.transfer(self.current, self.opponent(), amount);
            self.pot += amount;
            log::debug!("{} paid {} on triangle {}", self.current, amount, index);
            self.emit(GameEvent::Penalty);
        }
        if effect.extra_turn {
            self.extra_turn = true;
            log::debug!("{} earned an extra turn on {}", self.current, index);
            self.emit(GameEvent::Bonus);
        }
    }

    fn transfer(&mut self, from: PlayerColor, to: PlayerColor, amount: i32) {
        self.player_mut(from).add_coins(-amount);
        self.player_mut(to).add_coins(amount);
    }

    /// Verify that piece positions and cell occupancy mirror each other.
    ///
    /// # Panics
    ///
    /// Panics on any mismatch.
    pub fn assert_consistent(&self) {
        for player in &self.players {
            for piece in player.pieces() {
                if let Some(index) = piece.track_index() {
                    assert_eq!(
                        self.board.occupant(index),
                        Some(piece.piece_ref()),
                        "{} thinks it is on {} but the cell disagrees",
                        piece.piece_ref(),
                        index
                    );
                }
            }
        }
        for cell in self.board.cells() {
            if let Some(r) = cell.occupant() {
                let on_cell = self.piece(r).and_then(Piece::track_index);
                assert_eq!(
                    on_cell,
                    Some(cell.index()),
                    "cell {} holds {} which is elsewhere",
                    cell.index(),
                    r
                );
            }
        }
    }

    fn check_consistency(&self) {
        #[cfg(debug_assertions)]
        self.assert_consistent();
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn player_mut_for_edit(&mut self, color: PlayerColor) -> &mut Player {
        self.player_mut(color)
    }

    pub(crate) fn set_current(&mut self, color: PlayerColor) {
        self.current = color;
    }

    pub(crate) fn set_last_roll(&mut self, roll: Option<u8>) {
        self.last_roll = roll;
    }
}
