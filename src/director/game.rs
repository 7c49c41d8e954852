//! The game director: owns the table and runs the turn loop.
//!
//! ## Turn Flow
//!
//! ```text
//! pause -> skip pending? -> announce skip, advance
//!                        -> decide (AI strategy | human bridge)
//!                             -> draw path: draw, announce, advance
//!                             -> play path: deposit, announce, resolve effect,
//!                                           low-hand / win checks, advance
//! ```
//!
//! The director is the only writer of hands, piles, the turn cursor and
//! player modes. The human bridge and the pacing clock are the only state
//! shared with other tasks.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::board::GameBoard;
use crate::core::{
    check_hand_size, Card, GameConfig, GameError, GameRng, MinimizerSeat, PlayerId, Rank, Suit,
};
use crate::events::{EventBus, GameEvent, GameObserver, ObserverId};
use crate::input::{Decision, HumanInput};
use crate::players::{Direction, Player, PlayerRing, Seat};

use super::pacing::PacingClock;
use super::score::{rank_players, score_table, Standing};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Seated, no cards dealt.
    Created,
    /// Hands dealt or staged, loop not started.
    Dealt,
    /// At least one turn has been played.
    Running,
    /// A hand was emptied.
    Won(PlayerId),
    /// The run was cancelled.
    Aborted,
}

impl GamePhase {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GamePhase::Created => "created",
            GamePhase::Dealt => "dealt",
            GamePhase::Running => "running",
            GamePhase::Won(_) => "won",
            GamePhase::Aborted => "aborted",
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::Won(_) | GamePhase::Aborted)
    }
}

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Won(Seat),
    Aborted,
}

/// Result of `Game::run`. Standings are empty when the run was aborted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub standings: Vec<Standing>,
}

impl GameOutcome {
    /// Player who emptied their hand.
    #[must_use]
    pub fn winner(&self) -> Option<&Seat> {
        match &self.status {
            GameStatus::Won(seat) => Some(seat),
            GameStatus::Aborted => None,
        }
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.status == GameStatus::Aborted
    }
}

/// What a single `play_turn` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player lost the turn to an Ace.
    Skipped(PlayerId),
    /// The player drew `count` cards (0 if the supply was exhausted).
    Drew { player: PlayerId, count: usize },
    /// The player played `card`.
    Played { player: PlayerId, card: Card },
    /// The player played `card` and emptied their hand.
    Won { player: PlayerId, card: Card },
}

/// Resolved decision for the current player.
enum Move {
    Play { card: Card, suit: Option<Suit> },
    Draw,
}

/// A game of Fishing.
pub struct Game {
    config: GameConfig,
    ring: PlayerRing,
    board: GameBoard,
    current: PlayerId,
    direction: Direction,
    skip_next: bool,
    phase: GamePhase,
    deck_size: usize,
    bus: EventBus,
    human_input: Option<Arc<HumanInput>>,
    pacing: Arc<PacingClock>,
}

impl Game {
    /// Seat the table described by `config` and pick who starts.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut seating = rng.for_context("seating");
        let count = config.player_count;

        let minimizer = match config.minimizer {
            MinimizerSeat::None => None,
            MinimizerSeat::Random => Some(PlayerId::new(seating.below(count - 1) as u8)),
            MinimizerSeat::Seat(seat) => Some(seat),
        };

        let ring = PlayerRing::new(count, |id| {
            Player::new(id, config.name_of(id))
                .with_human(config.human == Some(id))
                .with_minimizer(minimizer == Some(id))
        })?;

        let mut current = PlayerId::new(0);
        for _ in 0..seating.below(10) {
            current = ring.neighbor(current, Direction::Clockwise);
        }

        let board = GameBoard::new(rng.for_context("shuffle"));
        let pacing = Arc::new(PacingClock::new(config.pacing_delay_ms));

        debug!(seed = rng.seed(), players = count, first = %current, ?minimizer, "game seated");

        Ok(Self {
            config,
            ring,
            board,
            current,
            direction: Direction::Clockwise,
            skip_next: false,
            phase: GamePhase::Created,
            deck_size: crate::core::DECK_SIZE,
            bus: EventBus::new(),
            human_input: None,
            pacing,
        })
    }

    /// Connect the bridge that drives the human seat.
    pub fn attach_human(&mut self, bridge: Arc<HumanInput>) {
        self.human_input = Some(bridge);
    }

    /// Register an observer. Observers are called in registration order.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        self.bus.subscribe(observer)
    }

    /// Detach an observer. Returns false if it was not attached.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Handle on the pacing clock, for changing the delay from elsewhere.
    #[must_use]
    pub fn pacing(&self) -> Arc<PacingClock> {
        Arc::clone(&self.pacing)
    }

    pub fn set_pacing_delay(&self, delay_ms: u64) {
        self.pacing.set_delay_ms(delay_ms);
    }

    /// Deal `hand_size` cards to everyone, starting with the first player.
    pub fn begin(&mut self, hand_size: usize) -> Result<(), GameError> {
        check_hand_size(hand_size)?;
        self.expect_phase("begin", GamePhase::Created)?;

        self.board
            .distribute_initial(&mut self.ring, self.current, hand_size)?;
        self.phase = GamePhase::Dealt;

        info!(hand_size, first = %self.current, "cards dealt");
        self.emit(GameEvent::info(format!(
            "Dealing {hand_size} cards to each player"
        )));
        Ok(())
    }

    /// Install explicit hands and piles instead of dealing.
    ///
    /// `hands` are given in seat order; `first` takes the first turn.
    pub fn stage(
        &mut self,
        board: GameBoard,
        hands: Vec<Vec<Card>>,
        first: PlayerId,
    ) -> Result<(), GameError> {
        self.expect_phase("stage", GamePhase::Created)?;
        if hands.len() != self.ring.len() {
            return Err(GameError::StagedHands {
                expected: self.ring.len(),
                actual: hands.len(),
            });
        }
        if first.index() >= self.ring.len() {
            return Err(GameError::SeatOutOfRange {
                seat: first,
                player_count: self.ring.len(),
            });
        }

        for (id, hand) in PlayerId::all(self.ring.len()).zip(hands) {
            self.ring.player_mut(id).set_hand(hand);
        }
        self.board = board;
        self.current = first;
        self.deck_size = self.cards_accounted();
        self.ring.reevaluate_modes(self.direction);
        self.phase = GamePhase::Dealt;

        debug!(first = %first, deck_size = self.deck_size, "table staged");
        Ok(())
    }

    /// Play turns until someone wins or `cancel` fires.
    ///
    /// Cancellation, from the token or a bridge reset during a human wait,
    /// ends the run with an `Aborted` outcome and no further events.
    pub async fn run(&mut self, cancel: CancellationToken) -> Result<GameOutcome, GameError> {
        if !matches!(self.phase, GamePhase::Dealt | GamePhase::Running) {
            return Err(self.invalid_phase("run"));
        }

        loop {
            let paused = self.pacing.pause(&cancel).await;
            let step = match paused {
                Ok(()) => self.play_turn(&cancel).await,
                Err(err) => Err(err),
            };

            match step {
                Ok(TurnOutcome::Won { player, .. }) => {
                    let standings = self.report_standings(player);
                    return Ok(GameOutcome {
                        status: GameStatus::Won(self.ring.player(player).seat()),
                        standings,
                    });
                }
                Ok(_) => {}
                Err(err) if err.is_cancelled() => {
                    self.abort();
                    return Ok(GameOutcome {
                        status: GameStatus::Aborted,
                        standings: Vec::new(),
                    });
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Play exactly one turn, without the pacing delay.
    pub async fn play_turn(&mut self, cancel: &CancellationToken) -> Result<TurnOutcome, GameError> {
        if !matches!(self.phase, GamePhase::Dealt | GamePhase::Running) {
            return Err(self.invalid_phase("play_turn"));
        }
        if cancel.is_cancelled() {
            self.abort();
            return Err(GameError::Cancelled);
        }
        self.phase = GamePhase::Running;

        let id = self.current;
        if self.skip_next {
            self.skip_next = false;
            self.announce_skip(id);
            self.advance();
            return Ok(TurnOutcome::Skipped(id));
        }

        let choice = match self.decide(id, cancel).await {
            Ok(choice) => choice,
            Err(err) => {
                if err.is_cancelled() {
                    self.abort();
                }
                return Err(err);
            }
        };

        match choice {
            Move::Draw => Ok(self.draw_turn(id)),
            Move::Play { card, suit } => self.play_card(id, card, suit),
        }
    }

    fn human_bridge(&self, id: PlayerId) -> Option<Arc<HumanInput>> {
        if self.ring.player(id).is_human() {
            self.human_input.clone()
        } else {
            None
        }
    }

    async fn decide(&mut self, id: PlayerId, cancel: &CancellationToken) -> Result<Move, GameError> {
        let Some(bridge) = self.human_bridge(id) else {
            let player = self.ring.player_mut(id);
            return Ok(match player.play(&self.board) {
                Some(card) => Move::Play { card, suit: None },
                None => Move::Draw,
            });
        };

        let pending = bridge.arm();
        let started = {
            let player = self.ring.player(id);
            GameEvent::HumanTurnStarted {
                player: player.seat(),
                top: self.board.top(),
                pending_draw: self.board.pending_draw(),
                hand: player.hand().to_vec(),
            }
        };
        self.emit(started);

        match pending.wait(cancel).await? {
            Decision::Play { card, suit } => {
                if self.ring.player(id).holds(card) && self.board.accepts(card) {
                    Ok(Move::Play { card, suit })
                } else {
                    debug!(player = %id, %card, "human play rejected, drawing instead");
                    Ok(Move::Draw)
                }
            }
            Decision::Draw => Ok(Move::Draw),
        }
    }

    fn draw_turn(&mut self, id: PlayerId) -> TurnOutcome {
        let player = self.ring.player_mut(id);
        let before = player.hand_len();
        let outcome = self.board.draw(player.hand_mut());
        let after = player.hand_len();
        let seat = player.seat();

        if outcome.reshuffled() {
            self.emit(GameEvent::Reshuffled {
                message: format!(
                    "Draw pile empty: {} cards reshuffled from the deposit pile",
                    outcome.recycled
                ),
            });
        }
        debug!(player = %id, drawn = outcome.drawn, requested = outcome.requested, "draw");
        self.emit(GameEvent::CardsDrawn {
            player: seat,
            count: outcome.drawn,
            top: self.board.top(),
            direction: self.direction,
        });

        if before == 1 && after > 1 {
            self.ring.reevaluate_modes(self.direction);
        }

        self.advance();
        TurnOutcome::Drew {
            player: id,
            count: outcome.drawn,
        }
    }

    fn play_card(
        &mut self,
        id: PlayerId,
        card: Card,
        suit: Option<Suit>,
    ) -> Result<TurnOutcome, GameError> {
        if !self.ring.player_mut(id).remove_card(card) {
            return Err(GameError::CardNotInHand { player: id, card });
        }
        self.board.push_deposit(card);

        let seat = self.ring.player(id).seat();
        self.emit(GameEvent::TurnPlayed {
            player: seat.clone(),
            card,
            top: self.board.top(),
            direction: self.direction,
        });

        self.resolve_effect(id, card, suit);

        let remaining = self.ring.player(id).hand_len();
        if remaining == 1 {
            self.emit(GameEvent::PlayerLowHand {
                player: seat.clone(),
            });
            self.ring.reevaluate_modes(self.direction);
        }

        if remaining == 0 {
            self.phase = GamePhase::Won(id);
            info!(winner = %seat, "game won");
            self.emit(GameEvent::GameWon { player: seat });
            return Ok(TurnOutcome::Won { player: id, card });
        }

        self.advance();
        Ok(TurnOutcome::Played { player: id, card })
    }

    fn resolve_effect(&mut self, id: PlayerId, card: Card, suit: Option<Suit>) {
        match card.rank() {
            Rank::Ace => self.skip_next = true,
            Rank::Two => {
                let total = self.board.add_penalty(2);
                self.emit(GameEvent::info(format!("+2 played (pending draw = {total})")));
            }
            Rank::Ten => {
                self.direction = self.direction.reversed();
                if self.ring.any_single_card() {
                    self.ring.reevaluate_modes(self.direction);
                }
                self.emit(GameEvent::info(format!(
                    "Direction reversed: now {}",
                    self.direction
                )));
            }
            Rank::Jack => {
                let suit = suit.unwrap_or_else(|| self.ring.player(id).choose_suit());
                self.board.push_deposit(Card::marker(Rank::Jack, suit));
                self.emit(GameEvent::info(format!("Suit chosen: {suit}")));
            }
            _ => {}
        }
    }

    fn announce_skip(&mut self, id: PlayerId) {
        let player = self.ring.player(id);
        let seat = player.seat();
        let is_human = player.is_human();
        let top = self
            .board
            .top()
            .map_or_else(|| "empty".to_string(), |card| card.to_string());

        debug!(player = %id, "turn skipped");
        self.emit(GameEvent::info(format!(
            "{seat}'s turn is skipped by an Ace - top: {top} - direction: {}",
            self.direction
        )));

        if is_human {
            if let Some(bridge) = &self.human_input {
                bridge.reset();
            }
            self.emit(GameEvent::HumanTurnSkipped { player: seat });
        }
    }

    fn report_standings(&self, winner: PlayerId) -> Vec<Standing> {
        let start = self.ring.neighbor(winner, self.direction);
        let standings = rank_players(&self.ring, start, self.direction);
        for line in score_table(&standings) {
            self.emit(GameEvent::info(line));
        }
        standings
    }

    fn advance(&mut self) {
        self.current = self.ring.neighbor(self.current, self.direction);
    }

    fn abort(&mut self) {
        if let Some(bridge) = &self.human_input {
            bridge.reset();
        }
        if !self.phase.is_finished() {
            info!(current = %self.current, "game aborted");
            self.phase = GamePhase::Aborted;
        }
    }

    fn emit(&self, event: GameEvent) {
        self.bus.emit(&event);
    }

    fn expect_phase(&self, operation: &'static str, phase: GamePhase) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(self.invalid_phase(operation))
        }
    }

    fn invalid_phase(&self, operation: &'static str) -> GameError {
        GameError::InvalidPhase {
            operation,
            phase: self.phase.name(),
        }
    }

    // Accessors

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the next turn will be skipped by a pending Ace.
    #[must_use]
    pub fn skip_pending(&self) -> bool {
        self.skip_next
    }

    #[must_use]
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerRing {
        &self.ring
    }

    #[must_use]
    pub fn hand(&self, id: PlayerId) -> &[Card] {
        self.ring.player(id).hand()
    }

    /// Physical cards in play: 52 after `begin`, whatever was staged otherwise.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// Physical cards currently in hands and piles. Always equals `deck_size`.
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        self.ring.cards_in_hands() + self.board.physical_card_count()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("direction", &self.direction)
            .field("skip_next", &self.skip_next)
            .field("board", &self.board)
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}
