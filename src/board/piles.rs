//! Draw pile, deposit pile, and the pending draw penalty.
//!
//! Both piles are stacks stored bottom-to-top: the last element is the top.
//!
//! ## Reshuffling
//!
//! When the draw pile runs dry in the middle of a draw, the deposit pile is
//! recycled: its top card stays where it is, every other non-virtual card is
//! shuffled and becomes the new draw pile. Virtual wild-suit markers are
//! discarded along the way. If the deposit pile holds one card or less there
//! is nothing to recycle and the draw stops short.

use tracing::{debug, info};

use crate::core::{check_hand_size, full_deck, Card, GameError, GameRng, PlayerId, Rank};
use crate::players::{Hand, PlayerRing};

/// Result of a single `draw`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Cards the player had to take: `max(1, pending_draw)`.
    pub requested: usize,
    /// Cards actually added to the hand.
    pub drawn: usize,
    /// Cards moved from the deposit pile into the draw pile by a reshuffle.
    pub recycled: usize,
}

impl DrawOutcome {
    /// Whether a reshuffle moved any card during this draw.
    #[must_use]
    pub fn reshuffled(&self) -> bool {
        self.recycled > 0
    }

    /// Whether the supply ran out before the full amount was drawn.
    #[must_use]
    pub fn exhausted(&self) -> bool {
        self.drawn < self.requested
    }
}

/// Legality of `candidate` against the current top of the deposit pile.
///
/// - With a penalty pending, only a Two may be played (to stack it).
/// - Otherwise a Jack is always playable.
/// - Otherwise the card must share suit or rank with the top card.
///
/// With no top card (the opening play) anything goes.
#[must_use]
pub fn is_playable(candidate: Card, top: Option<Card>, pending_draw: u32) -> bool {
    if pending_draw > 0 {
        return candidate.rank() == Rank::Two;
    }
    if candidate.rank() == Rank::Jack {
        return true;
    }
    top.map_or(true, |top| candidate.matches(top))
}

/// The shared table: draw pile, deposit pile, and penalty counter.
#[derive(Clone, Debug)]
pub struct GameBoard {
    draw_pile: Vec<Card>,
    deposit_pile: Vec<Card>,
    pending_draw: u32,
    rng: GameRng,
}

impl GameBoard {
    /// A board holding a freshly shuffled full deck.
    #[must_use]
    pub fn new(mut rng: GameRng) -> Self {
        let mut deck = full_deck();
        rng.shuffle(&mut deck);

        Self {
            draw_pile: deck,
            deposit_pile: Vec::new(),
            pending_draw: 0,
            rng,
        }
    }

    /// A board with explicit piles, each given bottom-to-top.
    #[must_use]
    pub fn from_piles(draw_pile: Vec<Card>, deposit_pile: Vec<Card>, rng: GameRng) -> Self {
        Self {
            draw_pile,
            deposit_pile,
            pending_draw: 0,
            rng,
        }
    }

    /// Deal `count` rounds, one card per seat per round, starting at `start`.
    ///
    /// Returns the number of cards dealt. Dealing simply stops short if the
    /// draw pile runs out.
    pub fn distribute_initial(
        &mut self,
        ring: &mut PlayerRing,
        start: PlayerId,
        count: usize,
    ) -> Result<usize, GameError> {
        check_hand_size(count)?;

        let order = ring.rotation_from(start, crate::players::Direction::Clockwise);
        let mut dealt = 0;

        for _ in 0..count {
            for &seat in &order {
                if let Some(card) = self.draw_pile.pop() {
                    ring.player_mut(seat).take_card(card);
                    dealt += 1;
                }
            }
        }

        debug!(dealt, rounds = count, start = %start, "initial hands dealt");
        Ok(dealt)
    }

    /// Draw `max(1, pending_draw)` cards into `hand`, recycling the deposit
    /// pile if needed. The penalty is cleared afterwards, even on a short draw.
    pub fn draw(&mut self, hand: &mut Hand) -> DrawOutcome {
        let requested = self.pending_draw.max(1) as usize;
        let mut outcome = DrawOutcome {
            requested,
            ..DrawOutcome::default()
        };

        while outcome.drawn < requested {
            if self.draw_pile.is_empty() {
                let recycled = self.recycle_deposit();
                if recycled == 0 {
                    break;
                }
                outcome.recycled += recycled;
            }

            match self.draw_pile.pop() {
                Some(card) => {
                    hand.push(card);
                    outcome.drawn += 1;
                }
                None => break,
            }
        }

        if outcome.exhausted() {
            debug!(
                requested,
                drawn = outcome.drawn,
                "supply exhausted before draw completed"
            );
        }

        self.pending_draw = 0;
        outcome
    }

    /// Turn everything but the top of the deposit pile into a shuffled draw
    /// pile. Returns how many cards were recycled.
    pub fn recycle_deposit(&mut self) -> usize {
        if self.deposit_pile.len() <= 1 {
            return 0;
        }
        let Some(top) = self.deposit_pile.pop() else {
            return 0;
        };

        let mut recycled: Vec<Card> = self
            .deposit_pile
            .drain(..)
            .filter(|card| !card.is_virtual())
            .collect();
        self.rng.shuffle(&mut recycled);
        self.deposit_pile.push(top);

        let count = recycled.len();
        // Anything still in the draw pile stays on top.
        recycled.append(&mut self.draw_pile);
        self.draw_pile = recycled;

        if count > 0 {
            info!(recycled = count, top = %top, "deposit pile recycled into draw pile");
        }
        count
    }

    /// Whether `candidate` may be played right now.
    #[must_use]
    pub fn accepts(&self, candidate: Card) -> bool {
        is_playable(candidate, self.top(), self.pending_draw)
    }

    /// Put a card on top of the deposit pile.
    pub fn push_deposit(&mut self, card: Card) {
        self.deposit_pile.push(card);
    }

    /// Add to the pending draw penalty. Returns the new total.
    pub fn add_penalty(&mut self, amount: u32) -> u32 {
        self.pending_draw += amount;
        self.pending_draw
    }

    /// Top of the deposit pile (possibly a virtual marker).
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.deposit_pile.last().copied()
    }

    #[must_use]
    pub fn pending_draw(&self) -> u32 {
        self.pending_draw
    }

    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    #[must_use]
    pub fn deposit_pile(&self) -> &[Card] {
        &self.deposit_pile
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn deposit_pile_len(&self) -> usize {
        self.deposit_pile.len()
    }

    /// Deposit pile size, not counting virtual markers.
    #[must_use]
    pub fn physical_deposit_len(&self) -> usize {
        self.deposit_pile.iter().filter(|c| !c.is_virtual()).count()
    }

    /// Physical cards on the table (both piles, markers excluded).
    #[must_use]
    pub fn physical_card_count(&self) -> usize {
        self.draw_pile.len() + self.physical_deposit_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_new_board_holds_full_deck() {
        let board = GameBoard::new(GameRng::new(1));
        assert_eq!(board.draw_pile_len(), 52);
        assert_eq!(board.deposit_pile_len(), 0);
        assert_eq!(board.top(), None);
        assert_eq!(board.pending_draw(), 0);
    }

    #[test]
    fn test_is_playable_rules() {
        let top = Some(card(Rank::Seven, Suit::Hearts));

        assert!(is_playable(card(Rank::Three, Suit::Hearts), top, 0));
        assert!(is_playable(card(Rank::Seven, Suit::Clubs), top, 0));
        assert!(!is_playable(card(Rank::Three, Suit::Clubs), top, 0));
        assert!(is_playable(card(Rank::Jack, Suit::Clubs), top, 0));

        // Penalty pending: only a Two
        assert!(is_playable(card(Rank::Two, Suit::Clubs), top, 2));
        assert!(!is_playable(card(Rank::Jack, Suit::Hearts), top, 2));
        assert!(!is_playable(card(Rank::Seven, Suit::Hearts), top, 2));

        // Opening play
        assert!(is_playable(card(Rank::King, Suit::Spades), None, 0));
    }

    #[test]
    fn test_draw_single_card() {
        let mut board = GameBoard::from_piles(
            vec![card(Rank::Four, Suit::Clubs), card(Rank::Five, Suit::Clubs)],
            vec![card(Rank::Six, Suit::Clubs)],
            GameRng::new(1),
        );
        let mut hand = Hand::new();

        let outcome = board.draw(&mut hand);

        assert_eq!(outcome.drawn, 1);
        assert!(!outcome.reshuffled());
        assert_eq!(hand.as_slice(), &[card(Rank::Five, Suit::Clubs)]);
        assert_eq!(board.draw_pile_len(), 1);
    }

    #[test]
    fn test_draw_honours_and_clears_penalty() {
        let draw: Vec<Card> = (0..6).map(|_| card(Rank::Nine, Suit::Spades)).collect();
        let mut board = GameBoard::from_piles(draw, vec![card(Rank::Two, Suit::Hearts)], GameRng::new(1));
        board.add_penalty(2);
        assert_eq!(board.add_penalty(2), 4);

        let mut hand = Hand::new();
        let outcome = board.draw(&mut hand);

        assert_eq!(outcome.requested, 4);
        assert_eq!(outcome.drawn, 4);
        assert_eq!(board.pending_draw(), 0);
    }

    #[test]
    fn test_reshuffle_keeps_top_and_drops_markers() {
        let deposit = vec![
            card(Rank::Three, Suit::Clubs),
            card(Rank::Jack, Suit::Clubs),
            Card::marker(Rank::Jack, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
            card(Rank::Four, Suit::Spades),
        ];
        let mut board = GameBoard::from_piles(Vec::new(), deposit, GameRng::new(9));
        let mut hand = Hand::new();

        let outcome = board.draw(&mut hand);

        assert_eq!(outcome.drawn, 1);
        assert_eq!(outcome.recycled, 3);
        assert_eq!(board.top(), Some(card(Rank::Four, Suit::Spades)));
        assert_eq!(board.deposit_pile_len(), 1);
        assert_eq!(board.draw_pile_len(), 2);
        assert!(hand.iter().all(|c| !c.is_virtual()));
        assert!(board.draw_pile().iter().all(|c| !c.is_virtual()));
    }

    #[test]
    fn test_exhausted_supply_draws_nothing() {
        let mut board = GameBoard::from_piles(
            Vec::new(),
            vec![card(Rank::Eight, Suit::Diamonds)],
            GameRng::new(3),
        );
        board.add_penalty(2);
        let mut hand = Hand::new();

        let outcome = board.draw(&mut hand);

        assert_eq!(outcome.drawn, 0);
        assert!(outcome.exhausted());
        assert_eq!(board.pending_draw(), 0);
        assert!(hand.is_empty());
    }

    #[test]
    fn test_partial_draw_after_reshuffle() {
        let mut board = GameBoard::from_piles(
            vec![card(Rank::Five, Suit::Hearts)],
            vec![card(Rank::Six, Suit::Hearts), card(Rank::Two, Suit::Hearts)],
            GameRng::new(3),
        );
        board.add_penalty(4);
        let mut hand = Hand::new();

        let outcome = board.draw(&mut hand);

        // One from the draw pile, one recycled, then nothing left.
        assert_eq!(outcome.requested, 4);
        assert_eq!(outcome.drawn, 2);
        assert_eq!(outcome.recycled, 1);
        assert_eq!(board.top(), Some(card(Rank::Two, Suit::Hearts)));
    }
}
