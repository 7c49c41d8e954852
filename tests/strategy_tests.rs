//! Strategy tests.
//!
//! These tests verify card selection for AI players:
//! - The keep-last scan of the built-in strategies
//! - Chain order per mode
//! - Custom strategies plugged into a chain
//! - The minimizer's hand ordering

use std::sync::Arc;

use fishing_game::{
    AttackStrategy, BaseStrategy, Card, GameBoard, GameRng, Player, PlayerId, PlayerMode, Rank,
    Strategy, StrategyChain, Suit,
};

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn board_with_top(top: Card) -> GameBoard {
    GameBoard::from_piles(Vec::new(), vec![top], GameRng::new(1))
}

/// Plays whatever has the highest score, ignoring legality.
#[derive(Debug)]
struct Greedy;

impl Strategy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn validate(&self, _card: Card, _top: Card, _penalty_active: bool) -> bool {
        true
    }

    fn choose(&self, _board: &GameBoard, hand: &[Card]) -> Option<Card> {
        hand.iter().copied().max_by_key(|card| card.score())
    }
}

// ============================================================================
// Built-in strategies
// ============================================================================

/// The last matching card in hand order wins.
#[test]
fn test_base_keeps_last_match() {
    let board = board_with_top(c(Rank::Five, Suit::Hearts));
    let hand = [
        c(Rank::Four, Suit::Hearts),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Nine, Suit::Spades),
        c(Rank::Eight, Suit::Hearts),
    ];

    assert_eq!(BaseStrategy.choose(&board, &hand), Some(c(Rank::Eight, Suit::Hearts)));
}

/// Base holds back attack cards other than the Jack.
#[test]
fn test_base_holds_attack_cards() {
    let board = board_with_top(c(Rank::Five, Suit::Hearts));
    let hand = [c(Rank::Two, Suit::Hearts), c(Rank::Ten, Suit::Hearts)];

    assert_eq!(BaseStrategy.choose(&board, &hand), None);
    assert_eq!(AttackStrategy.choose(&board, &hand), Some(c(Rank::Ten, Suit::Hearts)));
}

/// Under a penalty both strategies only answer with a Two.
#[test]
fn test_penalty_only_two() {
    let mut board = board_with_top(c(Rank::Two, Suit::Hearts));
    board.add_penalty(2);
    let hand = [
        c(Rank::Two, Suit::Clubs),
        c(Rank::Jack, Suit::Hearts),
        c(Rank::Seven, Suit::Hearts),
    ];

    assert_eq!(BaseStrategy.choose(&board, &hand), Some(c(Rank::Two, Suit::Clubs)));
    assert_eq!(AttackStrategy.choose(&board, &hand), Some(c(Rank::Two, Suit::Clubs)));
}

/// On an empty deposit pile the first card in hand is played.
#[test]
fn test_opening_play_takes_first_card() {
    let board = GameBoard::from_piles(Vec::new(), Vec::new(), GameRng::new(1));
    let hand = [c(Rank::Two, Suit::Clubs), c(Rank::Seven, Suit::Hearts)];

    let chain = StrategyChain::standard();
    assert_eq!(
        chain.choose(PlayerMode::Regular, &board, &hand),
        Some(c(Rank::Two, Suit::Clubs))
    );
}

// ============================================================================
// Chains
// ============================================================================

/// Regular mode prefers plain cards, Attack mode prefers attack cards.
#[test]
fn test_standard_chain_order() {
    let board = board_with_top(c(Rank::Five, Suit::Hearts));
    let hand = [c(Rank::Ace, Suit::Hearts), c(Rank::Six, Suit::Hearts)];
    let chain = StrategyChain::standard();

    assert_eq!(
        chain.choose(PlayerMode::Regular, &board, &hand),
        Some(c(Rank::Six, Suit::Hearts))
    );
    assert_eq!(
        chain.choose(PlayerMode::Attack, &board, &hand),
        Some(c(Rank::Ace, Suit::Hearts))
    );
}

/// Nothing playable in either strategy means draw.
#[test]
fn test_chain_falls_through_to_none() {
    let board = board_with_top(c(Rank::Five, Suit::Hearts));
    let hand = [c(Rank::Nine, Suit::Clubs), c(Rank::Ace, Suit::Spades)];

    assert_eq!(StrategyChain::standard().choose(PlayerMode::Attack, &board, &hand), None);
}

/// A custom strategy can lead the chain.
#[test]
fn test_custom_strategy_in_chain() {
    let greedy: Arc<dyn Strategy> = Arc::new(Greedy);
    let base: Arc<dyn Strategy> = Arc::new(BaseStrategy);
    let chain = StrategyChain::new([Arc::clone(&greedy), base], [greedy]);

    let board = board_with_top(c(Rank::Five, Suit::Hearts));
    let hand = [c(Rank::Six, Suit::Hearts), c(Rank::Ace, Suit::Spades)];

    assert_eq!(chain.for_mode(PlayerMode::Regular).len(), 2);
    assert_eq!(chain.for_mode(PlayerMode::Regular)[0].name(), "greedy");
    assert_eq!(
        chain.choose(PlayerMode::Regular, &board, &hand),
        Some(c(Rank::Ace, Suit::Spades))
    );

    let player = Player::new(PlayerId::new(0), "Greedy").with_strategies(chain);
    assert_eq!(player.strategies().for_mode(PlayerMode::Attack).len(), 1);
}

// ============================================================================
// Players
// ============================================================================

/// The minimizer sorts its hand by descending score before scanning.
#[test]
fn test_minimizer_orders_hand() {
    let board = board_with_top(c(Rank::Five, Suit::Hearts));
    let hand = [
        c(Rank::Three, Suit::Hearts),
        c(Rank::Nine, Suit::Hearts),
        c(Rank::Queen, Suit::Hearts),
    ];

    let mut regular = Player::new(PlayerId::new(0), "Reg");
    regular.set_hand(hand);
    let mut minimizer = Player::new(PlayerId::new(1), "Min").with_minimizer(true);
    minimizer.set_hand(hand);

    assert_eq!(regular.play(&board), Some(c(Rank::Queen, Suit::Hearts)));
    assert_eq!(minimizer.play(&board), Some(c(Rank::Queen, Suit::Hearts)));
    assert_eq!(
        minimizer.hand(),
        &[
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Three, Suit::Hearts),
            c(Rank::Queen, Suit::Hearts),
        ]
    );

    let mut reordered = Player::new(PlayerId::new(2), "Min").with_minimizer(true);
    reordered.set_hand([
        c(Rank::Three, Suit::Hearts),
        c(Rank::Queen, Suit::Hearts),
        c(Rank::Nine, Suit::Hearts),
    ]);
    let mut plain = Player::new(PlayerId::new(3), "Reg");
    plain.set_hand(reordered.hand().to_vec());

    assert_eq!(plain.play(&board), Some(c(Rank::Nine, Suit::Hearts)));
    assert_eq!(reordered.play(&board), Some(c(Rank::Queen, Suit::Hearts)));
}

/// Wild suit: the most common suit, ties to the first seen, Diamonds if empty.
#[test]
fn test_choose_suit() {
    let mut player = Player::new(PlayerId::new(0), "P");
    assert_eq!(player.choose_suit(), Suit::Diamonds);

    player.set_hand([
        c(Rank::Three, Suit::Spades),
        c(Rank::Four, Suit::Clubs),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Six, Suit::Spades),
    ]);
    assert_eq!(player.choose_suit(), Suit::Spades);

    player.set_hand([c(Rank::Three, Suit::Hearts), c(Rank::Four, Suit::Clubs), c(Rank::Five, Suit::Clubs)]);
    assert_eq!(player.choose_suit(), Suit::Clubs);
}
