//! Play Fishing in the terminal.
//!
//! Every event is logged through `tracing`. With `--human N`, seat N is
//! driven from stdin: enter a 1-based card number (plus a suit letter
//! `c`/`d`/`h`/`s` for a Jack), or `d` to draw.

use std::io::BufRead;
use std::sync::Arc;

use clap::Parser;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fishing_game::{
    Card, Game, GameConfig, GameError, GameEvent, GameStatus, HumanInput, PlayerId, Suit,
    TracingObserver,
};

#[derive(Parser, Debug)]
#[command(name = "fishing", about = "A shedding card game for 2+ players")]
struct Args {
    /// Number of players.
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Cards dealt to each player (5-8).
    #[arg(long, default_value_t = 7)]
    hand_size: usize,

    /// Pause between turns in milliseconds.
    #[arg(long, default_value_t = fishing_game::core::DEFAULT_PACING_DELAY_MS)]
    delay_ms: u64,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// 1-based seat to play yourself.
    #[arg(long)]
    human: Option<u8>,

    /// Player names, in seat order.
    #[arg(long = "name")]
    names: Vec<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn parse_suit(token: &str) -> Option<Suit> {
    match token.to_ascii_lowercase().as_str() {
        "c" | "clubs" => Some(Suit::Clubs),
        "d" | "diamonds" => Some(Suit::Diamonds),
        "h" | "hearts" => Some(Suit::Hearts),
        "s" | "spades" => Some(Suit::Spades),
        _ => None,
    }
}

/// Read decisions from stdin and feed them to the bridge.
fn spawn_stdin_reader(bridge: Arc<HumanInput>, hand: Arc<Mutex<Vec<Card>>>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let mut tokens = line.split_whitespace();
            let Some(first) = tokens.next() else { continue };

            if first.eq_ignore_ascii_case("d") || first.eq_ignore_ascii_case("draw") {
                if !bridge.submit_draw() {
                    warn!("not your turn");
                }
                continue;
            }

            let card = first
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| hand.lock().get(i).copied());
            let Some(card) = card else {
                warn!(input = first, "unknown card number");
                continue;
            };
            let suit = tokens.next().and_then(parse_suit);

            if !bridge.submit_play(card, suit) {
                warn!("not your turn");
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<(), GameError> {
    init_tracing();
    let args = Args::parse();

    let mut config = GameConfig::new(args.players)
        .with_pacing_delay_ms(args.delay_ms)
        .with_names(args.names);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(seat) = args.human {
        config = config.with_human(PlayerId::new(seat.saturating_sub(1)));
    }
    let human = config.human;

    let mut game = Game::new(config)?;
    game.subscribe(TracingObserver);

    if human.is_some() {
        let bridge = Arc::new(HumanInput::new());
        let hand = Arc::new(Mutex::new(Vec::new()));
        game.attach_human(Arc::clone(&bridge));

        let shown = Arc::clone(&hand);
        game.subscribe(move |event: &GameEvent| {
            if let GameEvent::HumanTurnStarted { hand, .. } = event {
                let listing: Vec<String> = hand
                    .iter()
                    .enumerate()
                    .map(|(i, card)| format!("{}:{card}", i + 1))
                    .collect();
                info!("your hand: {}", listing.join("  "));
                *shown.lock() = hand.clone();
            }
        });
        spawn_stdin_reader(bridge, hand);
    }

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    game.begin(args.hand_size)?;
    let outcome = game.run(cancel).await?;

    match outcome.status {
        GameStatus::Won(seat) => info!(winner = %seat, "game over"),
        GameStatus::Aborted => info!("game aborted"),
    }
    Ok(())
}
