extern crate minimax_lib;

use minimax_lib::boards::tic_tac_toe::TicTacToeState;
use minimax_lib::boards::tippy::TippyState;
use minimax_lib::session::Match;
use minimax_lib::{GameState, SearchConfig, StrategyKind, build_strategy};
use std::fmt::Display;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=minimax_lib=debug shows every suggested move
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SearchConfig::default();

    // Perfect tic-tac-toe always ends in a draw
    play(
        TicTacToeState::default(),
        StrategyKind::Pruned,
        StrategyKind::Memoized,
        &config,
    );

    // On the small tippy board the first player has a forced win
    play(
        TippyState::default(),
        StrategyKind::Pruned,
        StrategyKind::Pruned,
        &config,
    );

    // Larger boards are out of reach for exact search, so look ahead a few plies only
    play(
        TippyState::new(4),
        StrategyKind::Myopic,
        StrategyKind::Random,
        &config.clone().with_myopic_depth(2).with_random_seed(17),
    );
}

fn play<S>(start: S, first: StrategyKind, second: StrategyKind, config: &SearchConfig)
where
    S: GameState + Display + 'static,
    S::Key: 'static,
{
    println!("{} vs {}", first.name(), second.name());
    let mut game = Match::new(
        start,
        build_strategy(first, config),
        build_strategy(second, config),
    );

    match game.play_out() {
        Ok(winner) => {
            for (player, game_move) in game.history() {
                println!("{:?}: {:?}", player, game_move);
            }
            println!("{}", game.state());
            match winner {
                Some(player) => println!("Winner: {:?}\n", player),
                None => println!("Draw\n"),
            }
        }
        Err(err) => eprintln!("match aborted: {err}"),
    }
}
