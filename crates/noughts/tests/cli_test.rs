//! Tests for command-line parsing.

use clap::Parser;
use noughts::{Cli, Command, DEFAULT_CONFIG_PATH, GameMode};
use noughts_core::{Board, Mark};
use std::path::PathBuf;

#[test]
fn test_no_subcommand_defaults_to_play() {
    let cli = Cli::try_parse_from(["noughts"]).unwrap();
    assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    assert_eq!(cli.command_or_default(), Command::Play { mode: None });
}

#[test]
fn test_play_with_mode() {
    let cli = Cli::try_parse_from(["noughts", "play", "--mode", "pvp"]).unwrap();
    assert_eq!(
        cli.command_or_default(),
        Command::Play {
            mode: Some(GameMode::PlayerVsPlayer)
        }
    );

    let cli = Cli::try_parse_from(["noughts", "play", "--mode", "computer"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Command::Play {
            mode: Some(GameMode::PlayerVsComputer)
        })
    );
}

#[test]
fn test_best_move_arguments() {
    let cli = Cli::try_parse_from([
        "noughts",
        "--config",
        "custom.toml",
        "best-move",
        "XX_/O__/___",
        "--mark",
        "o",
        "--explain",
    ])
    .unwrap();

    assert_eq!(cli.config, PathBuf::from("custom.toml"));
    let expected: Board = "XX.O.....".parse().unwrap();
    assert_eq!(
        cli.command,
        Some(Command::BestMove {
            board: expected,
            mark: Some(Mark::O),
            explain: true,
        })
    );
}

#[test]
fn test_board_may_start_with_dash() {
    let cli = Cli::try_parse_from(["noughts", "best-move", "--explain", "-X-------"]).unwrap();
    let expected: Board = ".X.......".parse().unwrap();
    assert_eq!(
        cli.command,
        Some(Command::BestMove {
            board: expected,
            mark: None,
            explain: true,
        })
    );

    let cli = Cli::try_parse_from(["noughts", "best-move", "---------"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Command::BestMove {
            board: Board::new(),
            mark: None,
            explain: false,
        })
    );
}

#[test]
fn test_invalid_board_is_rejected() {
    assert!(Cli::try_parse_from(["noughts", "best-move", "XXXX"]).is_err());
    assert!(Cli::try_parse_from(["noughts", "best-move", "XXX......"]).is_err());
}

#[test]
fn test_self_play_subcommand() {
    let cli = Cli::try_parse_from(["noughts", "self-play"]).unwrap();
    assert_eq!(cli.command, Some(Command::SelfPlay));
}
