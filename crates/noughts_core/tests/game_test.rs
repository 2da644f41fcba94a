//! Tests for game sessions.

use noughts_core::{
    Game, GameInvariants, GameStatus, InvariantSet, Mark, Move, MoveError, Position,
    select_move,
};

#[test]
fn test_session_lifecycle() {
    let mut game = Game::new();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.to_move(), Mark::X);

    let status = game
        .play(Move::new(Mark::X, Position::Center))
        .expect("Valid move");
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(game.to_move(), Mark::O);
    assert_eq!(game.history(), &[Move::new(Mark::X, Position::Center)]);
}

#[test]
fn test_draw_ends_session() {
    // X O X / X O O / O X X
    let game = Game::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .unwrap();

    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.is_over());
    assert_eq!(game.winner(), None);
    assert_eq!(game.winning_line(), None);
}

#[test]
fn test_moves_after_game_over_are_rejected() {
    let mut game = Game::replay(&[
        Position::Center,
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomCenter,
    ])
    .unwrap();
    assert_eq!(game.winner(), Some(Mark::X));

    let board = *game.board();
    for pos in board.empty_positions() {
        assert_eq!(game.place(pos), Err(MoveError::GameOver));
        assert_eq!(
            game.play(Move::new(game.to_move().opponent(), pos)),
            Err(MoveError::GameOver)
        );
    }
    assert_eq!(*game.board(), board);
}

#[test]
fn test_replay_reports_invalid_move() {
    let result = Game::replay(&[Position::Center, Position::Center]);
    assert_eq!(result, Err(MoveError::InvalidMove(Position::Center)));
}

#[test]
fn test_human_vs_computer_session() {
    let computer = Mark::O;
    let mut game = Game::new();
    let human_moves = [
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
        Position::BottomLeft,
        Position::MiddleLeft,
    ];
    let mut human = human_moves.iter();

    while !game.is_over() {
        let pos = if game.to_move() == computer {
            select_move(game.board(), computer).unwrap()
        } else {
            // Skip squares the computer has already taken.
            *human
                .by_ref()
                .find(|p| game.board().is_empty(**p))
                .expect("Enough human moves")
        };
        game.place(pos).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    assert_ne!(game.winner(), Some(Mark::X));
}
