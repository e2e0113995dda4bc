//! Tests for the turn controller and board evaluation.

use noughts_core::{Board, Game, GameStatus, Move, MoveError, Player, Position, evaluate};

#[test]
fn test_top_row_win_scenario() {
    let moves = [
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::BottomCenter),
        Move::new(Player::X, Position::TopRight),
    ];

    let game = Game::replay(&moves).expect("Valid replay");

    assert_eq!(evaluate(game.board()), GameStatus::Won(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_full_board_draw_scenario() {
    let board: Board = "XOXXOOOXX".parse().expect("Valid board");
    assert_eq!(evaluate(&board), GameStatus::Draw);

    // The same final position reached through alternating play.
    let order = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    let mut game = Game::new();
    for index in order {
        let pos = Position::from_index(index).unwrap();
        game.place(pos).expect("Legal move");
    }
    assert_eq!(game.board(), &board);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.winning_line(), None);
}

#[test]
fn test_replay_rejects_out_of_turn_move() {
    let moves = [
        Move::new(Player::X, Position::Center),
        Move::new(Player::X, Position::TopLeft),
    ];
    assert_eq!(
        Game::replay(&moves).unwrap_err(),
        MoveError::WrongPlayer(Player::X)
    );
}

#[test]
fn test_move_changes_exactly_one_square() {
    let mut game = Game::new();
    for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
        let before = *game.board();
        game.place(pos).expect("Legal move");
        let after = *game.board();

        let changed: Vec<usize> = (0..9)
            .filter(|&i| before.squares()[i] != after.squares()[i])
            .collect();
        assert_eq!(changed, vec![pos.to_index()]);
    }
}

#[test]
fn test_restart_gives_empty_board() {
    let mut game = Game::new();
    game.place(Position::Center).unwrap();
    game.place(Position::TopLeft).unwrap();

    game.restart();

    assert_eq!(evaluate(game.board()), GameStatus::InProgress);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.to_move(), Player::X);
    assert!(game.history().is_empty());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MoveError::SquareOccupied(Position::Center).to_string(),
        "Square Center is already occupied"
    );
    assert_eq!(MoveError::WrongPlayer(Player::O).to_string(), "It's not O's turn");
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
}
