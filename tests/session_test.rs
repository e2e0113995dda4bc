//! Tests for the session boundary used by front ends.

use noughts_core::{GameStatus, Mode, Player, Position, Session, Turn};

#[test]
fn test_full_game_against_computer() {
    let mut session = Session::new(Mode::HumanVsComputer);

    // Human always takes the lowest free square; the computer must win or draw.
    loop {
        let pos = session.game().valid_moves()[0];
        match session.select_cell(pos) {
            Turn::ComputerToMove { round } => match session.play_computer_move(round) {
                Turn::Human(Player::X) => continue,
                Turn::Over(status) => {
                    assert_ne!(status, GameStatus::Won(Player::X));
                    break;
                }
                other => panic!("unexpected turn {:?}", other),
            },
            Turn::Over(status) => {
                assert_ne!(status, GameStatus::Won(Player::X));
                break;
            }
            other => panic!("unexpected turn {:?}", other),
        }
    }

    let snapshot = session.snapshot();
    assert!(snapshot.status().is_over());
    assert_eq!(snapshot.scores().get(Player::X), 0);
    if *snapshot.status() == GameStatus::Won(Player::O) {
        assert_eq!(snapshot.scores().get(Player::O), 1);
        assert_eq!(snapshot.message(), "Player O wins!");
        assert!(snapshot.winning_line().is_some());
    }
}

#[test]
fn test_snapshot_after_restart() {
    let mut session = Session::new(Mode::HumanVsHuman);
    session.select_cell(Position::Center);
    session.restart();

    let snapshot = session.snapshot();
    assert_eq!(*snapshot.status(), GameStatus::InProgress);
    assert_eq!(snapshot.message(), "Player X's turn");
    assert_eq!(snapshot.board().empty_count(), 9);
    assert_eq!(*snapshot.winning_line(), None);
    assert!(!snapshot.awaiting_computer());
}

#[test]
fn test_draw_message() {
    let mut session = Session::new(Mode::HumanVsHuman);
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.select_cell(Position::from_index(index).unwrap());
    }
    assert_eq!(session.game().status(), GameStatus::Draw);
    assert_eq!(session.status_message(), "It's a draw!");
    assert_eq!(session.scores().get(Player::X), 0);
    assert_eq!(session.scores().get(Player::O), 0);
}
