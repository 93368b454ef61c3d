//! Tests for the replay engine's public behavior.

use tictactoe_engine::rules::LINES;
use tictactoe_engine::{
    check_winner, Board, BoardState, EngineError, GameEngine, GameStatus, Highlight, Mark,
    MoveOutcome, Position, Square,
};

fn play(engine: &mut GameEngine, cells: &[usize]) {
    for &cell in cells {
        engine.apply_move(cell).expect("cell in range");
    }
}

#[test]
fn test_each_line_alone_is_a_win() {
    for line in LINES {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(Mark::O));
        }
        let win = check_winner(&board).expect("line should win");
        assert_eq!(win.winner, Mark::O);
        assert_eq!(win.line, line);
    }
}

#[test]
fn test_no_three_in_a_row_is_no_winner() {
    assert_eq!(check_winner(&Board::new()), None);

    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Mark::X));
    board.set(Position::Center, Square::Occupied(Mark::O));
    board.set(Position::BottomRight, Square::Occupied(Mark::X));
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_column_scenario() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 3, 4]);
    let outcome = engine.apply_move(6).unwrap();

    let column = [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft];
    assert_eq!(outcome, MoveOutcome::Won { mark: Mark::X, line: column });

    let state = engine.state();
    assert_eq!(state.winner(), Some(Mark::X));
    assert_eq!(state.highlight(), &Highlight::WinningLine(column));
    assert_eq!(state.status(), GameStatus::Won(Mark::X));
    assert!(state.is_ended());
    assert_eq!(state.move_number(), Some(4));
    assert_eq!(state.status_line(), "Winner: X");
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0, 8, 2, 1, 7, 6, 3]);
    let outcome = engine.apply_move(5).unwrap();

    assert_eq!(outcome, MoveOutcome::Drawn { mark: Mark::X, position: Position::MiddleRight });
    let state = engine.state();
    assert_eq!(state.winner(), None);
    assert_eq!(state.status(), GameStatus::Draw);
    assert!(state.is_ended());
    assert_eq!(state.highlight(), &Highlight::LastMove(Position::MiddleRight));
    assert_eq!(engine.history().len(), 9);
}

#[test]
fn test_turns_alternate_starting_with_x() {
    let mut engine = GameEngine::new();
    assert!(engine.state().turn_is_a());

    for (i, cell) in [4, 0, 8, 2, 1, 7].into_iter().enumerate() {
        let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
        let outcome = engine.apply_move(cell).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Placed { mark: expected, position: Position::from_index(cell).unwrap() }
        );
        assert_eq!(engine.state().turn_is_a(), i % 2 == 1);
        assert_eq!(engine.state().move_number(), Some(i));
    }
}

#[test]
fn test_occupied_square_leaves_state_and_history_unchanged() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 8]);
    let state_before = *engine.state();
    let history_before = engine.history().clone();

    for cell in [0, 4, 8] {
        assert_eq!(
            engine.apply_move(cell).unwrap(),
            MoveOutcome::Ignored { position: Position::from_index(cell).unwrap() }
        );
    }

    assert_eq!(engine.state(), &state_before);
    assert_eq!(engine.history(), &history_before);
}

#[test]
fn test_click_after_win_starts_new_game() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 3, 4, 6]);

    for cell in [6, 7] {
        let mut ended = engine.clone();
        let outcome = ended.apply_move(cell).unwrap();
        let position = Position::from_index(cell).unwrap();
        assert_eq!(outcome, MoveOutcome::Started { position });

        let state = ended.state();
        assert_eq!(state.board().marks_of(Mark::X), 1);
        assert_eq!(state.board().marks_of(Mark::O), 0);
        assert_eq!(state.board().get(position), Square::Occupied(Mark::X));
        assert_eq!(state.move_number(), Some(0));
        assert!(!state.turn_is_a());
        assert_eq!(state.winner(), None);
        assert_eq!(state.highlight(), &Highlight::LastMove(position));
        assert_eq!(ended.history().len(), 1);
        assert_eq!(ended.history().get(0), Some(state));
    }
}

#[test]
fn test_click_after_draw_starts_new_game() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0, 8, 2, 1, 7, 6, 3, 5]);
    assert_eq!(engine.state().status(), GameStatus::Draw);

    let outcome = engine.apply_move(4).unwrap();
    assert_eq!(outcome, MoveOutcome::Started { position: Position::Center });
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.state().board().marks_of(Mark::X), 1);
}

#[test]
fn test_first_click_matches_restart_result() {
    // The fresh board goes through the normal move path; the resulting
    // snapshot and history must equal what a restart would produce.
    let mut fresh = GameEngine::new();
    assert_eq!(fresh.state().status(), GameStatus::Fresh);
    assert_eq!(
        fresh.apply_move(2).unwrap(),
        MoveOutcome::Placed { mark: Mark::X, position: Position::TopRight }
    );

    let mut ended = GameEngine::new();
    play(&mut ended, &[0, 1, 3, 4, 6]);
    assert_eq!(
        ended.apply_move(2).unwrap(),
        MoveOutcome::Started { position: Position::TopRight }
    );

    assert_eq!(fresh.state(), ended.state());
    assert_eq!(fresh.history(), ended.history());
}

#[test]
fn test_branching_truncates_forward_history() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 3, 4]);
    assert_eq!(engine.history().len(), 5);

    let selected = *engine.select_history(1).unwrap();
    assert_eq!(selected.move_number(), Some(1));
    assert_eq!(engine.history().len(), 5, "selection must not mutate history");

    engine.apply_move(8).unwrap();
    assert_eq!(engine.history().len(), 3);
    let numbers: Vec<_> = engine.history().iter().map(BoardState::move_number).collect();
    assert_eq!(numbers, vec![Some(0), Some(1), Some(2)]);
    assert_eq!(engine.state().board().get(Position::BottomRight), Square::Occupied(Mark::X));
    assert_eq!(engine.state().board().get(Position::TopRight), Square::Empty);
}

#[test]
fn test_branch_length_is_j_plus_two() {
    for k in 1..7usize {
        for j in 0..k {
            let mut engine = GameEngine::new();
            // Row-major fill: the first win is X on the left diagonal at move 6.
            play(&mut engine, &(0..=k).collect::<Vec<_>>());
            engine.select_history(j).unwrap();
            let free = Position::ALL
                .into_iter()
                .find(|p| engine.state().board().is_empty(*p))
                .unwrap();
            engine.apply_position(free);
            assert_eq!(engine.history().len(), j + 2, "k={k} j={j}");
        }
    }
}

#[test]
fn test_navigation_moves_freely_without_mutation() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 3, 4, 6]);
    let history = engine.history().clone();

    for index in [4, 0, 3, 1, 4, 2] {
        let state = *engine.select_history(index).unwrap();
        assert_eq!(Some(&state), history.get(index));
        assert_eq!(engine.history(), &history);
    }
}

#[test]
fn test_selecting_ended_snapshot_then_clicking_restarts() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 3, 4, 6]);
    engine.select_history(2).unwrap();
    engine.select_history(4).unwrap();

    let outcome = engine.apply_move(5).unwrap();
    assert_eq!(outcome, MoveOutcome::Started { position: Position::MiddleRight });
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_out_of_range_inputs_are_rejected() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.apply_move(9), Err(EngineError::CellOutOfRange { index: 9 }));
    assert_eq!(
        engine.select_history(0).map(|s| *s),
        Err(EngineError::HistoryOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_snapshots_serialize() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0]);
    let json = serde_json::to_value(engine.history()).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["move_number"], 1);
    assert_eq!(entries[1]["to_move"], "X");
}
