//! Integration tests for the transition engine through the facade crate

use ziqi_tetris::core::{
    is_valid_placement, piece_def, ActivePiece, Board, GameState, ScriptedSource, SimpleRng, Stats,
};
use ziqi_tetris::types::{
    Color, Direction, GameAction, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH,
};

fn start(kind: PieceKind) -> (GameState, ScriptedSource) {
    let mut source = ScriptedSource::repeat(kind);
    let state = GameState::new(0, &mut source).apply(GameAction::Start, &mut source);
    (state, source)
}

fn with_board(state: &GameState, board: Board) -> GameState {
    GameState::from_parts(board, state.active(), state.next(), state.status(), state.stats())
}

#[test]
fn test_game_lifecycle() {
    let mut rng = SimpleRng::new(12345);
    let state = GameState::new(0, &mut rng);
    assert_eq!(state.status(), GameStatus::Idle);
    assert!(state.active().is_some());
    assert!(state.next().is_some());

    let state = state.apply(GameAction::Start, &mut rng);
    assert_eq!(state.status(), GameStatus::Playing);

    let paused = state.apply(GameAction::Pause, &mut rng);
    assert_eq!(paused.status(), GameStatus::Paused);
    assert_eq!(paused.apply(GameAction::Tick, &mut rng), paused);

    let resumed = paused.apply(GameAction::Resume, &mut rng);
    assert_eq!(resumed, state);
}

#[test]
fn test_o_piece_falls_and_locks_on_floor() {
    let (mut state, mut source) = start(PieceKind::O);
    for _ in 0..19 {
        state = state.apply(GameAction::MoveDown, &mut source);
    }

    let board = state.board();
    assert_eq!(board.occupied_count(), 4);
    for (x, y) in [(5, 18), (6, 18), (5, 19), (6, 19)] {
        assert_eq!(board.get(x, y), Some(Some(Color::Yellow)));
    }
    assert_eq!(state.lines(), 0);
    assert_eq!(state.score(), 0);
    assert_eq!(state.status(), GameStatus::Playing);
}

#[test]
fn test_vertical_i_completes_bottom_row() {
    let (state, mut source) = start(PieceKind::I);
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        if x != 5 {
            board.set(x, 19, Some(Color::Blue));
        }
    }
    let mut state = with_board(&state, board);

    for _ in 0..18 {
        state = state.apply(GameAction::MoveDown, &mut source);
    }

    assert_eq!(state.lines(), 1);
    assert_eq!(state.score(), 100);
    assert_eq!(state.level(), 1);
    assert!(!state.board().is_row_full(19));
    assert_eq!(state.board().rows().count(), BOARD_HEIGHT as usize);
    // the three I cells above the cleared row shifted down by one
    for y in 17..20 {
        assert_eq!(state.board().get(5, y), Some(Some(Color::Cyan)));
    }
    assert_eq!(state.board().occupied_count(), 3);
}

#[test]
fn test_line_clear_scales_with_level() {
    let (state, mut source) = start(PieceKind::I);
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        if x != 5 {
            board.set(x, 19, Some(Color::Blue));
        }
    }
    let stats = Stats {
        score: 0,
        level: 3,
        lines: 20,
        high_score: 0,
    };
    let state =
        GameState::from_parts(board, state.active(), state.next(), GameStatus::Playing, stats);

    let dropped = state.apply(GameAction::HardDrop, &mut source);
    assert_eq!(dropped.score(), 300 + 2 * 17);
    assert_eq!(dropped.lines(), 21);
    assert_eq!(dropped.level(), 3);
}

#[test]
fn test_hard_drop_bonus_from_top() {
    let (state, mut source) = start(PieceKind::T);
    assert_eq!(state.ghost_position(), Some((5, 19)));

    let dropped = state.apply(GameAction::HardDrop, &mut source);
    assert_eq!(dropped.score(), 2 * 19);
    assert_eq!(dropped.board().get(5, 19), Some(Some(Color::Accent)));
    assert_eq!(dropped.high_score(), 38);
}

#[test]
fn test_lock_in_top_rows_ends_game() {
    let (state, mut source) = start(PieceKind::O);
    let mut board = Board::new();
    for y in 2..BOARD_HEIGHT as i8 {
        board.set(5, y, Some(Color::Green));
    }
    let state = with_board(&state, board);

    let over = state.apply(GameAction::MoveDown, &mut source);
    assert_eq!(over.status(), GameStatus::GameOver);
    assert!(over.board().is_game_over());

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Tick,
        GameAction::Pause,
        GameAction::Start,
    ] {
        assert_eq!(over.apply(action, &mut source), over, "{:?}", action);
    }

    let restarted = over.apply(GameAction::Restart, &mut source);
    assert_eq!(restarted.status(), GameStatus::Idle);
    assert_eq!(restarted.board().occupied_count(), 0);
}

#[test]
fn test_rotation_never_overlaps() {
    let mut rng = SimpleRng::new(99);
    let mut state = GameState::new(0, &mut rng).start();

    let script = [
        GameAction::Rotate,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::Rotate,
        GameAction::Rotate,
        GameAction::HardDrop,
    ];

    for _ in 0..10 {
        for action in script {
            let after = state.apply(action, &mut rng);
            if after.status() != GameStatus::Playing {
                return;
            }
            if action == GameAction::Rotate && after.active() != state.active() {
                let active = after.active().unwrap();
                assert!(is_valid_placement(after.board(), &active, (0, 0)));
            }
            state = after;
        }
    }
}

#[test]
fn test_move_blocked_by_stack() {
    let (state, mut source) = start(PieceKind::O);
    let mut board = Board::new();
    board.set(4, 0, Some(Color::Pink));
    let state = with_board(&state, board);

    assert_eq!(state.move_piece(Direction::Left, &mut source), state);
    assert_eq!(state.move_piece(Direction::Right, &mut source).active().unwrap().x, 6);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut rng = SimpleRng::new(seed);
        let mut state = GameState::new(0, &mut rng).start();
        for i in 0..200 {
            let action = match i % 5 {
                0 => GameAction::MoveLeft,
                1 => GameAction::Rotate,
                2 => GameAction::Tick,
                3 => GameAction::MoveRight,
                _ => GameAction::HardDrop,
            };
            state = state.apply(action, &mut rng);
        }
        state
    };

    assert_eq!(play(4242), play(4242));
}

#[test]
fn test_spawn_piece_fits_on_empty_board() {
    for def in ziqi_tetris::core::catalog() {
        let piece = ActivePiece::spawn(*def);
        assert!(is_valid_placement(&Board::new(), &piece, (0, 0)), "{:?}", def.kind);
    }
    assert_eq!(piece_def(PieceKind::T).kind, PieceKind::T);
}
