//! Game flow tests through the public API

use tetris_legacy::core::GameState;
use tetris_legacy::types::{GameCommand, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, START_LIVES};

fn started(seed: u32) -> GameState {
    let mut state = GameState::new(seed);
    state.start();
    state
}

#[test]
fn test_fresh_game_state() {
    let state = started(12345);
    assert!(state.started());
    assert!(!state.game_over());
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.lives(), START_LIVES);
    assert!(state.active().is_some());
    assert!(state.perks().is_empty());
    assert!(state.cooldown().ready());
}

#[test]
fn test_events_start_empty() {
    let mut state = started(12345);
    assert!(state.take_events().is_empty());
}

#[test]
fn test_spawn_position_is_centered_top() {
    let state = started(99);
    let piece = state.active().unwrap();
    assert_eq!(piece.x, SPAWN_X);
    assert_eq!(piece.y, 0);
}

#[test]
fn test_soft_drop_moves_down() {
    let mut state = started(12345);
    let y0 = state.active().unwrap().y;
    state.apply(GameCommand::SoftDrop);
    assert_eq!(state.active().unwrap().y, y0 + 1);
}

#[test]
fn test_horizontal_moves_stay_in_bounds() {
    let mut state = started(12345);
    for _ in 0..2 * BOARD_WIDTH {
        state.apply(GameCommand::MoveRight);
    }
    let piece = state.active().unwrap();
    let rightmost = piece.shape.cells.iter().map(|&(dx, _)| piece.x + dx).max();
    assert_eq!(rightmost, Some(BOARD_WIDTH as i8 - 1));
}

#[test]
fn test_rotation_keeps_piece_on_board() {
    let mut state = started(12345);
    for _ in 0..4 {
        state.apply(GameCommand::Rotate);
        if let Some(piece) = state.active() {
            for &(dx, dy) in piece.shape.cells.iter() {
                let x = piece.x + dx;
                assert!((0..BOARD_WIDTH as i8).contains(&x));
                assert!(piece.y + dy < BOARD_HEIGHT as i8);
            }
        }
    }
}

#[test]
fn test_piece_locks_and_respawns_under_gravity() {
    let mut state = started(12345);
    // Enough ticks to drive the first piece to the floor and lock it.
    for _ in 0..BOARD_HEIGHT as usize + 2 {
        state.gravity_tick();
    }
    assert!(!state.game_over());
    assert!(state.active().is_some());
    // Something got written into the board.
    let occupied = state.board().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(occupied, 4);
}

#[test]
fn test_ghost_row_is_at_or_below_piece() {
    let mut state = started(12345);
    let ghost = state.ghost_row().unwrap();
    assert!(ghost >= state.active().unwrap().y);

    // Dropping to the ghost row leaves no room below.
    while state.active().unwrap().y < ghost {
        state.apply(GameCommand::SoftDrop);
    }
    assert_eq!(state.ghost_row().unwrap(), state.active().unwrap().y);
}

#[test]
fn test_use_perk_with_empty_inventory_is_noop() {
    let mut state = started(12345);
    for index in 0..3 {
        state.apply(GameCommand::UsePerk(index));
    }
    assert!(state.cooldown().ready());
    assert!(state.take_events().is_empty());
}

#[test]
fn test_second_tick_without_effects_is_noop() {
    let mut state = started(12345);
    for _ in 0..100 {
        state.second_tick();
    }
    assert!(state.take_events().is_empty());
    assert!(!state.effects().slow_time.active());
}

#[test]
fn test_determinism_for_equal_seeds() {
    let mut a = started(777);
    let mut b = started(777);
    for _ in 0..50 {
        a.gravity_tick();
        b.gravity_tick();
    }
    assert_eq!(a.score(), b.score());
    assert_eq!(a.board().cells(), b.board().cells());
    assert_eq!(a.active().map(|p| p.kind), b.active().map(|p| p.kind));
}
