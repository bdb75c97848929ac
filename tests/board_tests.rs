//! Board tests through the public facade

use tui_blockfall::core::{Board, Cell};
use tui_blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert_eq!(board.occupied_count(), 0);
    assert!(board.iter_cells().all(|(_, _, cell)| cell == Cell::EMPTY));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
    assert!(!board.is_occupied(-1, 5));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    assert!(board.set(5, 10, Cell::filled(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Cell::filled(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, Cell::EMPTY));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(10, 0, Cell::filled(PieceKind::I)));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::default();
    board.fill_row_except(19, PieceKind::O, &[3]);
    assert!(!board.is_row_full(19));

    board.set(3, 19, Cell::filled(PieceKind::O));
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
}

#[test]
fn test_clear_lines_drops_rows_above() {
    let mut board = Board::default();
    board.fill_row_except(19, PieceKind::I, &[]);
    board.fill_row_except(18, PieceKind::I, &[]);
    board.set(0, 17, Cell::filled(PieceKind::T));
    board.set(9, 16, Cell::filled(PieceKind::Z));

    assert_eq!(board.clear_lines(), 2);
    assert_eq!(board.get(0, 19), Some(Cell::filled(PieceKind::T)));
    assert_eq!(board.get(9, 18), Some(Cell::filled(PieceKind::Z)));
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.height(), 20);
}

#[test]
fn test_clear_lines_non_adjacent_rows() {
    let mut board = Board::default();
    board.fill_row_except(19, PieceKind::L, &[]);
    board.fill_row_except(18, PieceKind::J, &[4]);
    board.fill_row_except(17, PieceKind::L, &[]);

    assert_eq!(board.clear_lines(), 2);
    // The partial row slides to the floor intact.
    assert!(!board.is_row_full(19));
    assert!(!board.is_occupied(4, 19));
    assert_eq!(board.get(0, 19), Some(Cell::filled(PieceKind::J)));
    assert_eq!(board.occupied_count(), 9);
}

#[test]
fn test_clear_lines_without_full_rows_is_noop() {
    let mut board = Board::default();
    board.fill_row_except(19, PieceKind::S, &[0]);
    let before = board.clone();

    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_custom_dimensions() {
    let mut board = Board::new(4, 6);
    board.fill_row_except(5, PieceKind::I, &[]);
    assert!(board.is_row_full(5));
    assert_eq!(board.clear_lines(), 1);
    assert_eq!(board.rows().count(), 6);
    assert!(board.rows().all(|row| row.len() == 4));
}
