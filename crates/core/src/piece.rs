//! Piece module - the falling piece and its board interactions
//!
//! A piece is a kind, a rotation index into the kind's state list, and a board
//! anchor locating the local bounding-box origin. Every mutation is tentative:
//! it is applied, tested with [`Piece::collides`] and reverted on failure, so a
//! piece outside the legal space is only ever observable at spawn time.

use rand::Rng;

use crate::board::{Board, Cell};
use crate::shapes::{self, ShapeCells};
use crate::types::{PieceKind, Rgb};

/// A piece on (or above) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: usize,
    x: i32,
    y: i32,
}

impl Piece {
    /// Create a piece in its first rotation state, anchored at (0, 0)
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: 0,
            y: 0,
        }
    }

    /// Create a piece of a uniformly random kind.
    ///
    /// Every call is independent: there is no bag, so droughts and repeats
    /// are possible.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let index = rng.random_range(0..PieceKind::ALL.len());
        Self::new(PieceKind::ALL[index])
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    pub fn box_size(&self) -> usize {
        shapes::box_size(self.kind)
    }

    /// Move the anchor without any collision test (spawn placement)
    pub fn place(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Same piece with the anchor at (x, y)
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.place(x, y);
        self
    }

    /// Column that centers this piece's bounding box on a board of `board_width`
    pub fn spawn_x(&self, board_width: usize) -> i32 {
        (board_width / 2) as i32 - (self.box_size() / 2) as i32
    }

    /// Occupied cells in local coordinates
    pub fn local_cells(&self) -> ShapeCells {
        shapes::shape_cells(self.kind, self.rotation)
    }

    /// Occupied cells in board coordinates
    pub fn cells(&self) -> ShapeCells {
        self.cells_at(self.x, self.y)
    }

    fn cells_at(&self, x: i32, y: i32) -> ShapeCells {
        let mut cells = self.local_cells();
        for cell in cells.iter_mut() {
            cell.0 += x;
            cell.1 += y;
        }
        cells
    }

    /// Whether the piece overlaps a wall, the floor or a filled cell.
    ///
    /// Rows above the board are only tested against the side walls.
    pub fn collides(&self, board: &Board) -> bool {
        self.collides_at(board, self.x, self.y)
    }

    fn collides_at(&self, board: &Board, x: i32, y: i32) -> bool {
        let width = board.width() as i32;
        let height = board.height() as i32;
        self.cells_at(x, y).iter().any(|&(bx, by)| {
            bx < 0 || bx >= width || by >= height || (by >= 0 && board.is_occupied(bx, by))
        })
    }

    /// Advance to the next rotation state in place.
    ///
    /// Returns false and leaves the piece untouched when the kind has a
    /// single state or the rotated piece would collide.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let count = shapes::rotation_count(self.kind);
        if count <= 1 {
            return false;
        }

        let previous = self.rotation;
        self.rotation = (self.rotation + 1) % count;
        if self.collides(board) {
            self.rotation = previous;
            return false;
        }
        true
    }

    /// Translate by (dx, dy); reverted and false on collision
    pub fn try_move(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        if self.collides_at(board, self.x + dx, self.y + dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Drop to the lowest legal row, returning the rows travelled
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let mut distance = 0;
        while self.try_move(board, 0, 1) {
            distance += 1;
        }
        distance
    }

    /// Row the anchor would rest on after a hard drop
    pub fn ghost_y(&self, board: &Board) -> i32 {
        let mut ghost = *self;
        ghost.hard_drop(board);
        ghost.y
    }

    /// Write the occupied cells into the board.
    ///
    /// Cells outside the grid are skipped; nothing outside the shape mask is
    /// touched. Returns how many cells were written.
    pub fn commit(&self, board: &mut Board) -> usize {
        self.cells()
            .iter()
            .filter(|&&(x, y)| board.set(x, y, Cell::filled(self.kind)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_piece_is_unplaced_first_state() {
        let piece = Piece::new(PieceKind::T);
        assert_eq!(piece.kind(), PieceKind::T);
        assert_eq!(piece.rotation(), 0);
        assert_eq!((piece.x(), piece.y()), (0, 0));
        assert_eq!(piece.color(), PieceKind::T.color());
    }

    #[test]
    fn test_spawn_x_centers_bounding_box() {
        assert_eq!(Piece::new(PieceKind::I).spawn_x(10), 3);
        assert_eq!(Piece::new(PieceKind::O).spawn_x(10), 4);
        assert_eq!(Piece::new(PieceKind::T).spawn_x(10), 4);
    }

    #[test]
    fn test_spawn_draws_every_kind_eventually() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let piece = Piece::spawn(&mut rng);
            assert_eq!(piece.rotation(), 0);
            seen[piece.kind().index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_collides_with_walls_and_floor() {
        let board = Board::new(10, 20);
        let t = Piece::new(PieceKind::T);

        assert!(!t.at(0, 0).collides(&board));
        assert!(t.at(-1, 0).collides(&board));
        assert!(t.at(8, 0).collides(&board));
        assert!(!t.at(7, 18).collides(&board));
        assert!(t.at(7, 19).collides(&board));
    }

    #[test]
    fn test_rows_above_board_only_test_side_walls() {
        let mut board = Board::new(10, 20);
        board.fill_row_except(0, PieceKind::Z, &[]);

        // I in its first state occupies local row 1 only.
        let above = Piece::new(PieceKind::I).at(3, -2);
        assert!(!above.collides(&board));
        assert!(Piece::new(PieceKind::I).at(-1, -2).collides(&board));
        assert!(Piece::new(PieceKind::I).at(3, -1).collides(&board));
    }

    #[test]
    fn test_failed_move_leaves_position() {
        let board = Board::new(10, 20);
        let mut piece = Piece::new(PieceKind::O).at(0, 0);

        assert!(!piece.try_move(&board, -1, 0));
        assert_eq!((piece.x(), piece.y()), (0, 0));
        assert!(piece.try_move(&board, 1, 1));
        assert_eq!((piece.x(), piece.y()), (1, 1));
    }

    #[test]
    fn test_rotate_reverts_on_collision() {
        let board = Board::new(10, 20);
        // Horizontal I resting on the floor cannot stand up.
        let mut piece = Piece::new(PieceKind::I).at(3, 18);
        assert!(!piece.collides(&board));
        assert!(!piece.rotate(&board));
        assert_eq!(piece.rotation(), 0);
    }

    #[test]
    fn test_square_never_rotates() {
        let board = Board::new(10, 20);
        let mut piece = Piece::new(PieceKind::O).at(4, 5);
        assert!(!piece.rotate(&board));
        assert_eq!(piece.rotation(), 0);
    }

    #[test]
    fn test_hard_drop_counts_rows() {
        let board = Board::new(10, 20);
        let mut piece = Piece::new(PieceKind::O).at(4, 0);
        assert_eq!(piece.hard_drop(&board), 18);
        assert_eq!(piece.y(), 18);
        assert_eq!(piece.hard_drop(&board), 0);
    }

    #[test]
    fn test_ghost_does_not_move_piece() {
        let board = Board::new(10, 20);
        let piece = Piece::new(PieceKind::T).at(4, 0);
        assert_eq!(piece.ghost_y(&board), 18);
        assert_eq!(piece.y(), 0);
    }

    #[test]
    fn test_commit_writes_only_mask_cells() {
        let mut board = Board::new(10, 20);
        board.set(0, 19, Cell::filled(PieceKind::J));
        let piece = Piece::new(PieceKind::S).at(4, 18);

        assert_eq!(piece.commit(&mut board), 4);
        assert_eq!(board.occupied_count(), 5);
        for (x, y) in piece.cells() {
            assert_eq!(board.get(x, y), Some(Cell::filled(PieceKind::S)));
        }
        assert_eq!(board.get(0, 19), Some(Cell::filled(PieceKind::J)));
        // Inside the bounding box but outside the mask.
        assert_eq!(board.get(4, 18), Some(Cell::EMPTY));
    }

    #[test]
    fn test_commit_skips_cells_above_board() {
        let mut board = Board::new(10, 20);
        let piece = Piece::new(PieceKind::I).at(0, -1).rotated_for_test(1);
        assert_eq!(piece.commit(&mut board), 3);
    }

    impl Piece {
        fn rotated_for_test(mut self, rotation: usize) -> Self {
            self.rotation = rotation;
            self
        }
    }
}
