//! Shapes module - the constant piece catalog
//!
//! Every kind owns a fixed, ordered list of rotation states. A state is a
//! square bit matrix over the piece's local bounding box (`box_size` x
//! `box_size`, padded into a 4x4 array). Rotation advances through the list
//! in order; there is no wall-kick table.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// One rotation state: row-major occupancy over the local bounding box.
pub type ShapeMatrix = [[u8; 4]; 4];

/// Local (x, y) offsets of the occupied cells of one rotation state.
pub type ShapeCells = ArrayVec<(i32, i32), 4>;

struct KindShapes {
    box_size: u8,
    states: &'static [ShapeMatrix],
}

const I_STATES: [ShapeMatrix; 4] = [
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]],
    [[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
];

const O_STATES: [ShapeMatrix; 1] = [[[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]];

const T_STATES: [ShapeMatrix; 4] = [
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
];

const L_STATES: [ShapeMatrix; 4] = [
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0]],
    [[1, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
];

const J_STATES: [ShapeMatrix; 4] = [
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 1, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
];

const S_STATES: [ShapeMatrix; 4] = [
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
    [[1, 0, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
];

const Z_STATES: [ShapeMatrix; 4] = [
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 1, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [1, 1, 0, 0], [1, 0, 0, 0], [0, 0, 0, 0]],
];

/// Indexed by `PieceKind::index()`.
const CATALOG: [KindShapes; 7] = [
    KindShapes { box_size: 4, states: &I_STATES },
    KindShapes { box_size: 2, states: &O_STATES },
    KindShapes { box_size: 3, states: &T_STATES },
    KindShapes { box_size: 3, states: &L_STATES },
    KindShapes { box_size: 3, states: &J_STATES },
    KindShapes { box_size: 3, states: &S_STATES },
    KindShapes { box_size: 3, states: &Z_STATES },
];

#[inline(always)]
fn entry(kind: PieceKind) -> &'static KindShapes {
    &CATALOG[kind.index()]
}

/// All rotation states of a kind, in rotation order
pub fn states(kind: PieceKind) -> &'static [ShapeMatrix] {
    entry(kind).states
}

/// Number of rotation states (1 for O, 4 otherwise)
pub fn rotation_count(kind: PieceKind) -> usize {
    entry(kind).states.len()
}

/// Side length of the local bounding box
pub fn box_size(kind: PieceKind) -> usize {
    entry(kind).box_size as usize
}

/// Matrix of one rotation state; the index wraps modulo the state count
pub fn matrix(kind: PieceKind, rotation: usize) -> &'static ShapeMatrix {
    let states = states(kind);
    &states[rotation % states.len()]
}

/// Occupied local cells of one rotation state, in row-major order
pub fn shape_cells(kind: PieceKind, rotation: usize) -> ShapeCells {
    let size = box_size(kind);
    let m = matrix(kind, rotation);
    let mut cells = ShapeCells::new();
    for (y, row) in m.iter().enumerate().take(size) {
        for (x, &bit) in row.iter().enumerate().take(size) {
            if bit != 0 {
                cells.push((x as i32, y as i32));
            }
        }
    }
    cells
}
