//! Pieces module - shape catalog and clockwise matrix rotation
//!
//! Shapes are stored as mino offsets inside a w x h bounding box, in catalog
//! order I, O, T, J, L, S, Z. Rotation is the plain matrix transform
//! (transpose then reverse rows), so the bounding box dimensions swap; there
//! are no wall kicks - a rotation that would collide is simply rejected by
//! the caller.

use crate::types::PieceKind;

/// Offset of a single mino relative to the piece origin (column, row)
pub type MinoOffset = (i8, i8);

/// A piece shape: 4 mino offsets inside a w x h bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    pub cells: [MinoOffset; 4],
    pub w: i8,
    pub h: i8,
}

impl PieceShape {
    /// Rotate 90 degrees clockwise.
    ///
    /// A cell at matrix position (row, col) moves to (col, h-1-row), so in
    /// (dx, dy) offset terms: (dx, dy) -> (h-1-dy, dx). Width and height swap.
    pub fn rotate_cw(&self) -> Self {
        let mut cells = self.cells;
        for cell in &mut cells {
            *cell = (self.h - 1 - cell.1, cell.0);
        }
        Self {
            cells,
            w: self.h,
            h: self.w,
        }
    }
}

/// The spawn-orientation shape for a piece kind.
///
/// Matches the original catalog matrices:
/// I `[1 1 1 1]`, O `[1 1 / 1 1]`, T `[0 1 0 / 1 1 1]`, J `[1 0 0 / 1 1 1]`,
/// L `[0 0 1 / 1 1 1]`, S `[0 1 1 / 1 1 0]`, Z `[1 1 0 / 0 1 1]`.
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => PieceShape {
            cells: [(0, 0), (1, 0), (2, 0), (3, 0)],
            w: 4,
            h: 1,
        },
        PieceKind::O => PieceShape {
            cells: [(0, 0), (1, 0), (0, 1), (1, 1)],
            w: 2,
            h: 2,
        },
        PieceKind::T => PieceShape {
            cells: [(1, 0), (0, 1), (1, 1), (2, 1)],
            w: 3,
            h: 2,
        },
        PieceKind::J => PieceShape {
            cells: [(0, 0), (0, 1), (1, 1), (2, 1)],
            w: 3,
            h: 2,
        },
        PieceKind::L => PieceShape {
            cells: [(2, 0), (0, 1), (1, 1), (2, 1)],
            w: 3,
            h: 2,
        },
        PieceKind::S => PieceShape {
            cells: [(1, 0), (2, 0), (0, 1), (1, 1)],
            w: 3,
            h: 2,
        },
        PieceKind::Z => PieceShape {
            cells: [(0, 0), (1, 0), (1, 1), (2, 1)],
            w: 3,
            h: 2,
        },
    }
}
