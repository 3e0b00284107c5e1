//! Corner offset lookup and the indentation classifier.
//!
//! Each of a block's 8 corners is stored as one byte addressing a 5x5x5 lattice of
//! local offsets spanning `[-0.5, 0.5]` on every axis: `code = x*25 + y*5 + z` with
//! each level mapped to `level * 0.25 - 0.5`.

use cubist_geom::Vec3;

use crate::face::{Face, FaceMask};

/// Corner codes of an undeformed, full-size block.
pub const IDENTITY_CORNERS: [u8; 8] = [20, 120, 124, 24, 4, 104, 100, 0];

const LEVELS: [f32; 5] = [-0.5, -0.25, 0.0, 0.25, 0.5];

/// Number of codes that address a lattice point. Codes above this map to the block centre.
pub const LATTICE_CODES: usize = 125;

const fn build_offsets() -> [Vec3; 256] {
    let mut table = [Vec3::ZERO; 256];
    let mut code = 0;
    while code < LATTICE_CODES {
        table[code] = Vec3::new(LEVELS[code / 25], LEVELS[(code / 5) % 5], LEVELS[code % 5]);
        code += 1;
    }
    table
}

static CORNER_OFFSETS: [Vec3; 256] = build_offsets();

#[inline]
pub fn corner_offset(code: u8) -> Vec3 {
    CORNER_OFFSETS[code as usize]
}

/// Resolves all 8 corner codes of a block to local positions.
#[inline]
pub fn corner_positions(codes: &[u8; 8]) -> [Vec3; 8] {
    (*codes).map(corner_offset)
}

/// Returns the faces whose 4 corners are all non-indented.
///
/// An undeformed block is flat on every face. With more than 4 indented corners no
/// face can be flat and the mask is empty.
pub fn flat_faces(codes: &[u8; 8]) -> FaceMask {
    let mut indented = [false; 8];
    for (i, (code, ident)) in codes.iter().zip(IDENTITY_CORNERS.iter()).enumerate() {
        indented[i] = code != ident;
    }
    let count = indented.iter().filter(|&&b| b).count();
    if count == 0 {
        return FaceMask::ALL;
    }
    if count > 4 {
        return FaceMask::NONE;
    }
    let mut mask = FaceMask::NONE;
    for face in Face::ALL {
        if face.flat_corners().iter().all(|&c| !indented[c]) {
            mask.insert(face);
        }
    }
    mask
}
