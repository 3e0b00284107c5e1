//! Neighbor face occlusion.
//!
//! Two touching faces are culled together or not at all: a face is either fully
//! covered by its neighbor's opposite face or drawn in full.

use std::sync::atomic::{AtomicU8, Ordering};

use cubist_blocks::{Block, Face, FaceMask, corner_positions};
use cubist_geom::Vec3;
use rayon::prelude::*;

use crate::neighbors::PositionIndex;

/// Corners of `face` in winding order, in block-local space.
#[inline]
pub(crate) fn face_corners(block: &Block, face: Face) -> [Vec3; 4] {
    let p = corner_positions(&block.corners);
    face.winding().map(|c| p[c])
}

/// True when every corner of the face lies exactly on the block's outer boundary plane.
#[inline]
fn touches_border(face: Face, corners: &[Vec3; 4]) -> bool {
    let (axis, value) = face.border_plane();
    corners.iter().all(|p| p.axis(axis) == value)
}

/// Exact test: both faces sit on their border planes and their corners coincide
/// under the mirrored correspondence between opposite faces.
fn faces_match_exactly(block: &Block, neighbor: &Block, face: Face) -> bool {
    let ours = face_corners(block, face);
    if !touches_border(face, &ours) {
        return false;
    }
    let other = face.opposite();
    let theirs = face_corners(neighbor, other);
    if !touches_border(other, &theirs) {
        return false;
    }
    let (u, v) = face.plane_axes();
    (0..4).all(|i| {
        let a = ours[i];
        let b = theirs[face.mirror_slot(i)];
        a.axis(u) == b.axis(u) && a.axis(v) == b.axis(v)
    })
}

/// Whether `face` of `block` and the opposite face of `neighbor` fully cover each other.
///
/// Flat-to-flat pairs are accepted without looking at geometry.
pub fn faces_coincide(block: &Block, neighbor: &Block, face: Face) -> bool {
    if block.flat.contains(face) && neighbor.flat.contains(face.opposite()) {
        return true;
    }
    faces_match_exactly(block, neighbor, face)
}

/// Marks every mutually covered face pair in `blocks`.
///
/// Bits are only ever added, so running this more than once changes nothing.
pub fn resolve_visibility(blocks: &mut [Block]) {
    let index = PositionIndex::build(blocks);
    resolve_with_index(blocks, &index);
}

fn resolve_with_index(blocks: &mut [Block], index: &PositionIndex) {
    let mut pairs = 0usize;
    for i in 0..blocks.len() {
        for face in Face::ALL {
            let Some(j) = index.neighbor(&blocks[i], face) else {
                continue;
            };
            if faces_coincide(&blocks[i], &blocks[j], face) {
                blocks[i].hidden.insert(face);
                blocks[j].hidden.insert(face.opposite());
                pairs += 1;
            }
        }
    }
    log::debug!("visibility: {} covered face pair hit(s) over {} block(s)", pairs, blocks.len());
}

/// Parallel `resolve_visibility`. Hidden bits are merged with atomic OR, so the
/// result is identical to the sequential pass.
pub fn resolve_visibility_par(blocks: &mut [Block]) {
    let index = PositionIndex::build(blocks);
    let hidden: Vec<AtomicU8> = blocks.iter().map(|b| AtomicU8::new(b.hidden.bits())).collect();
    let view: &[Block] = blocks;
    view.par_iter().enumerate().for_each(|(i, block)| {
        for face in Face::ALL {
            let Some(j) = index.neighbor(block, face) else {
                continue;
            };
            if faces_coincide(block, &view[j], face) {
                hidden[i].fetch_or(face.flag(), Ordering::Relaxed);
                hidden[j].fetch_or(face.opposite().flag(), Ordering::Relaxed);
            }
        }
    });
    for (block, bits) in blocks.iter_mut().zip(hidden) {
        block.hidden = FaceMask(bits.into_inner());
    }
}
