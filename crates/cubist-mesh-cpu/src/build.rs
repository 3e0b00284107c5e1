//! Per-face geometry: vertex positions, placeholder vertex colors and projected UVs.

use cubist_blocks::{Block, Face, corner_positions};
use cubist_geom::{Vec2, Vec3};

pub type Rgb = [f32; 3];

/// One visible face of a block, ready to be appended to a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceRecord {
    pub face: Face,
    pub vertices: [Vec3; 4],
    pub colors: [Rgb; 4],
}

/// True when `p` has been pulled off the face's border plane towards the block centre.
#[inline]
fn is_inside(face: Face, p: Vec3) -> bool {
    let (axis, border) = face.border_plane();
    let v = p.axis(axis);
    if border > 0.0 { v < border } else { v > border }
}

/// Vertex light for `vertex` of `face`.
///
/// TODO: sample neighbor occupancy around the vertex; every sample currently counts as fully lit.
#[inline]
fn average_light(_face: Face, _vertex: usize, _inside: bool) -> Rgb {
    let sum: u32 = [255u32; 4].iter().sum();
    let v = sum as f32 / 1020.0;
    [v, v, v]
}

/// Builds one record per face not marked hidden, in emission order.
pub fn visible_face_records(block: &Block) -> Vec<FaceRecord> {
    let corners = corner_positions(&block.corners);
    block
        .visible()
        .iter()
        .map(|face| {
            let vertices = face.winding().map(|c| corners[c]);
            let mut colors = [[0.0; 3]; 4];
            for (i, p) in vertices.iter().enumerate() {
                colors[i] = average_light(face, i, is_inside(face, *p));
            }
            FaceRecord {
                face,
                vertices,
                colors,
            }
        })
        .collect()
}

/// Texture coordinates for a face's vertices.
///
/// Only uniform scales are supported. Any other scale yields a single `(0, 0)`
/// entry for the whole face instead of one per vertex.
pub fn face_uvs(face: Face, vertices: &[Vec3; 4], scale: Vec3) -> Vec<Vec2> {
    if !scale.is_uniform() {
        return vec![Vec2::ZERO];
    }
    let div = 2.0 / scale.x;
    let offset = face.uv_offset();
    vertices
        .iter()
        .map(|&p| (face.project(p) + offset) / div)
        .collect()
}
