use cubist_blocks::{Block, Face, MaterialId};
use cubist_geom::Vec3;

use crate::build::{FaceRecord, face_uvs, visible_face_records};

/// Renderable buffers for one block, positioned at its lattice cell.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct BlockMesh {
    pub position: [i32; 3],
    pub material: MaterialId,
    /// Vertex positions, stride 3, block-local.
    pub pos: Vec<f32>,
    /// Texture coordinates, stride 2.
    pub uv: Vec<f32>,
    /// Vertex colors, stride 3.
    pub col: Vec<f32>,
    /// Triangle list.
    pub idx: Vec<u16>,
    /// Face tag of every vertex in `pos`.
    pub faces: Vec<Face>,
}

impl BlockMesh {
    pub fn new(block: &Block) -> Self {
        Self {
            position: [block.x, block.y, block.z],
            material: block.material,
            ..Default::default()
        }
    }

    /// Pre-reserve capacity for `n_quads` faces.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
        self.col.reserve(n_quads * 4 * 3);
        self.idx.reserve(n_quads * 6);
        self.faces.reserve(n_quads * 4);
    }

    /// Appends one face's vertices, UVs and colors. Indices are added separately.
    pub fn push_face(&mut self, rec: &FaceRecord, scale: Vec3) {
        for uv in face_uvs(rec.face, &rec.vertices, scale) {
            self.uv.extend_from_slice(&[uv.x, uv.y]);
        }
        for v in &rec.vertices {
            self.pos.extend_from_slice(&v.to_array());
            self.faces.push(rec.face);
        }
        for c in &rec.colors {
            self.col.extend_from_slice(c);
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.vertex_count() / 4
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }
}

/// Two triangles per quad for `quads` consecutive quads of 4 vertices.
pub fn quad_indices(quads: usize) -> Vec<u16> {
    let mut idx = Vec::with_capacity(quads * 6);
    for i in 0..quads {
        let b = (i * 4) as u16;
        idx.extend_from_slice(&[b, b + 3, b + 2, b + 2, b + 1, b]);
    }
    idx
}

/// Assembles the mesh of one block from its visible faces.
pub fn build_block_mesh(block: &Block, scale: Vec3) -> BlockMesh {
    let records = visible_face_records(block);
    let mut mesh = BlockMesh::new(block);
    mesh.reserve_quads(records.len());
    for rec in &records {
        mesh.push_face(rec, scale);
    }
    mesh.idx = quad_indices(records.len());
    mesh
}
