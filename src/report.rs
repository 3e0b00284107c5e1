use std::collections::BTreeMap;

use cubist_blocks::MaterialId;
use cubist_mesh_cpu::BlockMesh;

/// Summary of a meshed model.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelReport {
    pub blocks: usize,
    pub visible_faces: usize,
    pub hidden_faces: usize,
    pub triangles: usize,
    pub vertices: usize,
    pub blocks_per_material: BTreeMap<MaterialId, usize>,
}

impl ModelReport {
    pub fn from_meshes(meshes: &[BlockMesh]) -> Self {
        let mut r = ModelReport {
            blocks: meshes.len(),
            ..Default::default()
        };
        for m in meshes {
            r.visible_faces += m.face_count();
            r.triangles += m.triangle_count();
            r.vertices += m.vertex_count();
            *r.blocks_per_material.entry(m.material).or_default() += 1;
        }
        r.hidden_faces = r.blocks * 6 - r.visible_faces;
        r
    }

    pub fn log(&self) {
        log::info!(
            "blocks={} faces visible={} hidden={} triangles={} vertices={}",
            self.blocks,
            self.visible_faces,
            self.hidden_faces,
            self.triangles,
            self.vertices
        );
        for (mid, n) in &self.blocks_per_material {
            log::debug!(" - material {}: {} block(s)", mid.0, n);
        }
    }
}
