//! CPU meshing crate: neighbor face culling and per-block mesh assembly.
#![forbid(unsafe_code)]

use std::str::FromStr;
use std::time::Instant;

use cubist_blocks::Block;
use cubist_geom::Vec3;
use cubist_io::{DecodeError, decode_blocks};
use rayon::prelude::*;

pub mod build;
pub mod mesh_build;
pub mod neighbors;
pub mod visibility;

pub use build::{FaceRecord, face_uvs, visible_face_records};
pub use mesh_build::{BlockMesh, build_block_mesh, quad_indices};
pub use neighbors::PositionIndex;
pub use visibility::{faces_coincide, resolve_visibility, resolve_visibility_par};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshOptions {
    /// Model scale; only uniform values produce per-vertex UVs.
    pub scale: Vec3,
    /// Resolve visibility and build meshes on the rayon pool.
    pub parallel: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            parallel: false,
        }
    }
}

/// Kind of payload handed to the viewer. Only block models carry geometry.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ModelKind {
    #[default]
    Model,
    Avatar,
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "model" => Ok(ModelKind::Model),
            "avatar" => Ok(ModelKind::Avatar),
            other => Err(format!("unknown model kind '{}'", other)),
        }
    }
}

#[inline]
fn elapsed_ms(t0: Instant) -> u32 {
    t0.elapsed().as_millis().min(u128::from(u32::MAX)) as u32
}

/// Culls touching faces across `blocks` and builds one mesh per block, in block order.
pub fn mesh_blocks(blocks: &mut [Block], opts: &MeshOptions) -> Vec<BlockMesh> {
    let t_vis = Instant::now();
    if opts.parallel {
        resolve_visibility_par(blocks);
    } else {
        resolve_visibility(blocks);
    }
    let ms_vis = elapsed_ms(t_vis);

    let t_build = Instant::now();
    let scale = opts.scale;
    let meshes: Vec<BlockMesh> = if opts.parallel {
        blocks.par_iter().map(|b| build_block_mesh(b, scale)).collect()
    } else {
        blocks.iter().map(|b| build_block_mesh(b, scale)).collect()
    };
    let ms_build = elapsed_ms(t_build);
    log::info!(
        target: "perf",
        "ms visibility={} build={} mesher_blocks n={} parallel={}",
        ms_vis,
        ms_build,
        blocks.len(),
        opts.parallel
    );
    meshes
}

/// Decodes a model and returns the mesh of every block.
pub fn decode(bytes: &[u8], scale: Vec3) -> Result<Vec<BlockMesh>, DecodeError> {
    decode_with(
        bytes,
        &MeshOptions {
            scale,
            ..MeshOptions::default()
        },
    )
}

pub fn decode_with(bytes: &[u8], opts: &MeshOptions) -> Result<Vec<BlockMesh>, DecodeError> {
    let t0 = Instant::now();
    let mut blocks = decode_blocks(bytes)?;
    log::info!(
        target: "perf",
        "ms={} decode_blocks bytes={} blocks={}",
        elapsed_ms(t0),
        bytes.len(),
        blocks.len()
    );
    Ok(mesh_blocks(&mut blocks, opts))
}

/// Dispatches on the payload kind; avatars have no block geometry and yield nothing.
pub fn decode_kind(
    kind: ModelKind,
    bytes: &[u8],
    opts: &MeshOptions,
) -> Result<Vec<BlockMesh>, DecodeError> {
    match kind {
        ModelKind::Model => decode_with(bytes, opts),
        ModelKind::Avatar => {
            log::debug!("avatar payload of {} byte(s) skipped", bytes.len());
            Ok(Vec::new())
        }
    }
}
