//! Wavefront OBJ export of decoded block meshes.

use std::io::{self, Write};

use cubist_mesh_cpu::BlockMesh;

/// Writes every mesh as its own object, translated to its lattice cell.
///
/// Texture coordinates are written only for meshes with one UV per vertex; the
/// collapsed single-UV form produced by non-uniform scales has nothing to map.
pub fn write_obj<W: Write>(mut w: W, meshes: &[BlockMesh]) -> io::Result<()> {
    writeln!(w, "# cubist export: {} block(s)", meshes.len())?;
    let mut base_v = 1usize;
    let mut base_vt = 1usize;
    for (n, m) in meshes.iter().enumerate() {
        if m.is_empty() {
            continue;
        }
        let [px, py, pz] = m.position.map(|c| c as f32);
        writeln!(w, "o block_{}", n)?;
        writeln!(w, "# material {}", m.material.0)?;
        for p in m.pos.chunks_exact(3) {
            writeln!(w, "v {} {} {}", p[0] + px, p[1] + py, p[2] + pz)?;
        }
        let with_uv = m.uv.len() == m.vertex_count() * 2;
        if with_uv {
            for t in m.uv.chunks_exact(2) {
                writeln!(w, "vt {} {}", t[0], t[1])?;
            }
        }
        for tri in m.idx.chunks_exact(3) {
            let v = [0, 1, 2].map(|k| base_v + tri[k] as usize);
            if with_uv {
                let t = [0, 1, 2].map(|k| base_vt + tri[k] as usize);
                writeln!(w, "f {}/{} {}/{} {}/{}", v[0], t[0], v[1], t[1], v[2], t[2])?;
            } else {
                writeln!(w, "f {} {} {}", v[0], v[1], v[2])?;
            }
        }
        base_v += m.vertex_count();
        if with_uv {
            base_vt += m.vertex_count();
        }
    }
    w.flush()
}
