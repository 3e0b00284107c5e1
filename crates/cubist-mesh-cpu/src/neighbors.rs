use hashbrown::HashMap;

use cubist_blocks::{Block, Face};

/// Lattice position -> block index, built once per model.
///
/// When several blocks share a cell the first decoded one is indexed.
pub struct PositionIndex {
    map: HashMap<(i32, i32, i32), usize>,
}

impl PositionIndex {
    pub fn build(blocks: &[Block]) -> Self {
        let mut map = HashMap::with_capacity(blocks.len());
        for (i, b) in blocks.iter().enumerate() {
            map.entry(b.position()).or_insert(i);
        }
        Self { map }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        self.map.get(&(x, y, z)).copied()
    }

    /// Index of the block touching `block` across `face`, if any.
    #[inline]
    pub fn neighbor(&self, block: &Block, face: Face) -> Option<usize> {
        let (dx, dy, dz) = face.delta();
        let nx = block.x.checked_add(dx)?;
        let ny = block.y.checked_add(dy)?;
        let nz = block.z.checked_add(dz)?;
        self.get(nx, ny, nz)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
