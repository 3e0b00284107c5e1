use crate::corners::flat_faces;
use crate::face::FaceMask;

/// Opaque material identifier carried through to the renderer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MaterialId(pub u8);

/// One decoded lattice cell with possibly indented corners.
///
/// Positions are stored as `i32` so run expansion past the edge of the `i16`
/// header range stays exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub material: MaterialId,
    pub corners: [u8; 8],
    /// Faces whose corners are all non-indented. Derived from `corners`.
    pub flat: FaceMask,
    /// Faces fully covered by a neighbor. Only ever grows.
    pub hidden: FaceMask,
}

impl Block {
    /// Builds a block and classifies its flat faces; nothing is hidden yet.
    pub fn new(x: i32, y: i32, z: i32, material: MaterialId, corners: [u8; 8]) -> Self {
        Self {
            x,
            y,
            z,
            material,
            corners,
            flat: flat_faces(&corners),
            hidden: FaceMask::NONE,
        }
    }

    #[inline]
    pub fn position(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    /// Faces that still need geometry.
    #[inline]
    pub fn visible(&self) -> FaceMask {
        FaceMask(!self.hidden.0 & FaceMask::ALL.0)
    }
}
