use cubist_geom::{Vec2, Vec3};

/// The six faces of a block, in mesh emission order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Top = 0,
    Bottom = 1,
    Front = 2,
    Back = 3,
    Left = 4,
    Right = 5,
}

/// Static per-face data shared by the classifier, the visibility resolver and the
/// geometry builder. Corner indices refer to the 8 corner codes of a block.
struct FaceInfo {
    /// Corners in emission/winding order.
    winding: [usize; 4],
    /// Corners that must all be non-indented for the face to count as flat.
    flat_corners: [usize; 4],
    opposite: Face,
    delta: (i32, i32, i32),
    normal_axis: usize,
    border: f32,
    /// In-plane axes used for both UV projection and neighbor matching.
    plane_axes: (usize, usize),
    negate_u: bool,
    uv_offset: (f32, f32),
    /// Winding slot of the opposite face that coincides with each of ours.
    mirror: [usize; 4],
}

static FACE_TABLE: [FaceInfo; 6] = [
    FaceInfo {
        winding: [0, 1, 2, 3],
        flat_corners: [0, 1, 2, 3],
        opposite: Face::Bottom,
        delta: (0, 1, 0),
        normal_axis: 1,
        border: 0.5,
        plane_axes: (0, 2),
        negate_u: false,
        uv_offset: (0.5, 0.5),
        mirror: [3, 2, 1, 0],
    },
    FaceInfo {
        winding: [4, 5, 6, 7],
        flat_corners: [4, 5, 6, 7],
        opposite: Face::Top,
        delta: (0, -1, 0),
        normal_axis: 1,
        border: -0.5,
        plane_axes: (0, 2),
        negate_u: true,
        uv_offset: (-0.5, 0.5),
        mirror: [3, 2, 1, 0],
    },
    FaceInfo {
        winding: [7, 6, 1, 0],
        flat_corners: [0, 1, 6, 7],
        opposite: Face::Back,
        delta: (0, 0, -1),
        normal_axis: 2,
        border: -0.5,
        plane_axes: (0, 1),
        negate_u: false,
        uv_offset: (0.5, 0.5),
        mirror: [1, 0, 3, 2],
    },
    FaceInfo {
        winding: [5, 4, 3, 2],
        flat_corners: [2, 3, 4, 5],
        opposite: Face::Front,
        delta: (0, 0, 1),
        normal_axis: 2,
        border: 0.5,
        plane_axes: (0, 1),
        negate_u: true,
        uv_offset: (-0.5, 0.5),
        mirror: [1, 0, 3, 2],
    },
    FaceInfo {
        winding: [4, 7, 0, 3],
        flat_corners: [0, 3, 4, 7],
        opposite: Face::Right,
        delta: (-1, 0, 0),
        normal_axis: 0,
        border: -0.5,
        plane_axes: (2, 1),
        negate_u: true,
        uv_offset: (-0.5, 0.5),
        mirror: [1, 0, 3, 2],
    },
    FaceInfo {
        winding: [6, 5, 2, 1],
        flat_corners: [1, 2, 5, 6],
        opposite: Face::Left,
        delta: (1, 0, 0),
        normal_axis: 0,
        border: 0.5,
        plane_axes: (2, 1),
        negate_u: false,
        uv_offset: (0.5, 0.5),
        mirror: [1, 0, 3, 2],
    },
];

impl Face {
    /// All faces in emission order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    #[inline]
    fn info(self) -> &'static FaceInfo {
        &FACE_TABLE[self as usize]
    }

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index back into a `Face`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    /// Bit of this face inside a `FaceMask`.
    #[inline]
    pub fn flag(self) -> u8 {
        1 << self.index()
    }

    /// Maps a single-bit flag back to its face; masks with zero or several bits yield `None`.
    #[inline]
    pub fn from_flag(flag: u8) -> Option<Face> {
        if flag.count_ones() != 1 {
            return None;
        }
        Face::from_index(flag.trailing_zeros() as usize)
    }

    #[inline]
    pub fn opposite(self) -> Face {
        self.info().opposite
    }

    /// Integer lattice step `(dx,dy,dz)` towards the neighbor sharing this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        self.info().delta
    }

    /// Corner indices of this face in winding order.
    #[inline]
    pub fn winding(self) -> [usize; 4] {
        self.info().winding
    }

    /// Corner indices whose indentation decides whether this face is flat.
    #[inline]
    pub fn flat_corners(self) -> [usize; 4] {
        self.info().flat_corners
    }

    /// `(axis, value)` of the outer boundary plane this face lies on when undeformed.
    #[inline]
    pub fn border_plane(self) -> (usize, f32) {
        let info = self.info();
        (info.normal_axis, info.border)
    }

    #[inline]
    pub fn plane_axes(self) -> (usize, usize) {
        self.info().plane_axes
    }

    /// For winding slot `i` of this face, the slot of the opposite face on a
    /// touching neighbor that must occupy the same point.
    #[inline]
    pub fn mirror_slot(self, i: usize) -> usize {
        self.info().mirror[i]
    }

    /// Projects a local corner position onto this face's texture plane, before
    /// offset and scale are applied.
    #[inline]
    pub fn project(self, p: Vec3) -> Vec2 {
        let info = self.info();
        let (u_axis, v_axis) = info.plane_axes;
        let u = p.axis(u_axis);
        Vec2::new(if info.negate_u { -u } else { u }, p.axis(v_axis))
    }

    #[inline]
    pub fn uv_offset(self) -> Vec2 {
        let (u, v) = self.info().uv_offset;
        Vec2::new(u, v)
    }
}

/// Six-bit set of faces, bit order Top=1, Bottom=2, Front=4, Back=8, Left=16, Right=32.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FaceMask(pub u8);

impl FaceMask {
    pub const NONE: FaceMask = FaceMask(0);
    pub const ALL: FaceMask = FaceMask(0b11_1111);

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn contains(self, face: Face) -> bool {
        self.0 & face.flag() != 0
    }

    #[inline]
    pub fn insert(&mut self, face: Face) {
        self.0 |= face.flag();
    }

    /// Number of faces in the set.
    #[inline]
    pub fn len(self) -> usize {
        (self.0 & Self::ALL.0).count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Faces in the set, in emission order.
    pub fn iter(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl core::ops::BitOr for FaceMask {
    type Output = FaceMask;
    #[inline]
    fn bitor(self, rhs: FaceMask) -> FaceMask {
        FaceMask(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for FaceMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: FaceMask) {
        self.0 |= rhs.0;
    }
}

impl From<Face> for FaceMask {
    #[inline]
    fn from(face: Face) -> Self {
        FaceMask(face.flag())
    }
}
