//! Block records, face tables, and corner-indentation classification.
#![forbid(unsafe_code)]

pub mod corners;
pub mod face;
pub mod types;

pub use corners::{IDENTITY_CORNERS, corner_offset, corner_positions, flat_faces};
pub use face::{Face, FaceMask};
pub use types::{Block, MaterialId};
