//! Binary model reader: byte stream primitives and the block decoder.
#![forbid(unsafe_code)]

pub mod decode;
pub mod error;
pub mod reader;

pub use decode::decode_blocks;
pub use error::DecodeError;
pub use reader::ByteReader;
