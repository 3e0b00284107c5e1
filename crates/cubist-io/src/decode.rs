//! Block decoder for the run-length compressed model format.
//!
//! ```text
//! i32        block count
//! per block:
//!   i16 x, i16 y, i16 z
//!   u8         flags       bit 0: identity corners, bits 2..8: run length
//!   [u8; 8]    corners     only when bit 0 is clear
//!   u8         material
//! ```
//!
//! A header with run length `n` stands for `n + 1` blocks at consecutive x.

use cubist_blocks::{Block, IDENTITY_CORNERS, MaterialId};

use crate::error::DecodeError;
use crate::reader::ByteReader;

const FLAG_IDENTITY_CORNERS: u8 = 0b01;
const RUN_LENGTH_SHIFT: u8 = 2;
/// Smallest possible header: position, flags and material.
const MIN_HEADER_LEN: usize = 3 * 2 + 1 + 1;

/// One header as stored in the stream, before run expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Header {
    x: i16,
    y: i16,
    z: i16,
    corners: [u8; 8],
    material: MaterialId,
    run_length: u8,
}

fn read_header(r: &mut ByteReader<'_>) -> Result<Header, DecodeError> {
    let x = r.read_i16()?;
    let y = r.read_i16()?;
    let z = r.read_i16()?;
    let flags = r.read_u8()?;
    let corners = if flags & FLAG_IDENTITY_CORNERS == 0 {
        r.read_array::<8>()?
    } else {
        IDENTITY_CORNERS
    };
    let material = MaterialId(r.read_u8()?);
    Ok(Header {
        x,
        y,
        z,
        corners,
        material,
        run_length: flags >> RUN_LENGTH_SHIFT,
    })
}

/// Decodes every block in `data`, expanding runs.
///
/// Any truncated field fails the whole decode; no partial list is returned. A
/// negative block count decodes to an empty model.
pub fn decode_blocks(data: &[u8]) -> Result<Vec<Block>, DecodeError> {
    let mut r = ByteReader::new(data);
    let count = r.read_i32()?;
    let headers = usize::try_from(count).unwrap_or(0);
    let mut blocks = Vec::with_capacity(headers.min(r.remaining() / MIN_HEADER_LEN));
    for _ in 0..headers {
        let h = read_header(&mut r)?;
        for step in 0..=h.run_length {
            // Runs may step past i16::MAX; x is widened, never wrapped.
            let x = i32::from(h.x) + i32::from(step);
            blocks.push(Block::new(
                x,
                i32::from(h.y),
                i32::from(h.z),
                h.material,
                h.corners,
            ));
        }
    }
    if !r.is_at_end() {
        log::debug!(
            "model stream has {} trailing byte(s) after {} header(s)",
            r.remaining(),
            headers
        );
    }
    log::debug!("decoded {} block(s) from {} header(s)", blocks.len(), headers);
    Ok(blocks)
}
