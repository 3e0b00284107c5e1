use crate::error::DecodeError;

/// Sequential big-endian reads over a borrowed byte buffer.
///
/// Every read is bounds-checked up front; a failed read leaves the cursor where it was.
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Accepts a buffer that may be missing, e.g. an unset input slot.
    pub fn new_opt(buf: Option<&'a [u8]>) -> Result<Self, DecodeError> {
        buf.map(Self::new)
            .ok_or(DecodeError::InvalidArgument("the buffer cannot be absent"))
    }

    /// Starts reading at `position` instead of the first byte.
    pub fn with_position(buf: &'a [u8], position: usize) -> Result<Self, DecodeError> {
        if position > buf.len() {
            return Err(DecodeError::InvalidArgument(
                "start position lies past the end of the buffer",
            ));
        }
        Ok(Self { buf, pos: position })
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    #[inline]
    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining() {
            return Err(DecodeError::EndOfStream {
                position: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    #[inline]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, DecodeError> {
        Ok(self.take(n)?.to_vec())
    }

    /// Fixed-size variant of `read_bytes` for callers that know the length statically.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        self.take_array()
    }

    pub fn read_i16(&mut self) -> Result<i16, DecodeError> {
        Ok(i16::from_be_bytes(self.take_array()?))
    }

    /// Big-endian 32-bit read; values at or above `0x8000_0000` come back negative.
    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_big_endian() {
        let data = [0x01, 0x02, 0xFF, 0xFE, 0x12, 0x34, 0x56, 0x78, 0xAB];
        let mut r = ByteReader::new(&data);
        assert_eq!(r.read_i16().unwrap(), 0x0102);
        assert_eq!(r.read_i16().unwrap(), -2);
        assert_eq!(r.read_i32().unwrap(), 0x1234_5678);
        assert_eq!(r.read_u8().unwrap(), 0xAB);
        assert!(r.is_at_end());
    }

    #[test]
    fn high_bit_int32_is_negative() {
        let mut r = ByteReader::new(&[0x80, 0x00, 0x00, 0x00]);
        assert_eq!(r.read_i32().unwrap(), i32::MIN);
        let mut r = ByteReader::new(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(r.read_i32().unwrap(), -1);
    }

    #[test]
    fn short_reads_fail_without_advancing() {
        let data = [0x00, 0x01, 0x02];
        let mut r = ByteReader::new(&data);
        assert_eq!(
            r.read_i32(),
            Err(DecodeError::EndOfStream {
                position: 0,
                needed: 4,
                remaining: 3
            })
        );
        assert_eq!(r.position(), 0);
        assert_eq!(r.read_bytes(3).unwrap(), vec![0, 1, 2]);
        assert!(matches!(r.read_u8(), Err(DecodeError::EndOfStream { .. })));
        assert!(matches!(r.read_i16(), Err(DecodeError::EndOfStream { .. })));
        assert_eq!(r.read_bytes(0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn read_bytes_rejects_overlong_counts() {
        let mut r = ByteReader::new(&[1, 2]);
        assert!(matches!(
            r.read_bytes(3),
            Err(DecodeError::EndOfStream { needed: 3, .. })
        ));
        assert_eq!(r.read_array::<2>().unwrap(), [1, 2]);
    }

    #[test]
    fn construction_arguments() {
        assert_eq!(
            ByteReader::new_opt(None).unwrap_err(),
            DecodeError::InvalidArgument("the buffer cannot be absent")
        );
        assert!(ByteReader::new_opt(Some(&[][..])).unwrap().is_at_end());

        let data = [9, 8, 7];
        let mut r = ByteReader::with_position(&data, 2).unwrap();
        assert_eq!(r.read_u8().unwrap(), 7);
        assert!(ByteReader::with_position(&data, 3).unwrap().is_at_end());
        assert!(matches!(
            ByteReader::with_position(&data, 4),
            Err(DecodeError::InvalidArgument(_))
        ));
    }
}
