use crate::error::MapError;

/// A cursor over the MAP bytes in memory. Every read is little-endian and
/// moves the cursor forward by exactly the width of the field. A read that
/// can't be satisfied leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct MapReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> MapReader<'a> {
    pub fn new(data: &'a [u8]) -> MapReader<'a> {
        MapReader { data, offset: 0 }
    }

    /// Current byte offset from the start of the file
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left after the cursor
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], MapError> {
        if self.remaining() < N {
            return Err(MapError::TruncatedInput {
                offset: self.offset,
                needed: N,
                available: self.remaining(),
            });
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.offset..self.offset + N]);
        self.offset += N;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, MapError> {
        let [b] = self.take::<1>()?;
        Ok(b)
    }

    pub fn read_i8(&mut self) -> Result<i8, MapError> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, MapError> {
        let b = self.take::<2>()?;
        Ok((b[1] as u16) << 8 | (b[0] as u16))
    }

    pub fn read_i16(&mut self) -> Result<i16, MapError> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32, MapError> {
        let b = self.take::<4>()?;
        Ok((b[3] as u32) << 24 | (b[2] as u32) << 16 | (b[1] as u32) << 8 | (b[0] as u32))
    }

    pub fn read_i32(&mut self) -> Result<i32, MapError> {
        Ok(self.read_u32()? as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::MapReader;
    use crate::error::MapError;

    #[test]
    fn read_two_bytes() {
        let data = [0x34, 0x12, 0xff, 0xff];
        let mut reader = MapReader::new(&data);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_i16().unwrap(), -1);
        assert_eq!(reader.position(), 4);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn read_four_bytes() {
        let data = [0x78, 0x56, 0x34, 0x12, 0xfe, 0xff, 0xff, 0xff];
        let mut reader = MapReader::new(&data);
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(reader.read_i32().unwrap(), -2);
    }

    #[test]
    fn read_single_bytes() {
        let data = [0x80, 0x80];
        let mut reader = MapReader::new(&data);
        assert_eq!(reader.read_u8().unwrap(), 128);
        assert_eq!(reader.read_i8().unwrap(), -128);
    }

    #[test]
    fn short_read_does_not_move_cursor() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = MapReader::new(&data);
        reader.read_u8().unwrap();

        let err = reader.read_u32().unwrap_err();
        assert!(matches!(
            err,
            MapError::TruncatedInput {
                offset: 1,
                needed: 4,
                available: 2
            }
        ));
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u16().unwrap(), 0x0302);
    }
}
