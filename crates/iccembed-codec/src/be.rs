//! Big-endian integer fields.
//!
//! Every length field in both JFIF and PNG is stored big-endian. These helpers are the only place
//! where host byte order is compensated for.

#[inline]
pub fn encode_be16(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

#[inline]
pub fn decode_be16(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

#[inline]
pub fn encode_be32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

#[inline]
pub fn decode_be32(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

/// Reads a big-endian `u16` at `offset`, if the slice is long enough.
#[inline]
pub fn read_be16(buf: &[u8], offset: usize) -> Option<u16> {
    let &[b0, b1, ..] = buf.get(offset..)? else {
        return None;
    };
    Some(decode_be16([b0, b1]))
}

/// Reads a big-endian `u32` at `offset`, if the slice is long enough.
#[inline]
pub fn read_be32(buf: &[u8], offset: usize) -> Option<u32> {
    let &[b0, b1, b2, b3, ..] = buf.get(offset..)? else {
        return None;
    };
    Some(decode_be32([b0, b1, b2, b3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_layout() {
        assert_eq!(encode_be16(0x1234), [0x12, 0x34]);
        assert_eq!(encode_be32(0x0000_0ec4), [0, 0, 0x0e, 0xc4]);
        assert_eq!(decode_be16([0xff, 0xe2]), 0xffe2);
        assert_eq!(decode_be32([0x12, 0x34, 0x56, 0x78]), 0x1234_5678);
    }

    #[test]
    fn read_at_offset() {
        let buf = [0xaa, 0x00, 0x10, 0x00, 0x00, 0x00];
        assert_eq!(read_be16(&buf, 1), Some(0x0010));
        assert_eq!(read_be32(&buf, 2), Some(0x1000_0000));
        assert_eq!(read_be32(&buf, 3), None);
        assert_eq!(read_be16(&buf, 5), None);
        assert_eq!(read_be16(&buf, 10), None);
    }
}
