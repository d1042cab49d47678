// crates/stfeat-core/src/codec.rs
//
// Little-endian readers for notification payloads.
// Callers length-check before reading; an out-of-range offset panics.

#[inline]
pub fn read_i16_le(bytes: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

#[inline]
pub fn read_f32_le(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_signed_int16() {
        assert_eq!(read_i16_le(&[0x50, 0x46], 0), 18000);
        assert_eq!(read_i16_le(&[0xAA, 0xFF, 0xFF], 1), -1);
        assert_eq!(read_i16_le(&[0x00, 0x80], 0), i16::MIN);
    }

    #[test]
    fn reads_ieee754_single() {
        let mut b = vec![0xEE];
        b.extend_from_slice(&1.5f32.to_le_bytes());
        assert_eq!(read_f32_le(&b, 1), 1.5);
        assert_eq!(read_f32_le(&[0, 0, 0x80, 0x3F], 0), 1.0);
    }
}
