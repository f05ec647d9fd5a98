// ---------------------------------------------------------------------------
// bin_io – big-endian primitives shared by every record codec
// ---------------------------------------------------------------------------
//
// Integers are 4 bytes big-endian, booleans a single byte (0 = false, any
// other value = true). This matches the layout of Java's DataOutputStream,
// so streams written by older builds of the game stay readable.

use std::io::{self, Read, Write};

pub fn write_i32<W: Write + ?Sized>(out: &mut W, v: i32) -> io::Result<()> {
    out.write_all(&v.to_be_bytes())
}

pub fn write_u32<W: Write + ?Sized>(out: &mut W, v: u32) -> io::Result<()> {
    out.write_all(&v.to_be_bytes())
}

pub fn write_bool<W: Write + ?Sized>(out: &mut W, v: bool) -> io::Result<()> {
    out.write_all(&[u8::from(v)])
}

pub fn read_i32<R: Read + ?Sized>(input: &mut R) -> io::Result<i32> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(i32::from_be_bytes(buf))
}

pub fn read_u32<R: Read + ?Sized>(input: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

pub fn read_bool<R: Read + ?Sized>(input: &mut R) -> io::Result<bool> {
    let mut buf = [0u8; 1];
    input.read_exact(&mut buf)?;
    Ok(buf[0] != 0)
}

/// Shorthand for a malformed-stream error.
pub fn invalid_data(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i32_is_big_endian() {
        let mut out = Vec::new();
        write_i32(&mut out, 0x0102_0304).unwrap();
        write_i32(&mut out, -1).unwrap();
        assert_eq!(out, [1, 2, 3, 4, 0xFF, 0xFF, 0xFF, 0xFF]);

        let mut input = out.as_slice();
        assert_eq!(read_i32(&mut input).unwrap(), 0x0102_0304);
        assert_eq!(read_i32(&mut input).unwrap(), -1);
    }

    #[test]
    fn test_bool_nonzero_reads_true() {
        let mut input: &[u8] = &[0, 1, 7];
        assert!(!read_bool(&mut input).unwrap());
        assert!(read_bool(&mut input).unwrap());
        assert!(read_bool(&mut input).unwrap());
    }

    #[test]
    fn test_short_read_is_unexpected_eof() {
        let mut input: &[u8] = &[0, 0, 1];
        let err = read_u32(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
