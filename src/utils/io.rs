use crate::types::ByteOrder;
use std::io::{Read, Result, Write};

/// Read i32 with specified byte order
pub fn read_i32<R: Read>(reader: &mut R, order: ByteOrder) -> Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(match order {
        ByteOrder::LE => i32::from_le_bytes(buf),
        ByteOrder::BE => i32::from_be_bytes(buf),
    })
}

/// Read f32 with specified byte order
pub fn read_f32<R: Read>(reader: &mut R, order: ByteOrder) -> Result<f32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(match order {
        ByteOrder::LE => f32::from_le_bytes(buf),
        ByteOrder::BE => f32::from_be_bytes(buf),
    })
}

/// Read f64 with specified byte order
pub fn read_f64<R: Read>(reader: &mut R, order: ByteOrder) -> Result<f64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(match order {
        ByteOrder::LE => f64::from_le_bytes(buf),
        ByteOrder::BE => f64::from_be_bytes(buf),
    })
}

/// Write i32 with specified byte order
pub fn write_i32<W: Write>(writer: &mut W, value: i32, order: ByteOrder) -> Result<()> {
    let buf = match order {
        ByteOrder::LE => value.to_le_bytes(),
        ByteOrder::BE => value.to_be_bytes(),
    };
    writer.write_all(&buf)
}

/// Write f32 with specified byte order
pub fn write_f32<W: Write>(writer: &mut W, value: f32, order: ByteOrder) -> Result<()> {
    let buf = match order {
        ByteOrder::LE => value.to_le_bytes(),
        ByteOrder::BE => value.to_be_bytes(),
    };
    writer.write_all(&buf)
}

/// Write f64 with specified byte order
pub fn write_f64<W: Write>(writer: &mut W, value: f64, order: ByteOrder) -> Result<()> {
    let buf = match order {
        ByteOrder::LE => value.to_le_bytes(),
        ByteOrder::BE => value.to_be_bytes(),
    };
    writer.write_all(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_i32_le() {
        let data = vec![0x78, 0x56, 0x34, 0x12];
        let mut cursor = Cursor::new(data);
        assert_eq!(read_i32(&mut cursor, ByteOrder::LE).unwrap(), 0x12345678);
    }

    #[test]
    fn test_read_i32_be() {
        let data = vec![0x12, 0x34, 0x56, 0x78];
        let mut cursor = Cursor::new(data);
        assert_eq!(read_i32(&mut cursor, ByteOrder::BE).unwrap(), 0x12345678);
    }

    #[test]
    fn test_read_f32_le() {
        let value = std::f32::consts::PI;
        let bytes = value.to_le_bytes();
        let mut cursor = Cursor::new(bytes);
        assert_eq!(read_f32(&mut cursor, ByteOrder::LE).unwrap(), value);
    }

    #[test]
    fn test_read_f32_be() {
        let value = std::f32::consts::PI;
        let bytes = value.to_be_bytes();
        let mut cursor = Cursor::new(bytes);
        assert_eq!(read_f32(&mut cursor, ByteOrder::BE).unwrap(), value);
    }

    #[test]
    fn test_read_f64_le() {
        let value = std::f64::consts::E;
        let bytes = value.to_le_bytes();
        let mut cursor = Cursor::new(bytes);
        assert_eq!(read_f64(&mut cursor, ByteOrder::LE).unwrap(), value);
    }

    #[test]
    fn test_read_f64_be() {
        let value = std::f64::consts::E;
        let bytes = value.to_be_bytes();
        let mut cursor = Cursor::new(bytes);
        assert_eq!(read_f64(&mut cursor, ByteOrder::BE).unwrap(), value);
    }

    #[test]
    fn test_write_i32_le() {
        let mut buf = Vec::new();
        write_i32(&mut buf, 0x12345678, ByteOrder::LE).unwrap();
        assert_eq!(buf, vec![0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_write_i32_be() {
        let mut buf = Vec::new();
        write_i32(&mut buf, 0x12345678, ByteOrder::BE).unwrap();
        assert_eq!(buf, vec![0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_write_f32_le() {
        let value = std::f32::consts::PI;
        let mut buf = Vec::new();
        write_f32(&mut buf, value, ByteOrder::LE).unwrap();
        assert_eq!(buf, value.to_le_bytes());
    }

    #[test]
    fn test_write_f64_be() {
        let value = -1234.5;
        let mut buf = Vec::new();
        write_f64(&mut buf, value, ByteOrder::BE).unwrap();
        assert_eq!(buf, value.to_be_bytes());
    }

    #[test]
    fn test_f64_round_trip_native() {
        let value = 0.123456789;
        let mut buf = Vec::new();
        write_f64(&mut buf, value, ByteOrder::native()).unwrap();
        let mut cursor = Cursor::new(buf);
        assert_eq!(read_f64(&mut cursor, ByteOrder::native()).unwrap(), value);
    }
}
