use byteorder::{ByteOrder, LittleEndian};

use super::error::DbsError;

/// Неизменяемый буфер со всем содержимым mra.dbs.
///
/// Единственная точка доступа к байтам файла: каждое чтение проверяет
/// границы ДО обращения, никакого частичного чтения или молчаливой
/// обрезки. Все числа в формате little-endian.
pub struct MraBuffer {
    data: Vec<u8>,
}

impl MraBuffer {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Срез [offset, offset + size). Проверка через checked_add:
    /// переполнение usize трактуется так же, как выход за границу.
    pub fn slice(&self, offset: usize, size: usize) -> Result<&[u8], DbsError> {
        let end = offset.checked_add(size).ok_or(DbsError::OutOfBounds {
            offset,
            size,
            file_size: self.data.len(),
        })?;
        if end > self.data.len() {
            return Err(DbsError::OutOfBounds {
                offset,
                size,
                file_size: self.data.len(),
            });
        }
        Ok(&self.data[offset..end])
    }

    pub fn read_u16(&self, offset: usize) -> Result<u16, DbsError> {
        Ok(LittleEndian::read_u16(self.slice(offset, 2)?))
    }

    pub fn read_u32(&self, offset: usize) -> Result<u32, DbsError> {
        Ok(LittleEndian::read_u32(self.slice(offset, 4)?))
    }

    pub fn read_u64(&self, offset: usize) -> Result<u64, DbsError> {
        Ok(LittleEndian::read_u64(self.slice(offset, 8)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_within_bounds() {
        let buf = MraBuffer::new(vec![0x78, 0x56, 0x34, 0x12, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(buf.read_u32(0).unwrap(), 0x1234_5678);
        assert_eq!(buf.read_u16(2).unwrap(), 0x1234);
        assert_eq!(buf.read_u64(0).unwrap(), 0xFFFF_FFFF_1234_5678);
    }

    #[test]
    fn read_past_end_is_error() {
        let buf = MraBuffer::new(vec![0u8; 4]);
        assert!(matches!(
            buf.read_u32(1),
            Err(DbsError::OutOfBounds { offset: 1, size: 4, file_size: 4 })
        ));
        assert!(buf.read_u64(0).is_err());
        assert!(buf.slice(4, 1).is_err());
        // на самой границе - пусто, но валидно
        assert_eq!(buf.slice(4, 0).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn offset_overflow_is_error() {
        let buf = MraBuffer::new(vec![0u8; 4]);
        assert!(buf.slice(usize::MAX, 8).is_err());
    }
}
