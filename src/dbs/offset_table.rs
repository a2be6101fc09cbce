use super::buffer::MraBuffer;
use super::error::DbsError;

/// Смещение (абсолютное), по которому лежит u32 с позицией таблицы смещений.
pub const OFFSETS_TABLE_LOC_OFFSET: usize = 0x10;

/// Таблица соответствия id записи -> байтовое смещение в файле.
///
/// Сама таблица лежит внутри файла: её позиция записана по фиксированному
/// смещению 0x10. Длина таблицы нигде не закодирована, поэтому каждый
/// разрешённый offset обязан проверяться на границы буфера - только так
/// отлавливаются id вне диапазона.
pub struct OffsetTable {
    base: usize,
}

impl OffsetTable {
    pub fn locate(buffer: &MraBuffer) -> Result<Self, DbsError> {
        let base = buffer.read_u32(OFFSETS_TABLE_LOC_OFFSET)? as usize;
        Ok(Self { base })
    }

    pub fn base(&self) -> usize {
        self.base
    }

    /// Разрешает id записи в байтовое смещение.
    ///
    /// id = 0 - терминатор цепочек, записи с таким id не существует;
    /// обращение к нему - ошибка вызывающего.
    pub fn resolve(&self, buffer: &MraBuffer, id: u32) -> Result<usize, DbsError> {
        if id == 0 {
            return Err(DbsError::NullRecordId);
        }
        let entry = self
            .base
            .checked_add(id as usize * 4)
            .ok_or(DbsError::OutOfBounds {
                offset: self.base,
                size: id as usize * 4,
                file_size: buffer.len(),
            })?;
        let offset = buffer.read_u32(entry)? as usize;
        if offset >= buffer.len() {
            return Err(DbsError::OutOfBounds {
                offset,
                size: 0,
                file_size: buffer.len(),
            });
        }
        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{ByteOrder, LittleEndian};

    fn table_at(table_offset: u32, entries: &[u32], total: usize) -> MraBuffer {
        let mut data = vec![0u8; total];
        LittleEndian::write_u32(&mut data[OFFSETS_TABLE_LOC_OFFSET..OFFSETS_TABLE_LOC_OFFSET + 4], table_offset);
        for (i, e) in entries.iter().enumerate() {
            let at = table_offset as usize + i * 4;
            LittleEndian::write_u32(&mut data[at..at + 4], *e);
        }
        MraBuffer::new(data)
    }

    #[test]
    fn resolves_id_to_offset() {
        let buf = table_at(0x20, &[0, 0x40, 0x50], 0x100);
        let table = OffsetTable::locate(&buf).unwrap();
        assert_eq!(table.base(), 0x20);
        assert_eq!(table.resolve(&buf, 1).unwrap(), 0x40);
        assert_eq!(table.resolve(&buf, 2).unwrap(), 0x50);
    }

    #[test]
    fn id_zero_is_never_resolved() {
        let buf = table_at(0x20, &[0x40], 0x100);
        let table = OffsetTable::locate(&buf).unwrap();
        assert!(matches!(table.resolve(&buf, 0), Err(DbsError::NullRecordId)));
    }

    #[test]
    fn offset_beyond_file_is_out_of_bounds() {
        let buf = table_at(0x20, &[0, 0x4000], 0x100);
        let table = OffsetTable::locate(&buf).unwrap();
        assert!(matches!(
            table.resolve(&buf, 1),
            Err(DbsError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn id_outside_table_is_out_of_bounds() {
        let buf = table_at(0xF8, &[0], 0x100);
        let table = OffsetTable::locate(&buf).unwrap();
        // сама запись таблицы за концом файла
        assert!(matches!(
            table.resolve(&buf, 5),
            Err(DbsError::OutOfBounds { .. })
        ));
    }
}
