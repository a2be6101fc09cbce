use std::collections::HashSet;

use super::buffer::MraBuffer;
use super::error::DbsError;
use super::offset_table::OffsetTable;
use super::strings;

/// "mrahistory_" в UTF-16 (LE) - сигнатура записи корреспондента.
pub const MRAHISTORY_MARKER: [u8; 22] = [
    0x6D, 0x00, 0x72, 0x00, 0x61, 0x00, 0x68, 0x00, 0x69, 0x00, 0x73, 0x00, 0x74, 0x00, 0x6F,
    0x00, 0x72, 0x00, 0x79, 0x00, 0x5F, 0x00,
];

/// Запись id = 1 зарезервирована: по её смещению 0x2C лежит id последнего
/// изменявшегося корреспондента - точка входа в цепочку.
pub const LAST_EMAIL_OFFSET: usize = 0x2C;
/// Смещение сигнатуры относительно IdPair записи.
pub const MRAHISTORY_OFFSET: usize = 0x190;
/// Смещение IdPair с головой цепочки сообщений относительно IdPair записи.
pub const MSG_HEAD_PAIR_OFFSET: usize = 0x24;

#[derive(Debug, Clone)]
pub struct Correspondent {
    pub record_id: u32,
    pub name: String,
    /// id самого свежего сообщения; 0 - сообщений нет.
    pub message_head_id: u32,
}

/// Результат обхода цепочки корреспондентов.
///
/// Порядок - порядок цепочки (последний изменявшийся первым), НЕ сортировка
/// по имени или времени. Счётчики нужны отладочному выводу и тестам:
/// в арене полно записей других типов, пропуск - штатная ситуация.
#[derive(Debug)]
pub struct HistoryScan {
    pub correspondents: Vec<Correspondent>,
    pub records_examined: u64,
    pub records_skipped: u64,
}

/// Обходит двусвязную цепочку корреспондентов.
pub struct CorrespondentScanner<'a> {
    buffer: &'a MraBuffer,
    table: &'a OffsetTable,
}

impl<'a> CorrespondentScanner<'a> {
    pub fn new(buffer: &'a MraBuffer, table: &'a OffsetTable) -> Self {
        Self { buffer, table }
    }

    /// Полный обход от якорной записи.
    ///
    /// Любая структурная ошибка здесь фатальна для всего скана: дальше
    /// точки повреждения цепочке доверять нельзя.
    pub fn scan(&self) -> Result<HistoryScan, DbsError> {
        let anchor = self.table.resolve(self.buffer, 1)?;
        let mut cursor = self.buffer.read_u32(anchor + LAST_EMAIL_OFFSET)?;

        let mut out = HistoryScan {
            correspondents: Vec::new(),
            records_examined: 0,
            records_skipped: 0,
        };
        let mut seen = HashSet::new();

        while cursor != 0 {
            if !seen.insert(cursor) {
                return Err(DbsError::ChainCycle { record_id: cursor });
            }
            out.records_examined += 1;

            let offset = self.table.resolve(self.buffer, cursor)?;
            // IdPair записи: id2 - следующий корреспондент в цепочке,
            // переход по нему выполняется независимо от сигнатуры
            let pair_offset = offset + 4;
            let next_id = self.buffer.read_u32(pair_offset + 4)?;

            let marker = self.buffer.slice(pair_offset + MRAHISTORY_OFFSET, MRAHISTORY_MARKER.len())?;
            if marker == MRAHISTORY_MARKER {
                let name_offset = pair_offset + MRAHISTORY_OFFSET + MRAHISTORY_MARKER.len();
                let (name, _) = strings::decode_terminated(self.buffer, name_offset)?;
                let message_head_id = self.buffer.read_u32(pair_offset + MSG_HEAD_PAIR_OFFSET)?;
                out.correspondents.push(Correspondent {
                    record_id: cursor,
                    name,
                    message_head_id,
                });
            } else {
                // не корреспондент - в арене это норма
                out.records_skipped += 1;
            }

            cursor = next_id;
        }

        Ok(out)
    }
}
