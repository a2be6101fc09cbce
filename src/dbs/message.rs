use std::collections::HashSet;

use byteorder::{ByteOrder, LittleEndian};

use super::buffer::MraBuffer;
use super::error::DbsError;
use super::offset_table::OffsetTable;
use super::strings;

/// Магическое число записи сообщения.
pub const MESSAGE_MAGIC: u32 = 0x38;
/// Тип записи SMS.
pub const TYPE_SMS: u32 = 0x11;

/// Заголовок записи сообщения, повторяет раскладку внутри mra.dbs.
/// 56 байт, затем сразу ник автора (UTF-16LE с терминатором), затем
/// текст сообщения.
#[derive(Debug, Clone)]
pub struct MessageHeader {
    pub size: u32,
    pub prev_id: u32,
    pub next_id: u32,
    /// WinApi FILETIME: 100-нс интервалы с 1601-01-01 UTC, сырое значение.
    pub time: u64,
    pub msg_type: u32,
    pub flag_incoming: u8,
    /// В UTF-16 code unit'ах, не в байтах.
    pub nickname_length: u32,
    pub magic_number: u32,
    /// В UTF-16 code unit'ах, не в байтах.
    pub message_length: u32,
    /// Размер необязательного RTF-блока в байтах.
    pub size_lps_rtf: u32,
}

impl MessageHeader {
    pub const SIZE: usize = 56;

    pub fn read(buffer: &MraBuffer, offset: usize) -> Result<Self, DbsError> {
        let data = buffer.slice(offset, Self::SIZE)?;
        Ok(Self {
            size: LittleEndian::read_u32(&data[0..4]),
            prev_id: LittleEndian::read_u32(&data[4..8]),
            next_id: LittleEndian::read_u32(&data[8..12]),
            // 12..16 - неизвестное поле
            time: LittleEndian::read_u64(&data[16..24]),
            msg_type: LittleEndian::read_u32(&data[24..28]),
            flag_incoming: data[28],
            // 29..32 - выравнивание
            nickname_length: LittleEndian::read_u32(&data[32..36]),
            magic_number: LittleEndian::read_u32(&data[36..40]),
            message_length: LittleEndian::read_u32(&data[40..44]),
            // 44..48 - неизвестное поле
            size_lps_rtf: LittleEndian::read_u32(&data[48..52]),
            // 52..56 - неизвестное поле
        })
    }

    pub fn is_incoming(&self) -> bool {
        self.flag_incoming != 0
    }
}

#[derive(Debug, Clone)]
pub struct MessageRecord {
    pub record_id: u32,
    pub header: MessageHeader,
    pub author: String,
    pub text: String,
}

/// Обходит цепочку сообщений одного корреспондента.
///
/// Чистая функция от (буфер, таблица, id головы): состояния между
/// вызовами нет, обход детерминирован содержимым файла.
pub struct MessageScanner<'a> {
    buffer: &'a MraBuffer,
    table: &'a OffsetTable,
}

impl<'a> MessageScanner<'a> {
    pub fn new(buffer: &'a MraBuffer, table: &'a OffsetTable) -> Self {
        Self { buffer, table }
    }

    /// Собирает цепочку начиная с head_id (0 - сообщений нет).
    ///
    /// Порядок на выходе - порядок цепочки по prev_id: самое свежее
    /// сообщение первым. Никакой пересортировки по времени.
    pub fn scan(&self, head_id: u32) -> Result<Vec<MessageRecord>, DbsError> {
        let mut messages = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = head_id;

        while cursor != 0 {
            // id приходят из недоверенного файла: битая цепочка может
            // замкнуться, обход обязан это заметить
            if !seen.insert(cursor) {
                return Err(DbsError::ChainCycle { record_id: cursor });
            }

            let offset = self.table.resolve(self.buffer, cursor)?;
            let header = MessageHeader::read(self.buffer, offset)?;
            if header.magic_number != MESSAGE_MAGIC {
                return Err(DbsError::BadMagic {
                    record_id: cursor,
                    found: header.magic_number,
                });
            }

            let author_offset = offset + MessageHeader::SIZE;
            let (author, _) = strings::decode_terminated(self.buffer, author_offset)?;

            // Текст лежит через nickname_length unit'ов после начала ника:
            // объявленная длина ника может быть больше фактической.
            let mut text_offset = strings::skip_units(author_offset, header.nickname_length as usize)
                .ok_or(DbsError::OutOfBounds {
                    offset: author_offset,
                    size: header.nickname_length as usize * 2,
                    file_size: self.buffer.len(),
                })?;

            // TODO: ни разу не наблюдалось на реальных дампах - проверить
            // на живой SMS-записи, прежде чем полагаться на эту ветку.
            if self.buffer.read_u16(text_offset)? == 0 && header.msg_type == TYPE_SMS {
                text_offset += 3 * 2;
            }

            let (text, _) = strings::decode_terminated(self.buffer, text_offset)?;

            let prev_id = header.prev_id;
            messages.push(MessageRecord {
                record_id: cursor,
                header,
                author,
                text,
            });
            cursor = prev_id;
        }

        Ok(messages)
    }
}
