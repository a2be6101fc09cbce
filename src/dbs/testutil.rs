//! Сборка синтетических контейнеров mra.dbs для тестов.

use byteorder::{ByteOrder, LittleEndian};

use super::buffer::MraBuffer;
use super::history::{LAST_EMAIL_OFFSET, MRAHISTORY_MARKER, MRAHISTORY_OFFSET, MSG_HEAD_PAIR_OFFSET};
use super::message::MessageHeader;
use super::offset_table::OFFSETS_TABLE_LOC_OFFSET;
use super::strings::encode_terminated;

/// Минимальный контейнер: заголовок файла + таблица смещений + записи.
pub struct TestContainer {
    pub data: Vec<u8>,
    table_offset: usize,
}

impl TestContainer {
    pub fn new(max_id: u32) -> Self {
        let table_offset = 0x20;
        let data_start = table_offset + (max_id as usize + 1) * 4;
        let mut data = vec![0u8; data_start];
        LittleEndian::write_u32(
            &mut data[OFFSETS_TABLE_LOC_OFFSET..OFFSETS_TABLE_LOC_OFFSET + 4],
            table_offset as u32,
        );
        Self { data, table_offset }
    }

    /// Дописывает запись в конец арены и вносит её смещение в таблицу.
    pub fn put_record(&mut self, id: u32, bytes: &[u8]) -> usize {
        let offset = self.data.len();
        self.data.extend_from_slice(bytes);
        let entry = self.table_offset + id as usize * 4;
        LittleEndian::write_u32(&mut self.data[entry..entry + 4], offset as u32);
        offset
    }

    pub fn buffer(self) -> MraBuffer {
        MraBuffer::new(self.data)
    }
}

/// Якорная запись (id = 1): id первого корреспондента по смещению 0x2C.
pub fn anchor_record(first_correspondent: u32) -> Vec<u8> {
    let mut rec = vec![0u8; LAST_EMAIL_OFFSET + 4];
    LittleEndian::write_u32(
        &mut rec[LAST_EMAIL_OFFSET..LAST_EMAIL_OFFSET + 4],
        first_correspondent,
    );
    rec
}

/// Запись корреспондента: IdPair по +4, сигнатура по +4+0x190, имя следом.
pub fn correspondent_record(next_id: u32, name: &str, message_head_id: u32, valid_marker: bool) -> Vec<u8> {
    let mut rec = vec![0u8; 4 + MRAHISTORY_OFFSET + MRAHISTORY_MARKER.len()];
    LittleEndian::write_u32(&mut rec[8..12], next_id); // IdPair.id2
    LittleEndian::write_u32(
        &mut rec[4 + MSG_HEAD_PAIR_OFFSET..4 + MSG_HEAD_PAIR_OFFSET + 4],
        message_head_id,
    );
    if valid_marker {
        rec[4 + MRAHISTORY_OFFSET..].copy_from_slice(&MRAHISTORY_MARKER);
    }
    rec.extend_from_slice(&encode_terminated(name));
    rec
}

/// Запись сообщения: 56-байтный заголовок, ник, текст.
/// nickname_declared_len позволяет объявить длину ника больше фактической.
pub fn message_record(
    prev_id: u32,
    msg_type: u32,
    magic: u32,
    nickname: &str,
    nickname_declared_len: Option<u32>,
    text_bytes: &[u8],
) -> Vec<u8> {
    let nick = encode_terminated(nickname);
    let nick_units = nickname_declared_len.unwrap_or((nick.len() / 2) as u32);
    let mut rec = vec![0u8; MessageHeader::SIZE];
    LittleEndian::write_u32(&mut rec[4..8], prev_id);
    LittleEndian::write_u64(&mut rec[16..24], 126_444_736_000_000_000);
    LittleEndian::write_u32(&mut rec[24..28], msg_type);
    rec[28] = 1;
    LittleEndian::write_u32(&mut rec[32..36], nick_units);
    LittleEndian::write_u32(&mut rec[36..40], magic);
    let mut body = nick;
    body.resize(nick_units as usize * 2, 0);
    rec.extend_from_slice(&body);
    rec.extend_from_slice(text_bytes);
    rec
}
