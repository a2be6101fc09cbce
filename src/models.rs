use serde::{Deserialize, Serialize};

use crate::dbs::message::MessageRecord;
use crate::dbs::utils::filetime_to_datetime;

/// Одна строка JSONL-экспорта: одно сообщение.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageRow {
    pub correspondent: String,
    pub record_id: u32,
    pub author: String,
    pub text: String,

    /// Сырой FILETIME из заголовка, как лежит в файле.
    pub time_filetime: u64,
    /// Та же метка в RFC3339 - чисто для удобства чтения выгрузки.
    pub time_utc: String,

    pub message_type: u32,
    pub incoming: bool,

    pub prev_id: u32,
    pub next_id: u32,
    pub record_size: u32,
    pub nickname_length: u32,
    pub message_length: u32,
    pub size_lps_rtf: u32,

    pub source_file: String,
}

impl MessageRow {
    pub fn from_record(correspondent: &str, msg: &MessageRecord, source_file: &str) -> Self {
        Self {
            correspondent: correspondent.to_string(),
            record_id: msg.record_id,
            author: msg.author.clone(),
            text: msg.text.clone(),
            time_filetime: msg.header.time,
            time_utc: filetime_to_datetime(msg.header.time).to_rfc3339(),
            message_type: msg.header.msg_type,
            incoming: msg.header.is_incoming(),
            prev_id: msg.header.prev_id,
            next_id: msg.header.next_id,
            record_size: msg.header.size,
            nickname_length: msg.header.nickname_length,
            message_length: msg.header.message_length,
            size_lps_rtf: msg.header.size_lps_rtf,
            source_file: source_file.to_string(),
        }
    }
}

/// Метаданные контейнера, пишутся рядом с выгрузкой (<out>.meta.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMeta {
    pub file_size: u64,
    pub offset_table_offset: u64,
    pub correspondents: u64,
    pub records_examined: u64,
    pub records_skipped: u64,
    pub messages_total: u64,
    pub broken_chains: u64,
    pub source: String,
}
