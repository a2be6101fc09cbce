use std::fs::File;
use std::io::BufWriter;

use crate::dbs::error::DbsError;
use crate::dbs::history::CorrespondentScanner;
use crate::dbs::message::MessageScanner;
use crate::models::{HistoryMeta, MessageRow};
use crate::output::JsonlWriter;

use super::{compile_filter, load_container};

fn meta_path_for_export(out_json: &str) -> String {
    format!("{}.meta.json", out_json)
}

pub fn run(path: &str, out_json: &str, filter: Option<&str>, verbose: bool) -> Result<(), DbsError> {
    println!("[*] Запуск Export: {} -> {}", path, out_json);

    let filter = compile_filter(filter);
    let (buffer, table) = load_container(path)?;

    let scan = CorrespondentScanner::new(&buffer, &table).scan()?;
    println!("[*] Найдено корреспондентов: {}", scan.correspondents.len());

    let mut writer = JsonlWriter::new(BufWriter::new(File::create(out_json)?));
    let scanner = MessageScanner::new(&buffer, &table);
    let mut broken_chains: u64 = 0;

    for corr in scan
        .correspondents
        .iter()
        .filter(|c| filter.as_ref().map_or(true, |f| f.matches(&c.name)))
    {
        let messages = match scanner.scan(corr.message_head_id) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("[!] Цепочка сообщений '{}' повреждена: {}", corr.name, e);
                broken_chains += 1;
                continue;
            }
        };
        if verbose {
            println!("[*] {}: {} сообщений", corr.name, messages.len());
        }
        for msg in &messages {
            writer.write(&MessageRow::from_record(&corr.name, msg, path))?;
        }
    }
    writer.flush()?;

    let meta = HistoryMeta {
        file_size: buffer.len() as u64,
        offset_table_offset: table.base() as u64,
        correspondents: scan.correspondents.len() as u64,
        records_examined: scan.records_examined,
        records_skipped: scan.records_skipped,
        messages_total: writer.rows_written(),
        broken_chains,
        source: path.to_string(),
    };
    serde_json::to_writer_pretty(File::create(meta_path_for_export(out_json))?, &meta)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if broken_chains > 0 {
        eprintln!("[!] Повреждённых цепочек: {}", broken_chains);
    }
    println!("[+] Выгружено сообщений: {}", writer.rows_written());
    Ok(())
}
