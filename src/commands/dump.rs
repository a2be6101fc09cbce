use crate::dbs::error::DbsError;
use crate::dbs::history::CorrespondentScanner;
use crate::dbs::message::MessageScanner;

use super::{compile_filter, load_container};

pub fn run(path: &str, filter: Option<&str>, verbose: bool) -> Result<(), DbsError> {
    println!("[*] Запуск Dump: {}", path);

    let filter = compile_filter(filter);
    let (buffer, table) = load_container(path)?;
    if verbose {
        println!("[*] Размер файла: {} байт", buffer.len());
        println!("[*] Таблица смещений по смещению 0x{:08x}", table.base());
    }

    // повреждение цепочки корреспондентов фатально для всего запуска
    let scan = CorrespondentScanner::new(&buffer, &table).scan()?;
    if verbose {
        println!(
            "[*] Пройдено записей цепочки: {}, пропущено не-корреспондентов: {}",
            scan.records_examined, scan.records_skipped
        );
    }
    println!("[*] Найдено корреспондентов: {}", scan.correspondents.len());

    let scanner = MessageScanner::new(&buffer, &table);
    let mut messages_total: u64 = 0;
    let mut broken_chains: u64 = 0;

    for corr in scan
        .correspondents
        .iter()
        .filter(|c| filter.as_ref().map_or(true, |f| f.matches(&c.name)))
    {
        println!("=== {}", corr.name);
        if verbose {
            println!("[*] Запись 0x{:08x}, голова цепочки 0x{:08x}", corr.record_id, corr.message_head_id);
        }

        // битая цепочка сообщений роняет только этот диалог
        let messages = match scanner.scan(corr.message_head_id) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("[!] Цепочка сообщений '{}' повреждена: {}", corr.name, e);
                broken_chains += 1;
                continue;
            }
        };

        for msg in &messages {
            println!("{}", msg.author);
            println!("{}\n", msg.text);
        }
        println!("[*] Сообщений в диалоге: {}\n", messages.len());
        messages_total += messages.len() as u64;
    }

    if broken_chains > 0 {
        eprintln!("[!] Повреждённых цепочек: {}", broken_chains);
    }
    println!("[+] Итого сообщений: {}", messages_total);
    Ok(())
}
