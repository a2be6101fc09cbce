use crate::dbs::error::DbsError;
use crate::dbs::history::CorrespondentScanner;
use crate::dbs::message::MessageScanner;

use super::{compile_filter, load_container};

pub fn run(path: &str, filter: Option<&str>) -> Result<(), DbsError> {
    println!("[*] Запуск Stats: {}", path);

    let filter = compile_filter(filter);
    let (buffer, table) = load_container(path)?;

    let scan = CorrespondentScanner::new(&buffer, &table).scan()?;
    let scanner = MessageScanner::new(&buffer, &table);
    let mut messages_total: u64 = 0;

    for corr in scan
        .correspondents
        .iter()
        .filter(|c| filter.as_ref().map_or(true, |f| f.matches(&c.name)))
    {
        match scanner.scan(corr.message_head_id) {
            Ok(messages) => {
                println!("{:>8}  {}", messages.len(), corr.name);
                messages_total += messages.len() as u64;
            }
            Err(e) => {
                println!("{:>8}  {} (цепочка повреждена: {})", "-", corr.name, e);
            }
        }
    }

    println!("[+] Корреспондентов: {}, сообщений: {}", scan.correspondents.len(), messages_total);
    Ok(())
}
