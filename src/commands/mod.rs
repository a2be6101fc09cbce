pub mod dump;
pub mod export;
pub mod stats;

use std::fs;

use crate::dbs::buffer::MraBuffer;
use crate::dbs::error::DbsError;
use crate::dbs::offset_table::OffsetTable;
use crate::rules::filter::NameFilter;

/// Читает контейнер целиком и находит таблицу смещений.
pub fn load_container(path: &str) -> Result<(MraBuffer, OffsetTable), DbsError> {
    let buffer = MraBuffer::new(fs::read(path)?);
    let table = OffsetTable::locate(&buffer)?;
    Ok((buffer, table))
}

/// Компилирует фильтр имени; некорректный шаблон - ошибка пользователя,
/// а не контейнера, поэтому завершаемся сразу.
pub fn compile_filter(pattern: Option<&str>) -> Option<NameFilter> {
    pattern.map(|p| match NameFilter::parse(p) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("[!] Некорректный фильтр '{}': {}", p, e);
            std::process::exit(2);
        }
    })
}
