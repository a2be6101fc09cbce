use serde::Serialize;
use std::io::{self, Write};

/// Потоковая запись выгрузки в формате JSONL (JSON Lines).
/// - Одно сообщение - один JSON-объект
/// - Каждый объект заканчивается '\n'
/// - Нет массива, запятых и закрывающих скобок
pub struct JsonlWriter<W: Write> {
    inner: W,
    rows: u64,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, rows: 0 }
    }

    pub fn write<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.inner, value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.inner.write_all(b"\n")?;
        self.rows += 1;
        Ok(())
    }

    /// Сколько строк уже записано (для итоговой сводки).
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
