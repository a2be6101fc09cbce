use thiserror::Error;

/// Ошибки разбора контейнера mra.dbs.
///
/// Несовпадение сигнатуры "mrahistory_" у кандидата-корреспондента ошибкой
/// НЕ является (в арене полно записей других типов) - такие записи просто
/// пропускаются. Все остальные нарушения структуры прерывают минимальный
/// охватывающий скан: одну цепочку сообщений, либо весь обход корреспондентов,
/// если повреждены сами поля связывания.
#[derive(Debug, Error)]
pub enum DbsError {
    /// Чтение вышло за пределы файла. Фатально для текущего обхода цепочки.
    #[error("чтение за границей буфера: offset=0x{offset:08x}, size={size}, file_size={file_size}")]
    OutOfBounds {
        offset: usize,
        size: usize,
        file_size: usize,
    },

    /// id = 0 - универсальный терминатор цепочек, записи с таким id не бывает.
    #[error("попытка разрешить id = 0 через таблицу смещений")]
    NullRecordId,

    /// У записи сообщения не сошлось магическое число (ожидается 0x38).
    /// Всегда фатально для цепочки: без него смещениям полей доверять нельзя.
    #[error("запись 0x{record_id:08x}: magic_number = 0x{found:02x}, ожидалось 0x38")]
    BadMagic { record_id: u32, found: u32 },

    /// Строка UTF-16 дошла до конца файла, не встретив нулевого терминатора.
    #[error("строка UTF-16 без терминатора, начало на offset=0x{offset:08x}")]
    UnterminatedString { offset: usize },

    /// Цепочка замкнулась сама на себя. Идентификаторы приходят из
    /// недоверенного файла, поэтому обход обязан уметь остановиться.
    #[error("цикл в цепочке записей: id=0x{record_id:08x} уже посещался")]
    ChainCycle { record_id: u32 },

    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),
}
