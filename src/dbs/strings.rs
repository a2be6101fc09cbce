use byteorder::{ByteOrder, LittleEndian};

use super::buffer::MraBuffer;
use super::error::DbsError;

/// Читает UTF-16LE строку с нулевым терминатором начиная с offset.
///
/// Возвращает строку и число 16-битных code unit'ов, прочитанных до
/// терминатора (сам терминатор не считается). Корректные суррогатные пары
/// декодируются в один code point, битые - в U+FFFD (как
/// `String::from_utf16_lossy`). Конец буфера без терминатора - ошибка
/// формата, а не тихое усечение.
pub fn decode_terminated(buffer: &MraBuffer, offset: usize) -> Result<(String, usize), DbsError> {
    let mut units = Vec::new();
    let mut at = offset;
    loop {
        let unit = match buffer.slice(at, 2) {
            Ok(b) => LittleEndian::read_u16(b),
            Err(_) => return Err(DbsError::UnterminatedString { offset }),
        };
        if unit == 0 {
            break;
        }
        units.push(unit);
        at += 2;
    }
    Ok((String::from_utf16_lossy(&units), units.len()))
}

/// Сдвигает байтовое смещение на count code unit'ов (по 2 байта) без
/// декодирования. Нужно, чтобы перешагнуть ник: его объявленная длина
/// может быть больше фактической (строка кончается нулём раньше).
pub fn skip_units(offset: usize, count: usize) -> Option<usize> {
    offset.checked_add(count.checked_mul(2)?)
}

/// Кодирует строку в UTF-16LE с нулевым терминатором (тестовые буферы).
#[cfg(test)]
pub fn encode_terminated(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() * 2 + 2);
    for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out.extend_from_slice(&[0, 0]);
    out
}
