//! Helper functions

use chrono::{Local, NaiveDateTime};

/// Format của timestamp đứng đầu mỗi log record, ví dụ `2024-05-01 13:45:12.123456`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Lấy timestamp hiện tại (local time) dưới dạng string
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Escape `\\`, `\r`, `\n` để message luôn nằm trên một dòng
pub fn escape_message(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Ngược lại với [`escape_message`]. Escape lạ được giữ nguyên.
pub fn unescape_message(escaped: &str) -> String {
    let mut message = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            message.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => message.push('\\'),
            Some('r') => message.push('\r'),
            Some('n') => message.push('\n'),
            Some(other) => {
                message.push('\\');
                message.push(other);
            }
            None => message.push('\\'),
        }
    }
    message
}

/// Tạo một log record: `<timestamp> <message>`, message đã được escape
pub fn format_record(message: &str) -> String {
    format!("{} {}", current_timestamp(), escape_message(message))
}

/// Tách một log record thành timestamp và message (đã unescape).
///
/// Trả về `None` nếu dòng không bắt đầu bằng timestamp hợp lệ.
pub fn parse_record(line: &str) -> Option<(NaiveDateTime, String)> {
    let mut parts = line.splitn(3, ' ');
    let date = parts.next()?;
    let time = parts.next()?;
    let message = parts.next()?;

    let timestamp =
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), TIMESTAMP_FORMAT).ok()?;
    Some((timestamp, unescape_message(message)))
}
