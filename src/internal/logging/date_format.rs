//! 日志时间格式：兼容旧配置里 PHP `date()` 风格的写法（如 `Y-m-d H:i:s`）。
//!
//! 含 `%` 的值按 strftime 处理；不含 `%` 的值按 PHP 的格式字符逐个翻译。

use chrono::format::{Item, StrftimeItems};

/// 把日志时间格式统一成 strftime；结果不是合法的 strftime 时返回 `None`。
pub fn normalize_datetime_format(value: &str) -> Option<String> {
    let format = if value.contains('%') {
        value.to_string()
    } else {
        php_date_to_strftime(value)
    };

    is_valid_strftime(&format).then_some(format)
}

/// chrono 能否完整解析该 strftime 格式。
pub fn is_valid_strftime(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// PHP `date()` 格式翻译为 strftime。
///
/// `\` 转义下一个字符；不认识的字母原样保留。
pub fn php_date_to_strftime(php: &str) -> String {
    let mut out = String::with_capacity(php.len() * 2);
    let mut chars = php.chars();

    while let Some(c) = chars.next() {
        let mapped = match c {
            '\\' => {
                if let Some(next) = chars.next() {
                    push_literal(&mut out, next);
                }
                continue;
            }
            // 日
            'd' => "%d",
            'j' => "%-d",
            'D' => "%a",
            'l' => "%A",
            'N' => "%u",
            'w' => "%w",
            // 月
            'm' => "%m",
            'n' => "%-m",
            'M' => "%b",
            'F' => "%B",
            // 年
            'Y' => "%Y",
            'y' => "%y",
            // 时间
            'a' => "%P",
            'A' => "%p",
            'g' => "%-I",
            'G' => "%-H",
            'h' => "%I",
            'H' => "%H",
            'i' => "%M",
            's' => "%S",
            'v' => "%3f",
            'u' => "%6f",
            // 时区
            'e' | 'T' => "%Z",
            'O' => "%z",
            'P' => "%:z",
            'U' => "%s",
            // 完整日期
            'c' => "%Y-%m-%dT%H:%M:%S%:z",
            'r' => "%a, %d %b %Y %H:%M:%S %z",
            other => {
                push_literal(&mut out, other);
                continue;
            }
        };
        out.push_str(mapped);
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}
