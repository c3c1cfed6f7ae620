//! 修改时间：截断、校验、格式化、过期判断。
//!
//! 接口给的 `lastModifiedTime` 只取前 10 个字符使用。毫秒时间戳截断后正好是秒，
//! 其他格式截断后多半不是数字，这种情况在解析时直接报错，不会悄悄变成一个无意义的日期。

use chrono::{DateTime, TimeDelta, Utc};

/// 修改时间保留的字符数
pub const MODIFIED_TIME_CHARS: usize = 10;

/// 取原始值的前 10 个字符。
pub fn truncate_modified_time(raw: &str) -> String {
    raw.chars().take(MODIFIED_TIME_CHARS).collect()
}

/// 把截断后的值解析为 Unix 秒；必须是 1～10 位 ASCII 数字。
pub fn parse_epoch_seconds(truncated: &str) -> Option<i64> {
    if truncated.is_empty() || !truncated.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    truncated.parse().ok()
}

/// RFC 2822 文本，如 `Tue, 1 Jul 2003 10:52:37 +0000`
pub fn rfc_date(epoch_seconds: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(epoch_seconds, 0).map(|d| d.to_rfc2822())
}

/// `modified > now - retention`，严格大于。
pub fn is_update_required(epoch_seconds: i64, now: DateTime<Utc>, retention: TimeDelta) -> bool {
    let threshold = now
        .checked_sub_signed(retention)
        .map(|t| t.timestamp())
        .unwrap_or(i64::MIN);
    epoch_seconds > threshold
}
