use crate::error::{Result, UtilError};

/// 値を2倍にする
///
/// オーバーフローはラップせず `UtilError::Overflow` を返す。
///
/// ```
/// assert_eq!(project_util::util::double(5), Ok(10));
/// ```
pub fn double(value: i64) -> Result<i64> {
    value
        .checked_mul(2)
        .ok_or(UtilError::Overflow { value })
}

/// "{name} has {count} items" 形式のメッセージを作る
///
/// ```
/// assert_eq!(project_util::util::format_message("Alice", 3), "Alice has 3 items");
/// ```
pub fn format_message(name: &str, count: i64) -> String {
    format!("{name} has {count} items")
}
