use thiserror::Error;

/// ユーティリティ関数のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilError {
    /// 2倍にした結果が i64 に収まらない
    #[error("doubling {value} overflows i64")]
    Overflow { value: i64 },
}

pub type Result<T> = std::result::Result<T, UtilError>;
