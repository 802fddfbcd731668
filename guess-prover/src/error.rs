//! 證明生成器統一錯誤類型定義
//!
//! 使用 thiserror crate 區分錯誤種類，不負責格式化給使用者的訊息。

use sorted_merkle::MerkleError;
use thiserror::Error;

/// 證明生成器錯誤類型
///
/// 所有錯誤都是本地、同步、不可重試的：
/// 計算是確定性的，重試無效輸入不會成功。
#[derive(Error, Debug)]
pub enum ProverError {
    /// 輸入違反正規化策略
    ///
    /// 空輸入、超出字母表的單元、或單元數量超過上限
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 默克爾樹錯誤
    ///
    /// 空樹、找不到葉子、證明格式錯誤
    #[error("Merkle error: {0}")]
    Merkle(#[from] MerkleError),

    /// 自我驗證失敗
    ///
    /// 剛生成的證明無法對剛計算的根驗證，交給調用者前攔截
    #[error("Verification failed for {leaf}")]
    SelfCheckFailed { leaf: String },

    /// 配置錯誤
    #[error("Configuration error: {0}")]
    Config(String),

    /// 序列化/反序列化錯誤
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result 類型別名
pub type Result<T> = std::result::Result<T, ProverError>;

/// 從 JSON 錯誤轉換
impl From<serde_json::Error> for ProverError {
    fn from(err: serde_json::Error) -> Self {
        ProverError::Serialization(err.to_string())
    }
}
