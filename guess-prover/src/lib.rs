//! 鏈上猜詞遊戲的默克爾承諾生成器
//!
//! 本 crate 負責:
//! 1. 按策略把猜測正規化為葉子（每個字母一個）
//! 2. 使用 `sorted-merkle` 構建排序配對的 keccak256 默克爾樹
//! 3. 為每個葉子生成證明並在交出前自我驗證
//! 4. 以 `0x` 十六進制格式輸出根與證明，供合約的 `MerkleProof.verify` 使用
//!
//! # 架構
//!
//! ```text
//! ┌──────────────┐
//! │  commitment  │  ← generate_proofs
//! └──────┬───────┘
//!        │
//!   ┌────┴─────┬───────────────┐
//!   ▼          ▼               ▼
//! normalize  sorted-merkle   config
//! ```
//!
//! # 示例用法
//!
//! ```
//! use guess_prover::{generate_proofs, ProverConfig};
//!
//! let config = ProverConfig::default();
//! let commitment = generate_proofs("Crane", &config).unwrap();
//!
//! // 根發布到合約，證明在揭示字母時提交
//! println!("root: {}", commitment.root);
//! for leaf in &commitment.leaves {
//!     println!("{} -> {:?}", leaf.unit, leaf.proof);
//! }
//! ```

// 公開模塊
pub mod commitment;
pub mod config;
pub mod error;
pub mod normalize;

// Re-export 常用類型
pub use commitment::{generate_proofs, Commitment, LeafProof};
pub use config::ProverConfig;
pub use error::{ProverError, Result};
pub use normalize::LeafPolicy;
