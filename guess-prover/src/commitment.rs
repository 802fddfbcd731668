//! 猜測承諾生成模塊
//!
//! 把一個輸入值變成鏈上可驗證的承諾:
//!
//! ```text
//! input ──▶ LeafPolicy::units ──▶ hash_leaf ──▶ MerkleTree::build
//!                                                    │
//!                              ┌─────────────────────┤
//!                              ▼                     ▼
//!                    proof (每個單元一次)          root
//!                              │                     │
//!                              └──▶ 自我驗證 ◀────────┘
//! ```
//!
//! 輸出只有兩樣東西交給外部：`0x` 前綴的根，以及每個葉子的十六進制兄弟節點列表。
//! 合約端必須使用同樣的 keccak256 與排序配對規則。

use crate::config::ProverConfig;
use crate::error::{ProverError, Result};
use crate::normalize::LeafPolicy;
use serde::{Deserialize, Serialize};
use sorted_merkle::{hash_leaf, Digest, MerkleTree, Proof};
use tracing::{debug, warn};

/// 單個葉子的證明
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafProof {
    /// 正規化後的原子單元（例如 "l"）
    pub unit: String,

    /// 葉子哈希 `keccak256(unit)`
    pub leaf: String,

    /// 從葉子到根的兄弟節點（不含根）
    pub proof: Vec<String>,
}

/// 一次承諾的完整輸出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    /// 默克爾根，`0x` + 64 個十六進制字符
    pub root: String,

    /// 每個輸入單元一個證明，保持輸入順序
    pub leaves: Vec<LeafProof>,
}

impl Commitment {
    /// 只取證明列表，順序與輸入單元一致
    pub fn proofs(&self) -> Vec<Vec<String>> {
        self.leaves.iter().map(|l| l.proof.clone()).collect()
    }

    /// 驗證某個單元是否屬於本承諾
    ///
    /// 單元經過同一策略重新正規化，必須恰好得到一個單元。
    /// 空證明列表在這裡是合法的（單字符承諾）。
    ///
    /// # 返回
    /// - `Ok(true)`: 單元屬於承諾
    /// - `Ok(false)`: 不屬於，或證明不對應這個根
    /// - `Err(..)`: 單元無效或十六進制格式錯誤
    pub fn verify_unit<S: AsRef<str>>(
        &self,
        unit: &str,
        proof: &[S],
        policy: &LeafPolicy,
    ) -> Result<bool> {
        let units = policy.units(unit)?;
        let [unit] = units.as_slice() else {
            return Err(ProverError::InvalidInput(format!(
                "expected exactly one unit, got {}",
                units.len()
            )));
        };

        let root = Digest::from_hex(&self.root)?;
        let proof = Proof::from_hex(proof)?;
        Ok(proof.verify(&hash_leaf(unit.as_bytes()), &root))
    }
}

/// 為輸入生成根與每個葉子的證明
///
/// 每個證明交出前都會對根做一次自我驗證；
/// 任何一個失敗就返回 `SelfCheckFailed`，而不是交出錯誤的承諾。
///
/// # 示例
///
/// ```
/// use guess_prover::{generate_proofs, ProverConfig};
///
/// let commitment = generate_proofs("hello", &ProverConfig::default()).unwrap();
/// assert_eq!(
///     commitment.root,
///     "0xe0ccfc8008533e4fb0b3f62688cdda073fb18cdacc764052459b5cd16e3ce7d9"
/// );
/// assert_eq!(commitment.leaves.len(), 5);
/// ```
pub fn generate_proofs(input: &str, config: &ProverConfig) -> Result<Commitment> {
    let units = config.policy.units(input)?;
    let leaves: Vec<Digest> = units.iter().map(|u| hash_leaf(u.as_bytes())).collect();

    let tree = if config.deduplicate {
        MerkleTree::build_deduplicated(leaves.iter().copied())?
    } else {
        MerkleTree::build(leaves.iter().copied())?
    };
    let root = tree.root();

    debug!(
        units = units.len(),
        leaves = tree.leaf_count(),
        root = %root,
        "committing input"
    );

    let mut proofs = Vec::with_capacity(leaves.len());
    for (unit, leaf) in units.into_iter().zip(leaves) {
        let proof = tree.proof(&leaf)?;

        if !proof.verify(&leaf, &root) {
            warn!(%leaf, unit = %unit, "self-check failed");
            return Err(ProverError::SelfCheckFailed {
                leaf: leaf.to_hex(),
            });
        }

        proofs.push(LeafProof {
            unit,
            leaf: leaf.to_hex(),
            proof: proof.to_hex(),
        });
    }

    Ok(Commitment {
        root: root.to_hex(),
        leaves: proofs,
    })
}
