//! 葉子集合正規化模塊
//!
//! 把一個輸入值（例如一個猜測的單詞）拆成有序的規範字節串，每個原子單元一個。
//! 鏈上合約會以同樣的方式重建葉子，因此大小寫轉換與拆分規則必須逐字節一致。
//!
//! # 默認策略
//!
//! 與前端 merkletreejs 生成葉子的方式一致:
//! - 先整體轉為小寫
//! - 每個字符一個葉子（UTF-8 字節）
//! - 只接受 `a-z`

use crate::error::{ProverError, Result};
use serde::{Deserialize, Serialize};

/// 默認單元數量上限
pub const DEFAULT_MAX_UNITS: usize = 256;

/// 大小寫規範化方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaseFolding {
    /// Unicode 小寫（對應 JavaScript `toLowerCase`）
    #[default]
    Lowercase,
    /// 保持原樣
    Preserve,
}

/// 拆分規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Decomposition {
    /// 每個 Unicode 字符一個單元
    #[default]
    Characters,
    /// 每個以空白分隔的詞一個單元
    Words,
}

/// 可接受的字母表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// 僅 `a-z`
    #[default]
    AsciiLowercase,
    /// `a-z`、`A-Z`、`0-9`
    AsciiAlphanumeric,
    /// 任意字符
    Any,
}

impl Alphabet {
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Alphabet::AsciiLowercase => c.is_ascii_lowercase(),
            Alphabet::AsciiAlphanumeric => c.is_ascii_alphanumeric(),
            Alphabet::Any => true,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Alphabet::AsciiLowercase => "ascii_lowercase",
            Alphabet::AsciiAlphanumeric => "ascii_alphanumeric",
            Alphabet::Any => "any",
        }
    }
}

/// 正規化策略
///
/// 策略在部署時確定並記錄，不在調用時協商。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafPolicy {
    /// 大小寫規範化
    pub case_folding: CaseFolding,

    /// 可接受的字母表（在大小寫轉換之後檢查）
    pub alphabet: Alphabet,

    /// 拆分規則
    pub decomposition: Decomposition,

    /// 單元數量上限
    pub max_units: usize,
}

impl Default for LeafPolicy {
    fn default() -> Self {
        Self {
            case_folding: CaseFolding::default(),
            alphabet: Alphabet::default(),
            decomposition: Decomposition::default(),
            max_units: DEFAULT_MAX_UNITS,
        }
    }
}

impl LeafPolicy {
    /// 把輸入拆成規範單元字符串
    ///
    /// # 錯誤
    /// - 空輸入（`Words` 模式下僅含空白也算空）
    /// - 單元數量超過 `max_units`
    /// - 任何字符不在字母表中
    ///
    /// # 示例
    ///
    /// ```
    /// use guess_prover::normalize::LeafPolicy;
    ///
    /// let units = LeafPolicy::default().units("HeLLo").unwrap();
    /// assert_eq!(units, vec!["h", "e", "l", "l", "o"]);
    /// ```
    pub fn units(&self, input: &str) -> Result<Vec<String>> {
        let folded = match self.case_folding {
            CaseFolding::Lowercase => input.to_lowercase(),
            CaseFolding::Preserve => input.to_string(),
        };

        let units: Vec<String> = match self.decomposition {
            Decomposition::Characters => folded.chars().map(String::from).collect(),
            Decomposition::Words => folded.split_whitespace().map(str::to_string).collect(),
        };

        if units.is_empty() {
            return Err(ProverError::InvalidInput("input is empty".to_string()));
        }

        if units.len() > self.max_units {
            return Err(ProverError::InvalidInput(format!(
                "input has {} units, limit is {}",
                units.len(),
                self.max_units
            )));
        }

        for (position, unit) in units.iter().enumerate() {
            if !unit.chars().all(|c| self.alphabet.accepts(c)) {
                return Err(ProverError::InvalidInput(format!(
                    "unit {:?} at position {} is outside the {} alphabet",
                    unit,
                    position,
                    self.alphabet.name()
                )));
            }
        }

        Ok(units)
    }

    /// 把輸入拆成規範字節串，每個單元一個（即葉子哈希前的原像）
    pub fn normalize(&self, input: &str) -> Result<Vec<Vec<u8>>> {
        Ok(self
            .units(input)?
            .into_iter()
            .map(String::into_bytes)
            .collect())
    }
}
