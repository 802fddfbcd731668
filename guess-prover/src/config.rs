//! 配置管理模塊
//!
//! 負責加載和驗證證明生成器配置

use crate::error::{ProverError, Result};
use crate::normalize::LeafPolicy;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 證明生成器運行時配置
///
/// 所有字段都有默認值，配置文件只需寫出要覆蓋的部分。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProverConfig {
    /// 葉子正規化策略
    pub policy: LeafPolicy,

    /// 是否在構建前移除重複葉子
    ///
    /// 默認 false：與 merkletreejs 行為一致，"hello" 的兩個 'l' 都是葉子
    pub deduplicate: bool,
}

/// 環境變量前綴
pub const ENV_PREFIX: &str = "PROVER";

/// 從配置文件加載配置，`PROVER_*` 環境變量覆蓋文件中的值
///
/// # 參數
/// - `config_path`: 配置文件路徑（支持 TOML、JSON、YAML，按擴展名判斷）
///
/// # 示例
/// ```no_run
/// use guess_prover::config::load_config;
///
/// let config = load_config("prover.toml").expect("Failed to load config");
/// println!("Deduplicate: {}", config.deduplicate);
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ProverConfig> {
    let builder = Config::builder()
        .add_source(File::from(config_path.as_ref()))
        .add_source(env_source());

    finish(builder, "config file")
}

/// 僅從環境變量加載配置（沒有配置文件時使用）
///
/// 環境變量前綴: `PROVER_`，嵌套字段用 `__` 分隔
/// 示例: `PROVER_DEDUPLICATE=true`, `PROVER_POLICY__ALPHABET=any`
pub fn load_config_from_env() -> Result<ProverConfig> {
    finish(Config::builder().add_source(env_source()), "env vars")
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn finish(builder: ConfigBuilder<DefaultState>, origin: &str) -> Result<ProverConfig> {
    let config = builder
        .build()
        .map_err(|e| ProverError::Config(format!("Failed to load {}: {}", origin, e)))?;

    let prover_config: ProverConfig = config
        .try_deserialize()
        .map_err(|e| ProverError::Config(format!("Failed to parse {}: {}", origin, e)))?;

    validate_config(&prover_config)?;

    Ok(prover_config)
}

/// 驗證配置的有效性
pub fn validate_config(config: &ProverConfig) -> Result<()> {
    if config.policy.max_units == 0 {
        return Err(ProverError::Config(
            "policy.max_units must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
