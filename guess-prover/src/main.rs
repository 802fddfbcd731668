//! Guess Prover command line
//!
//! Commits a guess to a sorted-pair Keccak-256 Merkle root and prints the
//! root plus one proof per letter as JSON, or checks a single proof the way
//! the on-chain verifier does.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guess_prover::{config, generate_proofs, ProverConfig, ProverError};
use sorted_merkle::{hash_leaf, Digest, MerkleError, Proof};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Merkle commitment generator for on-chain guess verification
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (defaults are used when it does not exist)
    #[arg(short, long, default_value = "prover.toml", global = true)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the tree for INPUT and print the root and per-unit proofs
    Prove {
        /// Value to commit to, e.g. the word of the day
        input: String,

        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Check that UNIT belongs to ROOT using the given sibling list
    Verify {
        /// Single unit to check, e.g. one letter
        #[arg(short, long)]
        unit: String,

        /// Published root, 0x-prefixed hex
        #[arg(short, long)]
        root: String,

        /// Sibling digests, leaf level first (repeat the flag)
        #[arg(short, long = "proof")]
        proof: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level)?;

    let config = load_configuration(&args.config)?;

    match args.command {
        Command::Prove { input, pretty } => run_prove(&input, &config, pretty),
        Command::Verify { unit, root, proof } => run_verify(&unit, &root, &proof, &config),
    }
}

/// Initialize logging system
fn init_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => {
            eprintln!("⚠️  Unknown log level: {}, using INFO", log_level);
            tracing::Level::INFO
        }
    };

    // stdout carries JSON only
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}

/// Load configuration file, with `PROVER_*` environment overrides
fn load_configuration(config_path: &Path) -> Result<ProverConfig> {
    if !config_path.exists() {
        debug!(
            "Configuration file {} does not exist, using defaults and environment",
            config_path.display()
        );
        return config::load_config_from_env().context("Failed to load configuration");
    }

    info!("📋 Loading configuration: {}", config_path.display());
    config::load_config(config_path).context("Failed to load configuration")
}

fn run_prove(input: &str, config: &ProverConfig, pretty: bool) -> Result<()> {
    let commitment = match generate_proofs(input, config) {
        Ok(commitment) => commitment,
        Err(ProverError::InvalidInput(reason)) => {
            error!("❌ Rejected input: {}", reason);
            std::process::exit(2);
        }
        Err(e) => return Err(e).context("Failed to generate proofs"),
    };

    info!(
        "✅ Committed {} units, root {}",
        commitment.leaves.len(),
        commitment.root
    );

    let json = if pretty {
        serde_json::to_string_pretty(&commitment)?
    } else {
        serde_json::to_string(&commitment)?
    };
    println!("{}", json);

    Ok(())
}

fn run_verify(unit: &str, root: &str, proof: &[String], config: &ProverConfig) -> Result<()> {
    let units = match config.policy.units(unit) {
        Ok(units) if units.len() == 1 => units,
        Ok(units) => {
            error!("❌ Expected exactly one unit, got {}", units.len());
            std::process::exit(2);
        }
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let leaf = hash_leaf(units[0].as_bytes());
    debug!("Leaf for {:?}: {}", units[0], leaf);

    // typed parse: an empty sibling list is a valid single-unit commitment
    let parsed = root
        .parse::<Digest>()
        .and_then(|root| Proof::from_hex(proof).map(|proof| (root, proof)));
    let (root, proof) = match parsed {
        Ok(parsed) => parsed,
        Err(MerkleError::InvalidDigest(reason)) | Err(MerkleError::InvalidProofFormat(reason)) => {
            error!("❌ Malformed proof: {}", reason);
            std::process::exit(2);
        }
        Err(e) => return Err(e).context("Verification failed"),
    };

    if proof.verify(&leaf, &root) {
        println!("true");
        Ok(())
    } else {
        warn!("Proof does not match root {}", root);
        println!("false");
        std::process::exit(1);
    }
}
