/// Error type definitions
use crate::digest::Digest;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Cannot build a Merkle tree from zero leaves")]
    EmptyTree,

    #[error("Leaf {leaf} is not part of this tree")]
    LeafNotFound { leaf: Digest },

    #[error("Invalid proof format: {0}")]
    InvalidProofFormat(String),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),
}

pub type Result<T> = std::result::Result<T, MerkleError>;
