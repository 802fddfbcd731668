//! Sorted-pair Keccak-256 Merkle commitments
//!
//! Builds OpenZeppelin-compatible Merkle trees: leaves are `keccak256(unit)`,
//! leaves are sorted before construction, inner nodes hash the sorted pair,
//! and an odd node is promoted unchanged. Proofs are plain sibling lists that
//! `MerkleProof.verify(proof, root, leaf)` accepts as-is.
//!
//! # Quick Start
//!
//! ```rust
//! use sorted_merkle::{hash_leaf, MerkleTree};
//!
//! // Commit to the letters of a word
//! let leaves: Vec<_> = "hello".bytes().map(|b| hash_leaf(&[b])).collect();
//! let tree = MerkleTree::build(leaves).unwrap();
//!
//! // Prove one letter
//! let leaf = hash_leaf(b"l");
//! let proof = tree.proof(&leaf).unwrap();
//!
//! // Anyone holding only the root can check it
//! assert!(proof.verify(&leaf, &tree.root()));
//! assert!(!proof.verify(&hash_leaf(b"z"), &tree.root()));
//! ```

pub mod digest;
pub mod error;
pub mod hasher;
pub mod proof;
pub mod tree;

// Re-export commonly used types
pub use digest::{Digest, DIGEST_LEN};
pub use error::{MerkleError, Result};
pub use hasher::{hash_leaf, hash_pair};
pub use proof::{verify_hex, Proof};
pub use tree::MerkleTree;
