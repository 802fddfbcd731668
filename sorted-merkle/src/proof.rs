/// Inclusion proofs and the sorted-pair verifier
use crate::digest::Digest;
use crate::error::{MerkleError, Result};
use crate::hasher::hash_pair;
use serde::{Deserialize, Serialize};

/// Sibling digests from the leaf level up to, but excluding, the root.
///
/// No left/right flags are carried: with sorted-pair hashing the verifier
/// only ever needs `hash_pair(current, sibling)`. Levels where the node was
/// promoted without a partner contribute no sibling, so a proof can be
/// shorter than the tree depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof {
    siblings: Vec<Digest>,
}

impl Proof {
    pub fn new(siblings: Vec<Digest>) -> Self {
        Self { siblings }
    }

    pub fn siblings(&self) -> &[Digest] {
        &self.siblings
    }

    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Fold the siblings onto `leaf` and return the candidate root.
    pub fn compute_root(&self, leaf: &Digest) -> Digest {
        self.siblings
            .iter()
            .fold(*leaf, |current, sibling| hash_pair(&current, sibling))
    }

    /// Check that `leaf` belongs to the tree committed to by `root`.
    ///
    /// A mismatch is an ordinary `false`. An empty proof holds only when the
    /// leaf is the root itself (single-leaf tree).
    pub fn verify(&self, leaf: &Digest, root: &Digest) -> bool {
        &self.compute_root(leaf) == root
    }

    /// Hex form handed to contracts, one `0x`-prefixed string per sibling.
    pub fn to_hex(&self) -> Vec<String> {
        self.siblings.iter().map(Digest::to_hex).collect()
    }

    /// Parse a hex sibling list. An empty list is accepted.
    pub fn from_hex<S: AsRef<str>>(siblings: &[S]) -> Result<Self> {
        let siblings = siblings
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Digest::from_hex(s.as_ref()).map_err(|e| {
                    MerkleError::InvalidProofFormat(format!("sibling {}: {}", i, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(siblings.into())
    }
}

impl From<Vec<Digest>> for Proof {
    fn from(siblings: Vec<Digest>) -> Self {
        Self { siblings }
    }
}

/// Verify hex-encoded inputs exactly as they would be submitted on-chain.
///
/// # Errors
/// `InvalidProofFormat` when the root is empty, the proof list is empty, or
/// any value is not 32 bytes of hex. A well-formed proof that does not
/// match returns `Ok(false)`.
pub fn verify_hex<S: AsRef<str>>(leaf: &str, proof: &[S], root: &str) -> Result<bool> {
    if root.trim().is_empty() {
        return Err(MerkleError::InvalidProofFormat("empty root".to_string()));
    }
    if proof.is_empty() {
        return Err(MerkleError::InvalidProofFormat("empty proof list".to_string()));
    }

    let leaf = Digest::from_hex(leaf)
        .map_err(|e| MerkleError::InvalidProofFormat(format!("leaf: {}", e)))?;
    let root = Digest::from_hex(root)
        .map_err(|e| MerkleError::InvalidProofFormat(format!("root: {}", e)))?;
    let proof = Proof::from_hex(proof)?;

    Ok(proof.verify(&leaf, &root))
}
