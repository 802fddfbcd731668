/// Sorted-leaf, sorted-pair Merkle tree construction and proof generation
///
/// Canonicalisation rules, fixed for interoperability with merkletreejs
/// (`sortLeaves` + `sortPairs`) and OpenZeppelin `MerkleProof`:
///
/// 1. Leaves are sorted ascending by raw bytes before the first level.
/// 2. Neighbours are paired left to right and combined with [`hash_pair`].
/// 3. An odd node at the end of a level is promoted unchanged to the next
///    level; it is never hashed with itself.
/// 4. Duplicate leaves are kept unless the tree is built with
///    [`MerkleTree::build_deduplicated`].
use crate::digest::Digest;
use crate::error::{MerkleError, Result};
use crate::hasher::hash_pair;
use crate::proof::Proof;
use tracing::debug;

/// Immutable Merkle tree stored as a leaf-indexed array of levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    /// `layers[0]` = sorted leaves, last layer = `[root]`
    layers: Vec<Vec<Digest>>,
}

impl MerkleTree {
    /// Build a tree over already-hashed leaves.
    ///
    /// Input order is irrelevant: the same multiset of leaves always yields
    /// the same root.
    ///
    /// # Errors
    /// `MerkleError::EmptyTree` when no leaves are supplied.
    pub fn build<I>(leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = Digest>,
    {
        let mut leaves: Vec<Digest> = leaves.into_iter().collect();
        leaves.sort_unstable();
        Self::from_sorted(leaves)
    }

    /// Same as [`MerkleTree::build`] but collapses equal leaves first, so the
    /// tree commits to a set rather than a multiset.
    pub fn build_deduplicated<I>(leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = Digest>,
    {
        let mut leaves: Vec<Digest> = leaves.into_iter().collect();
        leaves.sort_unstable();
        leaves.dedup();
        Self::from_sorted(leaves)
    }

    fn from_sorted(leaves: Vec<Digest>) -> Result<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyTree);
        }

        let mut layers = vec![leaves];
        while let Some(current) = layers.last().filter(|layer| layer.len() > 1) {
            let next: Vec<Digest> = current
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    [odd] => *odd,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            layers.push(next);
        }

        let tree = Self { layers };
        debug!(
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            root = %tree.root(),
            "built merkle tree"
        );
        Ok(tree)
    }

    /// The published commitment.
    pub fn root(&self) -> Digest {
        // from_sorted guarantees a non-empty top layer
        self.layers[self.layers.len() - 1][0]
    }

    pub fn root_hex(&self) -> String {
        self.root().to_hex()
    }

    /// Leaves in canonical (sorted) order.
    pub fn leaves(&self) -> &[Digest] {
        &self.layers[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Number of combination levels above the leaves; 0 for a single leaf.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn contains(&self, leaf: &Digest) -> bool {
        self.leaves().binary_search(leaf).is_ok()
    }

    /// Generate the inclusion proof for `leaf`.
    ///
    /// The leaf is located by value in the sorted leaf layer. For duplicated
    /// leaves the first occurrence is used; any copy's proof verifies the
    /// same value.
    ///
    /// # Errors
    /// `MerkleError::LeafNotFound` if the digest was never committed.
    pub fn proof(&self, leaf: &Digest) -> Result<Proof> {
        let proof = self.proof_at(self.position(leaf)?);
        debug!(%leaf, siblings = proof.len(), "generated merkle proof");
        Ok(proof)
    }

    /// One proof per leaf position, in sorted leaf order.
    ///
    /// Duplicated leaves get one entry per copy, each walking from its own
    /// position.
    pub fn proofs(&self) -> Vec<(Digest, Proof)> {
        self.leaves()
            .iter()
            .enumerate()
            .map(|(index, leaf)| (*leaf, self.proof_at(index)))
            .collect()
    }

    // index must be < leaf_count()
    fn proof_at(&self, mut index: usize) -> Proof {
        let mut siblings = Vec::with_capacity(self.depth());

        for layer in &self.layers[..self.layers.len() - 1] {
            if let Some(node) = layer.get(index ^ 1) {
                siblings.push(*node);
            }
            index /= 2;
        }

        Proof::new(siblings)
    }

    /// Verify a proof against this tree's root.
    pub fn verify(&self, leaf: &Digest, proof: &Proof) -> bool {
        proof.verify(leaf, &self.root())
    }

    fn position(&self, leaf: &Digest) -> Result<usize> {
        let leaves = self.leaves();
        let mut index = leaves
            .binary_search(leaf)
            .map_err(|_| MerkleError::LeafNotFound { leaf: *leaf })?;
        while index > 0 && leaves[index - 1] == *leaf {
            index -= 1;
        }
        Ok(index)
    }
}
