/// Keccak-256 leaf and sorted-pair hashing
///
/// Both functions must agree byte-for-byte with the Solidity side:
/// leaves are `keccak256(abi.encodePacked(unit))` and inner nodes are
/// OpenZeppelin's commutative `keccak256(a < b ? a || b : b || a)`.
use crate::digest::{Digest, DIGEST_LEN};
use sha3::{Digest as _, Keccak256};

/// Hash one canonical leaf unit.
pub fn hash_leaf(data: &[u8]) -> Digest {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    Digest::new(hasher.finalize().into())
}

/// Hash two nodes after putting the smaller one first.
///
/// The result does not depend on argument order, so verifiers never need to
/// know which side a sibling came from.
pub fn hash_pair(a: &Digest, b: &Digest) -> Digest {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };

    let mut combined = [0u8; DIGEST_LEN * 2];
    combined[..DIGEST_LEN].copy_from_slice(low.as_bytes());
    combined[DIGEST_LEN..].copy_from_slice(high.as_bytes());

    let mut hasher = Keccak256::new();
    hasher.update(combined);
    Digest::new(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_empty_vector() {
        // Ethereum's well-known keccak256("")
        assert_eq!(
            hash_leaf(b"").to_hex(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_leaf_is_plain_keccak() {
        assert_eq!(
            hash_leaf(b"a").to_hex(),
            "0x3ac225168df54212a25c1c01fd35bebfea408fdac2e31ddd6f80a4bbf9a5f1cb"
        );
    }

    #[test]
    fn test_hash_pair_is_commutative() {
        let a = hash_leaf(b"a");
        let b = hash_leaf(b"b");

        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
        assert_eq!(
            hash_pair(&a, &b).to_hex(),
            "0x805b21d846b189efaeb0377d6bb0d201b3872a363e607c25088f025b0c6ae1f8"
        );
    }

    #[test]
    fn test_hash_pair_matches_manual_concat() {
        let low = Digest::new([0x01u8; 32]);
        let high = Digest::new([0x02u8; 32]);

        let mut bytes = Vec::with_capacity(64);
        bytes.extend_from_slice(low.as_bytes());
        bytes.extend_from_slice(high.as_bytes());

        assert_eq!(hash_pair(&high, &low), hash_leaf(&bytes));
    }

    #[test]
    fn test_self_pair_differs_from_node() {
        let node = hash_leaf(b"x");
        assert_ne!(hash_pair(&node, &node), node);
    }
}
