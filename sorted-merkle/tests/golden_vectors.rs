//! 固定黃金向量測試
//!
//! 根與證明數值與 merkletreejs（sortLeaves + sortPairs, keccak256）輸出一致，
//! 任何改動都會破壞鏈上已發布根的相容性。

use sha3::{Digest as _, Keccak256};
use sorted_merkle::{hash_leaf, verify_hex, Digest, MerkleTree, Proof};

const HELLO_ROOT: &str = "0xe0ccfc8008533e4fb0b3f62688cdda073fb18cdacc764052459b5cd16e3ce7d9";
const HELLO_SET_ROOT: &str = "0x1ed4c15c654d184c30ddb9f5b15039a75f9944722a9c367020cb335fde63d399";
const ABCDE_ROOT: &str = "0x3cb8ebf3ea51dca2c1dbf070aea7b5c035ecaaea486bc68f4819b59360c5a2f8";
const A_ROOT: &str = "0x3ac225168df54212a25c1c01fd35bebfea408fdac2e31ddd6f80a4bbf9a5f1cb";

fn letters(word: &str) -> Vec<Digest> {
    word.chars()
        .map(|c| hash_leaf(c.to_string().as_bytes()))
        .collect()
}

/// OpenZeppelin `MerkleProof.processProof` 的獨立實現（不經過本 crate 的 hash_pair）
fn openzeppelin_process_proof(leaf: [u8; 32], proof: &[[u8; 32]]) -> [u8; 32] {
    proof.iter().fold(leaf, |computed, sibling| {
        let mut hasher = Keccak256::new();
        if computed < *sibling {
            hasher.update(computed);
            hasher.update(sibling);
        } else {
            hasher.update(sibling);
            hasher.update(computed);
        }
        hasher.finalize().into()
    })
}

#[test]
fn test_hello_root_is_stable() {
    let tree = MerkleTree::build(letters("hello")).unwrap();

    assert_eq!(tree.root_hex(), HELLO_ROOT);
    assert_eq!(tree.leaf_count(), 5);
    assert_eq!(tree.depth(), 3);
}

#[test]
fn test_hello_letter_proofs() {
    let tree = MerkleTree::build(letters("hello")).unwrap();
    let l = hash_leaf(b"l");

    let proof = tree.proof(&l).unwrap();
    assert_eq!(
        proof.to_hex(),
        vec![
            "0x53a63b3ee437e1aa804722ac8f2f57053ac47e1bb887f095340cf5990e7faad3",
            "0x9d9f1bc6f2f283ea919c80cab42ed1a2fefefff2fb6e1598f9b059dba33d6707",
            "0xa8982c89d80987fb9a510e25981ee9170206be21af3c8e0eb312ef1d3382e761",
        ]
    );
    assert!(verify_hex(&l.to_hex(), &proof.to_hex(), HELLO_ROOT).unwrap());
}

/// 'e' 的葉子在排序後最大，連續兩層沒有配對，證明只剩一個兄弟節點
#[test]
fn test_hello_promoted_leaf_has_short_proof() {
    let tree = MerkleTree::build(letters("hello")).unwrap();
    let e = hash_leaf(b"e");

    assert_eq!(
        e.to_hex(),
        "0xa8982c89d80987fb9a510e25981ee9170206be21af3c8e0eb312ef1d3382e761"
    );
    assert_eq!(tree.leaves().last(), Some(&e));

    let proof = tree.proof(&e).unwrap();
    assert_eq!(
        proof.to_hex(),
        vec!["0xd8f08164c578d492d819b9631fefff2d6e843f4abe0563cd3c89cc2ff43bbd41"]
    );
    assert!(proof.len() < tree.depth());
    assert!(tree.verify(&e, &proof));
}

#[test]
fn test_hello_deduplicated_root() {
    let tree = MerkleTree::build_deduplicated(letters("hello")).unwrap();

    assert_eq!(tree.leaf_count(), 4);
    assert_eq!(tree.root_hex(), HELLO_SET_ROOT);
}

/// 奇數葉子策略：提升（promote），重複構建結果一致
#[test]
fn test_odd_leaf_count_policy_is_locked() {
    for _ in 0..3 {
        let tree = MerkleTree::build(letters("abcde")).unwrap();
        assert_eq!(tree.root_hex(), ABCDE_ROOT);
    }
}

#[test]
fn test_single_letter_root_is_leaf() {
    let tree = MerkleTree::build(letters("a")).unwrap();

    assert_eq!(tree.root_hex(), A_ROOT);
    assert_eq!(tree.root(), hash_leaf(b"a"));
    assert!(tree.proof(&hash_leaf(b"a")).unwrap().is_empty());
}

#[test]
fn test_openzeppelin_fold_agrees() {
    let word = "abcdefghijk";
    let tree = MerkleTree::build(letters(word)).unwrap();
    let root = tree.root().into_bytes();

    for leaf in letters(word) {
        let proof = tree.proof(&leaf).unwrap();
        let raw: Vec<[u8; 32]> = proof.siblings().iter().map(|d| d.into_bytes()).collect();

        assert_eq!(openzeppelin_process_proof(leaf.into_bytes(), &raw), root);
    }
}

#[test]
fn test_hex_proof_parses_back() {
    let tree = MerkleTree::build(letters("hello")).unwrap();
    let o = hash_leaf(b"o");
    let hex = tree.proof(&o).unwrap().to_hex();

    let parsed = Proof::from_hex(&hex).unwrap();
    assert!(parsed.verify(&o, &tree.root()));
    println!("✓ Verified 'o' against {}", HELLO_ROOT);
}
