use airdrop_merkle::{
    build_tree, extract_root_from_proof, get_proof, verify_proof, Address, AllowlistLeaf,
    AllowlistTree, KeccakSortedHasher, B256, U256,
};

fn leaves(count: usize) -> Vec<AllowlistLeaf> {
    (0..count)
        .map(|i| {
            let mut bytes = [0u8; 20];
            bytes[..8].copy_from_slice(&(i as u64 + 1).to_be_bytes());
            bytes[19] = 0xaa;
            AllowlistLeaf::new(Address::from(bytes), U256::from((i % 9 + 1) as u64))
        })
        .collect()
}

fn digests(count: usize) -> Vec<B256> {
    leaves(count).iter().map(AllowlistLeaf::to_hash).collect()
}

fn flip_bit(digest: &B256, byte: usize, bit: u8) -> B256 {
    let mut bytes = digest.0;
    bytes[byte] ^= 1 << bit;
    B256::from(bytes)
}

#[test]
fn every_proof_verifies_for_all_small_sizes() {
    for count in 1..=40 {
        let leaf_hashes = digests(count);
        let tree = build_tree(&leaf_hashes).unwrap();

        for (index, leaf) in leaf_hashes.iter().enumerate() {
            let proof = get_proof(&tree, index).unwrap();
            assert!(
                proof.len() <= tree.height(),
                "proof longer than tree height (count {}, index {})",
                count,
                index
            );
            assert!(
                verify_proof(leaf, &proof, &tree.root()),
                "proof failed (count {}, index {})",
                count,
                index
            );
        }
    }
}

#[test]
fn full_allowlist_of_128_entries() {
    let allowlist = leaves(128);
    let tree = AllowlistTree::from_leaves(allowlist.clone()).unwrap();

    // 128 is a power of two: every proof has exactly log2(128) siblings
    assert_eq!(tree.tree().height(), 7);
    for (leaf, proof) in tree.entries().unwrap() {
        assert_eq!(proof.len(), 7);
        assert!(proof.verify(&tree.root(), &leaf.to_hash()));
    }
}

#[test]
fn tampered_proof_element_fails() {
    let leaf_hashes = digests(11);
    let tree = build_tree(&leaf_hashes).unwrap();
    let root = tree.root();

    for (index, leaf) in leaf_hashes.iter().enumerate() {
        let proof = get_proof(&tree, index).unwrap();
        for position in 0..proof.len() {
            for (byte, bit) in [(0usize, 0u8), (15, 3), (31, 7)] {
                let mut tampered = proof.clone();
                tampered[position] = flip_bit(&tampered[position], byte, bit);
                assert!(
                    !verify_proof(leaf, &tampered, &root),
                    "tampered proof verified (index {}, position {})",
                    index,
                    position
                );
            }
        }
    }
}

#[test]
fn tampered_leaf_fails() {
    let leaf_hashes = digests(6);
    let tree = build_tree(&leaf_hashes).unwrap();

    for (index, leaf) in leaf_hashes.iter().enumerate() {
        let proof = get_proof(&tree, index).unwrap();
        for byte in [0usize, 12, 31] {
            let tampered = flip_bit(leaf, byte, 1);
            assert!(!verify_proof(&tampered, &proof, &tree.root()));
        }
    }
}

#[test]
fn swapping_leaves_across_subtrees_changes_root() {
    let leaf_hashes = digests(8);
    let root = build_tree(&leaf_hashes).unwrap().root();

    for (i, j) in [(1, 2), (0, 4), (3, 7)] {
        let mut swapped = leaf_hashes.clone();
        swapped.swap(i, j);
        assert_ne!(build_tree(&swapped).unwrap().root(), root, "swap({}, {})", i, j);
    }
}

#[test]
fn sibling_swaps_and_mirroring_keep_root() {
    let leaf_hashes = digests(8);
    let root = build_tree(&leaf_hashes).unwrap().root();

    // level-0 siblings hash in sorted order
    let mut swapped = leaf_hashes.clone();
    swapped.swap(0, 1);
    assert_eq!(build_tree(&swapped).unwrap().root(), root);

    // reversing a power-of-two list mirrors every level
    let mut reversed = leaf_hashes.clone();
    reversed.reverse();
    assert_eq!(build_tree(&reversed).unwrap().root(), root);
}

#[test]
fn three_leaf_shape_matches_hand_computation() {
    let leaf_hashes = digests(3);
    let (a, b, c) = (leaf_hashes[0], leaf_hashes[1], leaf_hashes[2]);
    let tree = build_tree(&leaf_hashes).unwrap();

    let ab = KeccakSortedHasher::hash_pair(&a, &b);
    assert_eq!(tree.levels()[1], vec![ab, c]);
    assert_eq!(tree.root(), KeccakSortedHasher::hash_pair(&ab, &c));
    assert_eq!(extract_root_from_proof(&c, &[ab]), tree.root());
}
