pub mod build_tree;
pub mod encode_leaves;
pub mod generate;
pub mod generate_allowlist;
pub mod verify_proofs;
