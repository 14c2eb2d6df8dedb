use alloy_primitives::{Address, B256, U256};

use crate::error::{MerkleError, MerkleResult};
use crate::hasher::{Hasher, KeccakSortedHasher};

/// Length of the packed leaf preimage: 20 address bytes followed by a 32-byte
/// big-endian amount.
pub const PACKED_LEAF_LEN: usize = 20 + 32;

/// One allowlist entry: the data hashed to form a leaf of the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AllowlistLeaf {
    /// The recipient.
    pub address: Address,
    /// Amount the recipient may claim.
    pub amount: U256,
}

impl AllowlistLeaf {
    pub fn new(address: Address, amount: U256) -> Self {
        Self { address, amount }
    }

    /// Build a leaf from its textual form, validating both fields.
    pub fn parse(address: &str, amount: &str) -> MerkleResult<Self> {
        Ok(Self {
            address: parse_address(address)?,
            amount: parse_amount(amount)?,
        })
    }

    /// `abi.encodePacked(address, uint256)`
    pub fn packed_bytes(&self) -> [u8; PACKED_LEAF_LEN] {
        let mut out = [0u8; PACKED_LEAF_LEN];
        out[..20].copy_from_slice(self.address.as_slice());
        out[20..].copy_from_slice(&self.amount.to_be_bytes::<32>());
        out
    }

    /// `keccak256(abi.encodePacked(address, uint256))`
    pub fn to_hash(&self) -> B256 {
        KeccakSortedHasher::hash(&self.packed_bytes())
    }
}

/// Hashes an `AllowlistLeaf` into its 32-byte leaf digest.
pub fn hash_leaf(leaf: &AllowlistLeaf) -> B256 {
    leaf.to_hash()
}

/// Parse and hash a textual `(address, amount)` pair.
pub fn encode_leaf(address: &str, amount: &str) -> MerkleResult<B256> {
    AllowlistLeaf::parse(address, amount).map(|leaf| leaf.to_hash())
}

/// Parse a 20-byte hex address.
///
/// The `0x` prefix is optional. All-lowercase and all-uppercase digits are
/// accepted as-is; mixed case must be a valid EIP-55 checksum.
pub fn parse_address(input: &str) -> MerkleResult<Address> {
    let trimmed = input.trim();
    let body = strip_hex_prefix(trimmed);

    if !body.is_ascii() {
        return Err(MerkleError::InvalidAddress(format!(
            "{}: non-hex characters",
            trimmed
        )));
    }

    if body.len() != 40 {
        return Err(MerkleError::InvalidAddress(format!(
            "{}: expected 40 hex digits, found {}",
            trimmed,
            body.len()
        )));
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(body, &mut bytes)
        .map_err(|e| MerkleError::InvalidAddress(format!("{}: {}", trimmed, e)))?;
    let address = Address::from(bytes);

    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        let checksummed = address.to_checksum(None);
        if &checksummed[2..] != body {
            return Err(MerkleError::InvalidAddress(format!(
                "{}: checksum mismatch (expected {})",
                trimmed, checksummed
            )));
        }
    }

    Ok(address)
}

/// Parse a non-negative integer amount that must fit in 256 bits.
///
/// Accepts decimal or `0x`-prefixed hex. Values that do not fit are rejected,
/// never truncated.
pub fn parse_amount(input: &str) -> MerkleResult<U256> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MerkleError::AmountOutOfRange("empty amount".to_string()));
    }
    if trimmed.starts_with('-') {
        return Err(MerkleError::AmountOutOfRange(format!(
            "{}: amount must be non-negative",
            trimmed
        )));
    }

    let parsed = if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
        let body = &trimmed[2..];
        if body.is_empty() || !body.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MerkleError::AmountOutOfRange(format!(
                "{}: not a hex integer",
                trimmed
            )));
        }
        U256::from_str_radix(body, 16)
    } else {
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(MerkleError::AmountOutOfRange(format!(
                "{}: not a decimal integer",
                trimmed
            )));
        }
        U256::from_str_radix(trimmed, 10)
    };

    parsed.map_err(|e| MerkleError::AmountOutOfRange(format!("{}: {}", trimmed, e)))
}

/// Parse a `0x`-prefixed (or bare) 32-byte hex digest.
pub fn parse_digest(input: &str) -> MerkleResult<B256> {
    let body = strip_hex_prefix(input.trim());
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(body, &mut bytes)
        .map_err(|e| MerkleError::InvalidDigest(format!("{}: {}", input, e)))?;
    Ok(B256::from(bytes))
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
