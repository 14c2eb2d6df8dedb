/*!
# Fixture Schema Definitions

This module defines the file formats shared by the fixture commands:

- allowlist files (JSON array or CSV), produced by `generate-allowlist` and
  consumed by `encode-leaves` / `build-tree`
- `merkleDatas.json`, one record per leaf with its inclusion proof, produced by
  `build-tree` and consumed by `verify-proofs` and contract tests
- `merkleRoot.json`, the root summary

Addresses are written in EIP-55 checksummed form. Amounts are written as JSON
numbers when they fit in a `u64` and as decimal strings otherwise, since JSON
consumers commonly lose precision above 2^53.
*/

use airdrop_merkle::{
    parse_address, parse_amount, parse_digest, Address, AllowlistLeaf, MerkleProof, B256, U256,
};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ================================================================================================
// Allowlist Schema
// ================================================================================================

/// Expected headers for allowlist CSV files in exact order
pub const ALLOWLIST_CSV_HEADERS: &[&str] = &["address", "amount"];

/// One allowlist entry as stored in JSON fixture files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllowlistRow {
    /// Recipient address (checksummed on output, validated on input)
    #[serde(
        deserialize_with = "deserialize_address",
        serialize_with = "serialize_address"
    )]
    pub address: Address,

    /// Claimable amount
    #[serde(
        deserialize_with = "deserialize_amount",
        serialize_with = "serialize_amount"
    )]
    pub amount: U256,
}

/// CSV form of an allowlist row.
///
/// Both columns are read as text and validated by the leaf codec, so that
/// 256-bit amounts are never routed through a lossy numeric type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllowlistCsvRow {
    pub address: String,
    pub amount: String,
}

impl From<AllowlistLeaf> for AllowlistRow {
    fn from(leaf: AllowlistLeaf) -> Self {
        Self {
            address: leaf.address,
            amount: leaf.amount,
        }
    }
}

impl From<AllowlistRow> for AllowlistLeaf {
    fn from(row: AllowlistRow) -> Self {
        AllowlistLeaf::new(row.address, row.amount)
    }
}

impl From<&AllowlistLeaf> for AllowlistCsvRow {
    fn from(leaf: &AllowlistLeaf) -> Self {
        Self {
            address: leaf.address.to_checksum(None),
            amount: leaf.amount.to_string(),
        }
    }
}

impl TryFrom<AllowlistCsvRow> for AllowlistLeaf {
    type Error = airdrop_merkle::MerkleError;

    fn try_from(row: AllowlistCsvRow) -> Result<Self, Self::Error> {
        AllowlistLeaf::parse(&row.address, &row.amount)
    }
}

// ================================================================================================
// Merkle Data Schema
// ================================================================================================

/// Per-leaf output record: the allowlist entry plus its inclusion proof.
///
/// **File**: `merkleDatas.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MerkleDataRow {
    #[serde(
        deserialize_with = "deserialize_address",
        serialize_with = "serialize_address"
    )]
    pub address: Address,

    #[serde(
        deserialize_with = "deserialize_amount",
        serialize_with = "serialize_amount"
    )]
    pub amount: U256,

    /// Sibling digests from leaf to root, `0x`-prefixed hex
    #[serde(
        deserialize_with = "deserialize_digests",
        serialize_with = "serialize_digests"
    )]
    pub proofs: Vec<B256>,
}

impl MerkleDataRow {
    pub fn from_entry(leaf: &AllowlistLeaf, proof: &MerkleProof) -> Self {
        Self {
            address: leaf.address,
            amount: leaf.amount,
            proofs: proof.proof_hashes().to_vec(),
        }
    }

    pub fn leaf(&self) -> AllowlistLeaf {
        AllowlistLeaf::new(self.address, self.amount)
    }
}

// ================================================================================================
// Merkle Root Schema
// ================================================================================================

/// Root summary.
///
/// **File**: `merkleRoot.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MerkleRootRow {
    #[serde(deserialize_with = "deserialize_digest", serialize_with = "serialize_digest")]
    pub root: B256,
    pub leaf_count: usize,
    pub height: usize,
}

// ================================================================================================
// Custom Serde Functions
// ================================================================================================

fn deserialize_address<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_address(&s).map_err(de::Error::custom)
}

fn serialize_address<S>(address: &Address, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&address.to_checksum(None))
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = U256;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-negative integer below 2^256, as a number or string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<U256, E> {
        Ok(U256::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<U256, E> {
        Ok(U256::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<U256, E> {
        u64::try_from(v)
            .map(U256::from)
            .map_err(|_| E::custom(format!("Amount out of range: {}: amount must be non-negative", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<U256, E> {
        Err(E::custom(format!(
            "Amount out of range: {}: not an integer, use a decimal string for large amounts",
            v
        )))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<U256, E> {
        parse_amount(v).map_err(E::custom)
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AmountVisitor)
}

fn serialize_amount<S>(amount: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if *amount <= U256::from(u64::MAX) {
        // fits in the lowest limb
        serializer.serialize_u64(amount.as_limbs()[0])
    } else {
        serializer.serialize_str(&amount.to_string())
    }
}

fn deserialize_digest<'de, D>(deserializer: D) -> Result<B256, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_digest(&s).map_err(de::Error::custom)
}

fn serialize_digest<S>(digest: &B256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("0x{}", hex::encode(digest)))
}

fn deserialize_digests<'de, D>(deserializer: D) -> Result<Vec<B256>, D::Error>
where
    D: Deserializer<'de>,
{
    let strings = Vec::<String>::deserialize(deserializer)?;
    strings
        .iter()
        .map(|s| parse_digest(s).map_err(de::Error::custom))
        .collect()
}

fn serialize_digests<S>(digests: &[B256], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(digests.iter().map(|d| format!("0x{}", hex::encode(d))))
}

// ================================================================================================
// Tests
// ================================================================================================
