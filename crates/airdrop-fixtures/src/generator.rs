/*!
# Allowlist Fixture Generation

Random `(address, amount)` entries for filling a static allowlist up to a fixed
size. The random source sits behind [`LeafSource`] so tests and callers can
inject their own sequence.
*/

use airdrop_merkle::{Address, AllowlistLeaf, U256};
use k256::ecdsa::SigningKey;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::errors::{FixtureError, FixtureResult};

/// Number of consecutive duplicate draws tolerated before giving up.
pub const MAX_CONSECUTIVE_DUPLICATES: usize = 1_000;

/// Source of allowlist entries, called once per entry needed.
pub trait LeafSource {
    fn next_leaf(&mut self) -> AllowlistLeaf;
}

/// Random entries from a seeded RNG.
///
/// Each address belongs to a freshly sampled secp256k1 key (the key itself is
/// dropped immediately). Amounts are uniform in `[1, max_amount - 1]` when
/// enabled, otherwise zero.
pub struct RandomLeafGenerator {
    rng: StdRng,
    max_amount: u64,
    assign_amounts: bool,
}

impl RandomLeafGenerator {
    /// Deterministic generator: the same seed yields the same sequence.
    pub fn from_seed(seed: u64, max_amount: u64, assign_amounts: bool) -> FixtureResult<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed), max_amount, assign_amounts)
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy(max_amount: u64, assign_amounts: bool) -> FixtureResult<Self> {
        Self::with_rng(StdRng::from_entropy(), max_amount, assign_amounts)
    }

    fn with_rng(rng: StdRng, max_amount: u64, assign_amounts: bool) -> FixtureResult<Self> {
        if assign_amounts && max_amount < 2 {
            return Err(FixtureError::SchemaValidation(format!(
                "max_amount must be at least 2 to draw amounts from [1, max_amount - 1], got {}",
                max_amount
            )));
        }

        Ok(Self {
            rng,
            max_amount,
            assign_amounts,
        })
    }

    fn next_address(&mut self) -> Address {
        let signing_key = SigningKey::random(&mut self.rng);
        Address::from_private_key(&signing_key)
    }

    fn next_amount(&mut self) -> U256 {
        if self.assign_amounts {
            U256::from(self.rng.gen_range(1..self.max_amount))
        } else {
            U256::ZERO
        }
    }
}

impl LeafSource for RandomLeafGenerator {
    fn next_leaf(&mut self) -> AllowlistLeaf {
        let address = self.next_address();
        let amount = self.next_amount();
        AllowlistLeaf::new(address, amount)
    }
}

/// Extend `base` with generated entries until it holds `target_size` entries.
///
/// Generated entries whose address is already present are skipped, so every
/// address in the result is unique among the generated entries and distinct
/// from every base address. A base list at or above `target_size` is returned
/// unchanged.
pub fn top_up_allowlist<S: LeafSource>(
    base: Vec<AllowlistLeaf>,
    source: &mut S,
    target_size: usize,
) -> FixtureResult<Vec<AllowlistLeaf>> {
    let mut allowlist = base;
    if allowlist.len() >= target_size {
        debug!(
            entries = allowlist.len(),
            target_size, "Allowlist already at target size"
        );
        return Ok(allowlist);
    }

    let mut seen: HashSet<Address> = allowlist.iter().map(|leaf| leaf.address).collect();
    let base_len = allowlist.len();
    let mut consecutive_duplicates = 0;

    while allowlist.len() < target_size {
        let leaf = source.next_leaf();

        if !seen.insert(leaf.address) {
            consecutive_duplicates += 1;
            if consecutive_duplicates >= MAX_CONSECUTIVE_DUPLICATES {
                return Err(FixtureError::GeneratorExhausted(format!(
                    "{} consecutive duplicate addresses after {} of {} entries",
                    consecutive_duplicates,
                    allowlist.len(),
                    target_size
                )));
            }
            continue;
        }

        consecutive_duplicates = 0;
        allowlist.push(leaf);
    }

    info!(
        base = base_len,
        generated = allowlist.len() - base_len,
        total = allowlist.len(),
        "Topped up allowlist"
    );

    Ok(allowlist)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through a fixed list of addresses.
    struct CyclingSource {
        addresses: Vec<Address>,
        next: usize,
    }

    impl LeafSource for CyclingSource {
        fn next_leaf(&mut self) -> AllowlistLeaf {
            let address = self.addresses[self.next % self.addresses.len()];
            self.next += 1;
            AllowlistLeaf::new(address, U256::from(1u64))
        }
    }

    #[test]
    fn test_same_seed_same_leaves() {
        let mut first = RandomLeafGenerator::from_seed(42, 10, true).unwrap();
        let mut second = RandomLeafGenerator::from_seed(42, 10, true).unwrap();
        let mut other = RandomLeafGenerator::from_seed(43, 10, true).unwrap();

        let a: Vec<_> = (0..5).map(|_| first.next_leaf()).collect();
        let b: Vec<_> = (0..5).map(|_| second.next_leaf()).collect();
        let c: Vec<_> = (0..5).map(|_| other.next_leaf()).collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_amounts_in_range() {
        let mut generator = RandomLeafGenerator::from_seed(7, 10, true).unwrap();
        for _ in 0..200 {
            let amount = generator.next_leaf().amount;
            assert!(amount >= U256::from(1u64) && amount <= U256::from(9u64));
        }
    }

    #[test]
    fn test_amounts_disabled() {
        let mut generator = RandomLeafGenerator::from_seed(7, 10, false).unwrap();
        for _ in 0..20 {
            assert_eq!(generator.next_leaf().amount, U256::ZERO);
        }
    }

    #[test]
    fn test_max_amount_too_small() {
        assert!(RandomLeafGenerator::from_seed(1, 1, true).is_err());
        // irrelevant when amounts are not drawn
        assert!(RandomLeafGenerator::from_seed(1, 0, false).is_ok());
    }

    #[test]
    fn test_top_up_reaches_target_with_unique_addresses() {
        let base = vec![
            AllowlistLeaf::new(Address::repeat_byte(0x01), U256::from(5u64)),
            AllowlistLeaf::new(Address::repeat_byte(0x02), U256::from(6u64)),
        ];
        let mut generator = RandomLeafGenerator::from_seed(42, 10, true).unwrap();

        let allowlist = top_up_allowlist(base.clone(), &mut generator, 128).unwrap();

        assert_eq!(allowlist.len(), 128);
        assert_eq!(&allowlist[..2], base.as_slice(), "Base entries come first");

        let unique: HashSet<Address> = allowlist.iter().map(|leaf| leaf.address).collect();
        assert_eq!(unique.len(), 128);
    }

    #[test]
    fn test_top_up_skips_existing_addresses() {
        let base = vec![AllowlistLeaf::new(Address::repeat_byte(0x01), U256::from(5u64))];
        let mut source = CyclingSource {
            addresses: vec![
                Address::repeat_byte(0x01),
                Address::repeat_byte(0x02),
                Address::repeat_byte(0x02),
                Address::repeat_byte(0x03),
            ],
            next: 0,
        };

        let allowlist = top_up_allowlist(base, &mut source, 3).unwrap();
        let addresses: Vec<Address> = allowlist.iter().map(|leaf| leaf.address).collect();

        assert_eq!(
            addresses,
            vec![
                Address::repeat_byte(0x01),
                Address::repeat_byte(0x02),
                Address::repeat_byte(0x03),
            ]
        );
        assert_eq!(allowlist[0].amount, U256::from(5u64), "Base entry is kept as-is");
    }

    #[test]
    fn test_top_up_base_already_full() {
        let base: Vec<AllowlistLeaf> = (1..=4u8)
            .map(|i| AllowlistLeaf::new(Address::repeat_byte(i), U256::from(1u64)))
            .collect();
        let mut generator = RandomLeafGenerator::from_seed(1, 10, true).unwrap();

        let allowlist = top_up_allowlist(base.clone(), &mut generator, 3).unwrap();
        assert_eq!(allowlist, base);
    }

    #[test]
    fn test_top_up_exhausted_source() {
        let mut source = CyclingSource {
            addresses: vec![Address::repeat_byte(0x01)],
            next: 0,
        };

        let result = top_up_allowlist(vec![], &mut source, 2);
        assert!(matches!(result, Err(FixtureError::GeneratorExhausted(_))));
    }
}
