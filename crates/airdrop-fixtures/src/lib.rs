/*!
# Airdrop Fixture Files

This crate defines the fixture files exchanged between the fixture commands
and downstream contract tests.

## Purpose

This crate serves as the **single source of truth** for:

- **Allowlist files** (`allowlist.json` / `allowlist.csv`): `{address, amount}`
  entries, produced by `generate-allowlist`, consumed by `build-tree`
- **Merkle data** (`merkleDatas.json`): `{address, amount, proofs}` per leaf
- **Merkle root** (`merkleRoot.json`): `{root, leafCount, height}`
- **ABI artifacts** (`hashleaves.json`, `hashMerkleDatas.json`): the same data
  `abi.encode`d as a hex string
- **Fixture generation**: topping up a static allowlist with random unique
  entries

## Usage

```rust
use airdrop_fixtures::{
    read_allowlist, top_up_allowlist, write_allowlist_json, FixtureResult, RandomLeafGenerator,
};

fn example() -> FixtureResult<()> {
    let base = read_allowlist("allowlist.json")?;
    let mut generator = RandomLeafGenerator::from_seed(42, 10, true)?;

    let allowlist = top_up_allowlist(base, &mut generator, 128)?;
    write_allowlist_json("data/allowlist.json", &allowlist)?;

    Ok(())
}
```
*/

pub mod abi;
pub mod errors;
pub mod generator;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use abi::{encode_allowlist, encode_merkle_datas};
pub use errors::{FixtureError, FixtureResult};
pub use generator::{top_up_allowlist, LeafSource, RandomLeafGenerator};
pub use schemas::{AllowlistCsvRow, AllowlistRow, MerkleDataRow, MerkleRootRow};
pub use validation::{
    ensure_output_dir, read_allowlist, read_allowlist_csv, read_allowlist_json,
    read_merkle_datas_json, read_merkle_root_json, validate_allowlist, write_allowlist_csv,
    write_allowlist_json, write_hex_artifact, write_merkle_datas_json, write_merkle_root_json,
};
