/*!
# Fixture Validation & I/O

Reading and writing of allowlist and merkle data files. Every reader validates
what it loads (headers, address checksums, amount ranges, non-empty input,
unique addresses) so that downstream tree building never sees malformed data.
*/

use crate::{
    errors::{FixtureError, FixtureResult},
    schemas::{AllowlistCsvRow, AllowlistRow, MerkleDataRow, MerkleRootRow, ALLOWLIST_CSV_HEADERS},
};
use airdrop_merkle::AllowlistLeaf;
use csv::{Reader, Writer};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

// ================================================================================================
// Allowlist Reading
// ================================================================================================

/// Read an allowlist, choosing the format from the file extension
/// (`.json` or `.csv`).
pub fn read_allowlist<P: AsRef<Path>>(path: P) -> FixtureResult<Vec<AllowlistLeaf>> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("json") => read_allowlist_json(path),
        Some("csv") => read_allowlist_csv(path),
        _ => Err(FixtureError::InvalidFormat(format!(
            "{}: unsupported allowlist format (expected .json or .csv)",
            path.display()
        ))),
    }
}

/// Read and validate a JSON allowlist (an array of `{address, amount}`)
pub fn read_allowlist_json<P: AsRef<Path>>(path: P) -> FixtureResult<Vec<AllowlistLeaf>> {
    let path = path.as_ref();
    let rows: Vec<AllowlistRow> = read_json(path)?;
    let leaves: Vec<AllowlistLeaf> = rows.into_iter().map(AllowlistLeaf::from).collect();

    validate_allowlist(&leaves, &path.display().to_string())?;
    debug!(path = %path.display(), entries = leaves.len(), "Read JSON allowlist");
    Ok(leaves)
}

/// Read and validate a CSV allowlist
pub fn read_allowlist_csv<P: AsRef<Path>>(path: P) -> FixtureResult<Vec<AllowlistLeaf>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    // Validate headers
    let headers = rdr.headers()?;
    validate_headers(headers.iter(), ALLOWLIST_CSV_HEADERS, "allowlist csv")?;

    // Read and deserialize rows
    let mut leaves = Vec::new();
    for result in rdr.deserialize() {
        let row: AllowlistCsvRow = result?;
        leaves.push(AllowlistLeaf::try_from(row)?);
    }

    validate_allowlist(&leaves, &path.display().to_string())?;
    debug!(path = %path.display(), entries = leaves.len(), "Read CSV allowlist");
    Ok(leaves)
}

// ================================================================================================
// Allowlist Writing
// ================================================================================================

/// Write an allowlist as a JSON array
pub fn write_allowlist_json<P: AsRef<Path>>(path: P, leaves: &[AllowlistLeaf]) -> FixtureResult<()> {
    let rows: Vec<AllowlistRow> = leaves.iter().copied().map(AllowlistRow::from).collect();
    write_json(path, &rows)
}

/// Write an allowlist as CSV with `address,amount` headers
pub fn write_allowlist_csv<P: AsRef<Path>>(path: P, leaves: &[AllowlistLeaf]) -> FixtureResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    // Write data rows (csv crate automatically writes headers)
    for leaf in leaves {
        wtr.serialize(AllowlistCsvRow::from(leaf))?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Merkle Data
// ================================================================================================

/// Write per-leaf merkle data records (`merkleDatas.json`)
pub fn write_merkle_datas_json<P: AsRef<Path>>(path: P, rows: &[MerkleDataRow]) -> FixtureResult<()> {
    write_json(path, rows)
}

/// Read per-leaf merkle data records
pub fn read_merkle_datas_json<P: AsRef<Path>>(path: P) -> FixtureResult<Vec<MerkleDataRow>> {
    let path = path.as_ref();
    let rows: Vec<MerkleDataRow> = read_json(path)?;

    if rows.is_empty() {
        return Err(FixtureError::SchemaValidation(format!(
            "{}: merkle data file is empty",
            path.display()
        )));
    }

    Ok(rows)
}

/// Write the root summary (`merkleRoot.json`)
pub fn write_merkle_root_json<P: AsRef<Path>>(path: P, row: &MerkleRootRow) -> FixtureResult<()> {
    write_json(path, row)
}

pub fn read_merkle_root_json<P: AsRef<Path>>(path: P) -> FixtureResult<MerkleRootRow> {
    read_json(path)
}

// ================================================================================================
// Output Directory
// ================================================================================================

/// Create the output directory (and parents) if it does not exist yet
pub fn ensure_output_dir<P: AsRef<Path>>(dir: P) -> FixtureResult<PathBuf> {
    let dir = dir.as_ref();
    if !dir.exists() {
        debug!(dir = %dir.display(), "Creating output directory");
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Write a raw text artifact (such as an ABI hex string) into `dir/file_name`
pub fn write_hex_artifact<P: AsRef<Path>>(
    dir: P,
    file_name: &str,
    data: &str,
) -> FixtureResult<PathBuf> {
    let path = ensure_output_dir(dir)?.join(file_name);
    fs::write(&path, data)?;
    Ok(path)
}

// ================================================================================================
// Validation
// ================================================================================================

/// Validate a loaded allowlist
///
/// Ensures:
/// - The allowlist is not empty
/// - No address appears twice
pub fn validate_allowlist(leaves: &[AllowlistLeaf], source: &str) -> FixtureResult<()> {
    if leaves.is_empty() {
        return Err(FixtureError::SchemaValidation(format!(
            "{}: allowlist is empty",
            source
        )));
    }

    let mut seen = HashSet::with_capacity(leaves.len());
    for (index, leaf) in leaves.iter().enumerate() {
        if !seen.insert(leaf.address) {
            return Err(FixtureError::SchemaValidation(format!(
                "{}: duplicate address {} at entry {}",
                source,
                leaf.address.to_checksum(None),
                index + 1
            )));
        }
    }

    Ok(())
}

fn validate_headers<'a, I>(actual: I, expected: &[&str], file_type: &str) -> FixtureResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let actual_headers: Vec<&str> = actual.collect();

    if actual_headers.len() != expected.len() {
        return Err(FixtureError::SchemaValidation(format!(
            "{}: expected {} headers, found {}",
            file_type,
            expected.len(),
            actual_headers.len()
        )));
    }

    for (i, (actual, expected)) in actual_headers.iter().zip(expected.iter()).enumerate() {
        if actual != expected {
            return Err(FixtureError::SchemaValidation(format!(
                "{}: header {} should be '{}', found '{}'",
                file_type,
                i + 1,
                expected,
                actual
            )));
        }
    }

    Ok(())
}

// ================================================================================================
// JSON Helpers
// ================================================================================================

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> FixtureResult<T> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Pretty-print with a one-space indent, the layout of the existing fixtures
fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> FixtureResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b" "));
    value.serialize(&mut ser)?;
    writer.flush()?;
    Ok(())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

// ================================================================================================
// Tests
// ================================================================================================
