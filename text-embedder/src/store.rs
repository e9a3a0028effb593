//! JSON persistence for [`EmbeddingRecord`] lists.
//!
//! Files are UTF-8, pretty-printed with 4-space indentation, and keep
//! non-ASCII text unescaped. Writes overwrite the destination in place; a
//! crash mid-write can leave a truncated file.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::fs;
use tracing::debug;

use crate::errors::{EmbedError, Result};
use crate::record::EmbeddingRecord;

const INDENT: &[u8] = b"    ";

/// Render `records` as a pretty JSON array.
pub fn to_json_bytes(records: &[EmbeddingRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `records` to `path`, replacing any existing file.
///
/// Creates parent directories as needed.
pub async fn write_records(path: &Path, records: &[EmbeddingRecord]) -> Result<()> {
    let bytes = to_json_bytes(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| EmbedError::io(parent.display(), e))?;
    }

    fs::write(path, &bytes)
        .await
        .map_err(|e| EmbedError::io(path.display(), e))?;

    debug!(path = %path.display(), records = records.len(), bytes = bytes.len(), "records written");
    Ok(())
}

/// Load a record list previously written by [`write_records`].
pub async fn read_records(path: &Path) -> Result<Vec<EmbeddingRecord>> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| EmbedError::io(path.display(), e))?;
    Ok(serde_json::from_slice(&bytes)?)
}
