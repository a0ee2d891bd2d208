use std::path::Path;

use crate::error::EtextError;

/// Read an etext fully into memory.
///
/// Non-UTF-8 contents are reported the same way as a missing file: the
/// `io::Error` from `read_to_string` carries `InvalidData`.
pub fn load(path: &Path) -> Result<String, EtextError> {
    let text = std::fs::read_to_string(path).map_err(|source| EtextError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded etext");
    Ok(text)
}
