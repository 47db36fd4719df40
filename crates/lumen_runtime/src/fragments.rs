//! Loading runtime fragments from disk.

use std::fs;
use std::path::Path;

use lumen_foundation::{Error, Result};
use lumen_language::{FragmentKind, RuntimeFragments};
use tracing::debug;

/// Reads every runtime fragment from `dir`.
///
/// # Errors
///
/// Returns an error naming the first file that cannot be read.
pub fn load_fragments<P: AsRef<Path>>(dir: P) -> Result<RuntimeFragments> {
    let dir = dir.as_ref();
    let mut fragments = RuntimeFragments::new();

    for kind in FragmentKind::ALL {
        let path = dir.join(kind.file_name());
        let text = fs::read_to_string(&path).map_err(|e| {
            Error::io(format!(
                "failed to read runtime fragment '{}': {e}",
                path.display()
            ))
        })?;
        debug!(fragment = %kind, bytes = text.len(), "loaded runtime fragment");
        fragments.set(kind, text);
    }

    Ok(fragments)
}
