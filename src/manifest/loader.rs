//! Reading and writing manifest files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::error::{MergeError, Result};
use crate::value::{from_json, to_json_pretty, Map, Value};

/// Parses manifest text. `path` is only used in errors.
pub fn parse_manifest(path: &Path, content: &str) -> Result<Map> {
    match from_json(content).map_err(|e| MergeError::malformed_json(path, e))? {
        Value::Map(map) => Ok(map),
        other => Err(MergeError::not_an_object(path, other.type_name())),
    }
}

/// Reads and parses a manifest file.
pub fn load_manifest(path: &Path) -> Result<Map> {
    debug!(path = %path.display(), "reading manifest");
    let content = fs::read_to_string(path).map_err(|e| MergeError::io(path, e))?;
    parse_manifest(path, &content)
}

/// Loads source manifests in order.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Map>> {
    paths.iter().map(|p| load_manifest(p.as_ref())).collect()
}

/// Loads the target manifest.
///
/// A missing target is an error unless `create_new` is set, in which case an
/// empty manifest is returned and the file is only written once the merge
/// has completed.
pub fn load_target(path: &Path, create_new: bool) -> Result<Map> {
    if path.exists() {
        if create_new {
            info!(
                "File {} already exists. No file will be created.",
                path.display()
            );
        }
        return load_manifest(path);
    }

    if !create_new {
        return Err(MergeError::target_file_missing(path));
    }

    info!("File {} does not exist, it will be created.", path.display());
    Ok(Map::new())
}

/// Serializes a manifest the way it is written to disk: tab-indented with a
/// trailing newline.
pub fn render_manifest(manifest: &Map) -> Result<String> {
    let mut out = to_json_pretty(manifest).map_err(MergeError::Serialize)?;
    out.push('\n');
    Ok(out)
}

/// Writes a manifest in a single write call.
pub fn write_manifest(path: &Path, manifest: &Map) -> Result<()> {
    let rendered = render_manifest(manifest)?;
    fs::write(path, rendered).map_err(|e| MergeError::io(path, e))?;
    debug!(path = %path.display(), "wrote manifest");
    Ok(())
}
