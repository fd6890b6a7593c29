use std::path::Path;

use anyhow::{Context, Result};
use yasim::Scene;

use super::diagnostic;

/// Leading bytes of a zstd frame
const ZSTD_MAGIC: [u8; 4] = [0x28, 0xb5, 0x2f, 0xfd];

/// Read a YASim configuration as text, decompressing zstd frames whatever the
/// file is called
pub fn read_config(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let bytes = if bytes.starts_with(&ZSTD_MAGIC) {
        zstd::decode_all(bytes.as_slice())
            .with_context(|| format!("Failed to decompress {}", path.display()))?
    } else {
        bytes
    };
    String::from_utf8(bytes).with_context(|| format!("{} is not UTF-8 text", path.display()))
}

/// Read and parse `path`; parse errors carry a source excerpt
pub fn load_scene(path: &Path) -> Result<Scene> {
    let content = read_config(path)?;
    diagnostic::parse_scene(path, &content)
}
