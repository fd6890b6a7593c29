#![allow(dead_code)]

use std::io::Read;
use std::path::Path;

/// Load and decompress a zstd-compressed test file
///
/// Test configurations in tests/data are stored as `.xml.zst` files, the
/// same format the `yasim2scad` tool accepts directly.
pub fn load_compressed_xml(path: &Path) -> String {
    let compressed_path = path.with_extension("xml.zst");
    let file = std::fs::File::open(&compressed_path)
        .unwrap_or_else(|_| panic!("Failed to open compressed test file: {:?}", compressed_path));

    let mut decoder = zstd::Decoder::new(file).expect("Failed to create zstd decoder");
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .expect("Failed to decompress test file");

    content
}

/// Parse a YASim configuration from compressed test data
pub fn parse_compressed(path: &str) -> Result<yasim::Scene, yasim::YasimError> {
    let content = load_compressed_xml(Path::new(path));
    yasim::Scene::parse(&content)
}

pub const EPS: f64 = 1e-9;

pub fn assert_close(actual: glam::DVec3, expected: glam::DVec3) {
    assert!(
        (actual - expected).length() < EPS,
        "expected {expected}, got {actual}"
    );
}
