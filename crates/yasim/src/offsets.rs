//! Offsets comment extraction.
//!
//! Aircraft maintainers often keep the FDM and the 3D model in slightly
//! different frames and record the difference in a one-line comment:
//!
//! ```xml
//! <!-- offsets: x=0.12 z=-0.4 p=2 -->
//! ```
//!
//! This runs over the raw text before XML parsing so the correction is known
//! before the first primitive is built.

use log::{info, warn};

use crate::types::OffsetCorrection;
use crate::{Result, YasimError};

/// Default keyword introducing the offsets comment
pub const OFFSETS_KEYWORD: &str = "offsets";

/// Scan `text` line by line for `<!-- <keyword>: k=v ... -->` comments.
///
/// The keyword match is case-insensitive and the comment must sit on a line
/// of its own. Repeated comments overwrite earlier values key by key.
/// Returns `None` when no assignment was found at all.
pub fn extract_offsets(text: &str, keyword: &str) -> Result<Option<OffsetCorrection>> {
    let prefix = format!("{keyword}:");
    let mut offsets = OffsetCorrection::default();
    let mut assignments = 0;
    let mut comments = 0;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let Some(body) = comment_body(raw.trim()) else {
            continue;
        };
        let Some(rest) = strip_keyword(body, &prefix) else {
            continue;
        };

        comments += 1;
        if comments > 1 {
            warn!("Multiple offsets comments, line {line_no} overrides earlier values");
        }

        let malformed = || YasimError::MalformedOffsets {
            line: line_no,
            content: raw.trim().to_string(),
        };

        for assignment in rest.split_whitespace() {
            let (key, value) = assignment.split_once('=').ok_or_else(malformed)?;
            if key.is_empty() {
                return Err(malformed());
            }
            let value: f64 = value.parse().map_err(|_| malformed())?;

            if !offsets.set(key, value) {
                warn!("Ignoring unknown offsets key '{key}' at line {line_no}");
            }
            assignments += 1;
        }
    }

    if assignments == 0 {
        return Ok(None);
    }

    info!(
        "Using offsets x={} y={} z={} h={} p={} r={}",
        offsets.x, offsets.y, offsets.z, offsets.heading, offsets.pitch, offsets.roll
    );
    Ok(Some(offsets))
}

fn comment_body(line: &str) -> Option<&str> {
    line.strip_prefix("<!--")?
        .strip_suffix("-->")
        .map(str::trim)
}

fn strip_keyword<'a>(body: &'a str, prefix: &str) -> Option<&'a str> {
    let head = body.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &body[prefix.len()..])
}
