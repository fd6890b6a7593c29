use std::path::{Path, PathBuf};

use anyhow::Result;
use yasim::{Scene, YasimError};

/// A parse error together with the source excerpt it points at
#[derive(Debug, thiserror::Error)]
#[error("Failed to parse {}", path.display())]
pub struct ParseFailure {
    pub path: PathBuf,
    pub snippet: Option<String>,
    #[source]
    pub source: YasimError,
}

/// Parse `content`, attaching a source excerpt to located errors
pub fn parse_scene(path: &Path, content: &str) -> Result<Scene> {
    Scene::parse(content).map_err(|source| {
        let snippet = source
            .line()
            .and_then(|line| snippet(path, content, line, source.column()));
        ParseFailure {
            path: path.to_path_buf(),
            snippet,
            source,
        }
        .into()
    })
}

/// Compiler style excerpt of `line`, with a caret under `column` when known
/// or under the whole line otherwise.
pub fn snippet(path: &Path, content: &str, line: usize, column: Option<usize>) -> Option<String> {
    let text = content.lines().nth(line.checked_sub(1)?)?;
    let gutter = line.to_string();
    let pad = " ".repeat(gutter.len());

    let indent = text.chars().take_while(|c| c.is_whitespace()).count();
    let (offset, width) = match column {
        Some(column) => {
            let offset = text
                .char_indices()
                .take_while(|(i, _)| *i < column.saturating_sub(1))
                .count();
            (offset, 1)
        }
        None => (indent, text.trim().chars().count().max(1)),
    };

    let location = match column {
        Some(column) => format!("{}:{}:{}", path.display(), line, column),
        None => format!("{}:{}", path.display(), line),
    };

    Some(format!(
        "{pad}--> {location}\n{pad} |\n{gutter} | {text}\n{pad} | {}{}",
        " ".repeat(offset),
        "^".repeat(width)
    ))
}
