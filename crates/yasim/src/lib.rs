//! Streaming parser for YASim flight dynamics configurations.
//!
//! A YASim file describes an aircraft as a flat-ish XML tree of wings,
//! fuselages, engines, gear and masses. [`Scene::parse`] walks it once and
//! produces an ordered [`Scene`] of typed [`Primitive`]s in scene space,
//! ready for a [`Renderer`] such as [`ScadRenderer`].
//!
//! ```
//! let xml = r#"<airplane mass="1000">
//!   <wing x="0" y="0.5" z="0" length="5" chord="1.2">
//!     <flap0 start="0.2" end="0.8"/>
//!   </wing>
//!   <gear x="1" y="2" z="3"/>
//! </airplane>"#;
//!
//! let scene = yasim::Scene::parse(xml).unwrap();
//! let ids: Vec<_> = scene.iter().map(|p| p.id()).collect();
//! assert_eq!(ids, ["YASim_wing#0", "YASim_gear#0"]);
//! ```

pub mod dispatch;
pub mod math;
pub mod offsets;
mod parse;
pub mod render;
pub mod scene;
pub mod types;
pub mod units;

pub use parse::ParseOptions;
pub use render::{ScadOptions, ScadRenderer};
pub use scene::{Renderer, Scene};
pub use types::*;

use std::path::Path;
use thiserror::Error;

/// Tag every YASim configuration must start with
pub const ROOT_TAG: &str = "airplane";

#[derive(Debug, Error)]
pub enum YasimError {
    #[error("XML parse error at line {line}, column {column}: {source}")]
    Xml {
        line: usize,
        column: usize,
        source: quick_xml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{message} at line {line}")]
    Structure { message: String, line: usize },

    #[error("Missing required attribute '{attr}' on element '{element}' at line {line}")]
    MissingAttribute {
        element: &'static str,
        attr: &'static str,
        line: usize,
    },

    #[error("Invalid value '{value}' for attribute '{attr}' on element '{element}' at line {line}")]
    InvalidAttribute {
        element: &'static str,
        attr: &'static str,
        value: String,
        line: usize,
    },

    #[error("Malformed offsets comment at line {line}: {content}")]
    MalformedOffsets { line: usize, content: String },

    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),
}

impl YasimError {
    /// 1-based source line the error refers to, if known
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Xml { line, .. }
            | Self::Structure { line, .. }
            | Self::MissingAttribute { line, .. }
            | Self::InvalidAttribute { line, .. }
            | Self::MalformedOffsets { line, .. } => Some(*line),
            Self::Io(_) | Self::Render(_) => None,
        }
    }

    /// 1-based column, only known for errors raised by the XML reader
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::Xml { column, .. } => Some(*column),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, YasimError>;

impl Scene {
    /// Parse a YASim configuration with default options
    pub fn parse(xml: &str) -> Result<Self> {
        Self::parse_with_options(xml, &ParseOptions::default())
    }

    /// Parse a YASim configuration.
    ///
    /// The offsets comment is extracted from the raw text first; the
    /// resulting transform is then applied to every primitive while the
    /// document is streamed.
    pub fn parse_with_options(xml: &str, options: &ParseOptions) -> Result<Self> {
        let offsets = offsets::extract_offsets(xml, &options.offsets_keyword)?;
        let transform = WorldTransform::new(offsets.as_ref());

        let scene = parse::Parser::new(xml, transform, options).run()?;
        Ok(scene.with_offsets(offsets))
    }

    /// Parse a YASim configuration from file
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self> {
        let xml = std::fs::read_to_string(path)?;
        Self::parse(&xml)
    }
}
