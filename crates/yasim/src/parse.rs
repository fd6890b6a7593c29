use std::collections::HashMap;

use log::{debug, trace, warn};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::dispatch::{self, Attrs, Role};
use crate::offsets::OFFSETS_KEYWORD;
use crate::scene::Scene;
use crate::types::{Primitive, WorldTransform};
use crate::{ROOT_TAG, Result, YasimError};

/// Knobs for [`Scene::parse_with_options`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keyword introducing the offsets comment
    pub offsets_keyword: String,
    /// Leading part of every primitive identity, `<prefix>_<tag>#<n>`
    pub id_prefix: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            offsets_keyword: OFFSETS_KEYWORD.to_string(),
            id_prefix: "YASim".to_string(),
        }
    }
}

/// What an open element contributes while its children are parsed
#[derive(Debug)]
enum OpenElement {
    Primitive(Primitive),
    Modifier,
    Placeholder,
}

#[derive(Debug)]
struct Frame {
    tag: String,
    element: OpenElement,
}

/// Byte offset to line/column lookup
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    /// 1-based line and column of `offset`
    fn locate(&self, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&start| start <= offset);
        let column = offset - self.starts[line - 1] + 1;
        (line, column)
    }

    fn line(&self, offset: usize) -> usize {
        self.locate(offset).0
    }
}

/// Single-use streaming parser state: element stack, per-tag counters and
/// the scene being assembled
pub(crate) struct Parser<'a> {
    source: &'a str,
    options: &'a ParseOptions,
    transform: WorldTransform,
    lines: LineIndex,
    stack: Vec<Frame>,
    counters: HashMap<String, usize>,
    root_closed: bool,
    scene: Scene,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, transform: WorldTransform, options: &'a ParseOptions) -> Self {
        Self {
            source,
            options,
            transform,
            lines: LineIndex::new(source),
            stack: Vec::new(),
            counters: HashMap::new(),
            root_closed: false,
            scene: Scene::default(),
        }
    }

    pub fn run(mut self) -> Result<Scene> {
        let mut reader = Reader::from_str(self.source);
        let config = reader.config_mut();
        config.trim_text(true);
        config.expand_empty_elements = true;

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(e) => return Err(self.xml_error(reader.error_position() as usize, e)),
            };
            let offset = reader.buffer_position() as usize;

            match event {
                Event::Start(e) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    let attrs = self.collect_attributes(&e, offset)?;
                    // Report the line of the opening '<', not of the closing '>'
                    let line = self.lines.line(offset.saturating_sub(e.len() + 1));
                    self.start_element(tag, attrs, line)?;
                }
                Event::End(e) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    self.end_element(&tag, self.lines.line(offset))?;
                }
                Event::Text(text) if !self.stack.is_empty() => {
                    warn!(
                        "Ignoring text content {:?} at line {}",
                        String::from_utf8_lossy(&text),
                        self.lines.line(offset)
                    );
                }
                Event::Eof => break,
                _ => {}
            }
        }

        self.finish()
    }

    fn finish(self) -> Result<Scene> {
        let last_line = self.lines.starts.len();
        if let Some(frame) = self.stack.last() {
            return Err(YasimError::Structure {
                message: format!("unexpected end of document, <{}> is not closed", frame.tag),
                line: last_line,
            });
        }
        if !self.root_closed {
            return Err(YasimError::Structure {
                message: format!("document has no <{ROOT_TAG}> element"),
                line: last_line,
            });
        }
        debug!("Parsed {} primitives", self.scene.len());
        Ok(self.scene)
    }

    fn xml_error(&self, offset: usize, source: quick_xml::Error) -> YasimError {
        let (line, column) = self.lines.locate(offset);
        YasimError::Xml {
            line,
            column,
            source,
        }
    }

    fn collect_attributes(&self, e: &BytesStart<'_>, offset: usize) -> Result<Vec<(String, String)>> {
        let mut attrs = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(offset, err.into()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| self.xml_error(offset, err.into()))?;
            attrs.push((key, value.into_owned()));
        }
        Ok(attrs)
    }

    /// Slash separated tags of the open elements, ending in `tag`
    fn path(&self, tag: &str) -> String {
        let mut path: Vec<&str> = self.stack.iter().map(|frame| frame.tag.as_str()).collect();
        path.push(tag);
        path.join("/")
    }

    /// Bump the counter for `tag` and return its new identity
    fn next_id(&mut self, tag: &str) -> String {
        let count = self
            .counters
            .entry(tag.to_string())
            .and_modify(|n| *n += 1)
            .or_insert(0);
        format!("{}_{}#{}", self.options.id_prefix, tag, count)
    }

    fn start_element(&mut self, tag: String, attrs: Vec<(String, String)>, line: usize) -> Result<()> {
        if self.stack.is_empty() {
            if self.root_closed {
                return Err(YasimError::Structure {
                    message: format!("unexpected <{tag}> after the <{ROOT_TAG}> element"),
                    line,
                });
            }
            if tag != ROOT_TAG {
                return Err(YasimError::Structure {
                    message: format!("this isn't a YASim config file (bad root tag <{tag}>)"),
                    line,
                });
            }
        }

        let id = self.next_id(&tag);
        let element = if self.stack.is_empty() {
            OpenElement::Placeholder
        } else {
            self.open_element(&tag, &attrs, id, line)?
        };

        trace!("push {} ({} open)", tag, self.stack.len() + 1);
        self.stack.push(Frame { tag, element });
        Ok(())
    }

    fn open_element(
        &mut self,
        tag: &str,
        values: &[(String, String)],
        id: String,
        line: usize,
    ) -> Result<OpenElement> {
        let Some(spec) = dispatch::lookup(tag) else {
            debug!("Skipping unknown element {} at line {}", self.path(tag), line);
            return Ok(OpenElement::Placeholder);
        };

        let attrs = Attrs::new(spec, values, line);
        match spec.role {
            Role::Ignored => {
                trace!("Ignoring {} at line {}", self.path(tag), line);
                Ok(OpenElement::Placeholder)
            }
            Role::Primitive(build) => {
                attrs.check_required()?;
                Ok(OpenElement::Primitive(build(&attrs, id, &self.transform)?))
            }
            Role::Thrust(modifier) => {
                let path = self.path(tag);
                let transform = self.transform;
                let thrust = self.parent_mut().and_then(Primitive::thrust_mut);
                let Some(thrust) = thrust else {
                    return Err(YasimError::Structure {
                        message: format!("{path} is not part of a thruster/propeller/jet"),
                        line,
                    });
                };
                attrs.check_required()?;
                dispatch::apply_thrust(modifier, &attrs, thrust, &transform)?;
                Ok(OpenElement::Modifier)
            }
            Role::Surface(kind) => {
                let path = self.path(tag);
                let wing = self.parent_mut().and_then(Primitive::wing_mut);
                let Some(wing) = wing else {
                    return Err(YasimError::Structure {
                        message: format!("{path} is not part of a wing/hstab/vstab/mstab"),
                        line,
                    });
                };
                attrs.check_required()?;
                dispatch::apply_surface(kind, &attrs, id, wing)?;
                Ok(OpenElement::Modifier)
            }
        }
    }

    /// Primitive held by the innermost open element, if any
    fn parent_mut(&mut self) -> Option<&mut Primitive> {
        match self.stack.last_mut() {
            Some(Frame {
                element: OpenElement::Primitive(primitive),
                ..
            }) => Some(primitive),
            _ => None,
        }
    }

    fn end_element(&mut self, tag: &str, line: usize) -> Result<()> {
        let Some(frame) = self.stack.pop() else {
            return Err(YasimError::Structure {
                message: format!("unexpected closing </{tag}>"),
                line,
            });
        };
        trace!("pop {} ({} open)", frame.tag, self.stack.len());

        if self.stack.is_empty() {
            self.root_closed = true;
        }
        if let OpenElement::Primitive(primitive) = frame.element {
            self.scene.push(primitive);
        }
        Ok(())
    }
}
