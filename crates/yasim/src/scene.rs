use std::collections::BTreeMap;

use crate::Result;
use crate::types::{OffsetCorrection, Primitive, PrimitiveKind};

/// Finalized primitives in the order their elements closed
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scene {
    primitives: Vec<Primitive>,
    offsets: Option<OffsetCorrection>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub(crate) fn with_offsets(mut self, offsets: Option<OffsetCorrection>) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Offset correction that was applied while parsing, if any
    pub fn offsets(&self) -> Option<&OffsetCorrection> {
        self.offsets.as_ref()
    }

    pub fn find(&self, id: &str) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.id() == id)
    }

    pub fn of_kind(&self, kind: PrimitiveKind) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.kind() == kind)
    }

    /// Number of primitives per kind, for summaries
    pub fn counts(&self) -> BTreeMap<PrimitiveKind, usize> {
        let mut counts = BTreeMap::new();
        for primitive in &self.primitives {
            *counts.entry(primitive.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of control surfaces across every wing
    pub fn control_surface_count(&self) -> usize {
        self.primitives
            .iter()
            .filter_map(Primitive::as_wing)
            .map(|wing| wing.control_surfaces.len())
            .sum()
    }

    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> Result<R::Output> {
        renderer.render(self)
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}

/// Turns a parsed scene into some output representation
pub trait Renderer {
    type Output;

    fn render(&mut self, scene: &Scene) -> Result<Self::Output>;
}
