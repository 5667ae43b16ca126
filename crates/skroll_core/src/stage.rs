//! Stage abstraction
//!
//! The engine never touches a rendering surface directly. Everything it needs
//! from the host is behind the [`Stage`] trait: element geometry for progress
//! math, a property sink for interpolated writes, and the two layout hooks
//! pinning requires (taking an element out of flow and inserting a spacer).
//!
//! [`HeadlessStage`] is the shipped implementation: an in-memory element
//! store with a one-dimensional document-flow model. It is what the tests and
//! the example site run against, and it doubles as a reference for embedders
//! wiring the engine to a real surface.

use slotmap::{new_key_type, SlotMap};
use rustc_hash::FxHashMap;

use crate::error::{Result, SkrollError};
use crate::geometry::{Rect, Size};
use crate::property::{Property, PropertySet};

new_key_type! {
    /// Handle to an element known to the stage
    pub struct ElementId;
    /// Handle to a layout spacer inserted while an element is pinned
    pub struct SpacerId;
}

/// Host surface the engine animates against
///
/// Implementations must tolerate ids for elements that have been removed:
/// geometry queries return `None` and writes become no-ops. The engine relies
/// on this for clean teardown when an element disappears mid-animation.
pub trait Stage {
    /// Element bounds in document coordinates (un-pinned flow position)
    fn bounds(&self, id: ElementId) -> Option<Rect>;

    /// The element's natural rendered size, independent of animated scale
    fn natural_size(&self, id: ElementId) -> Option<Size>;

    /// Current value of an animatable property
    fn read(&self, id: ElementId, prop: Property) -> Option<f32>;

    /// Write an animatable property. No-op for unknown elements.
    fn write(&mut self, id: ElementId, prop: Property, value: f32);

    /// Fix the element to the viewport (true) or return it to flow (false)
    fn set_pinned(&mut self, id: ElementId, pinned: bool);

    /// Insert a flow spacer where the element sits. Returns `None` for
    /// unknown elements.
    fn insert_spacer(&mut self, id: ElementId, height: f32) -> Option<SpacerId>;

    /// Remove a previously inserted spacer. Unknown ids are ignored.
    fn remove_spacer(&mut self, spacer: SpacerId);

    /// Total scrollable document height, including spacers and excluding
    /// pinned (out-of-flow) elements
    fn document_height(&self) -> f32;
}

struct ElementNode {
    rect: Rect,
    props: PropertySet,
    pinned: bool,
}

struct Spacer {
    height: f32,
}

/// In-memory stage with a document-flow layout model
///
/// Elements are registered with explicit document rects (the layout a real
/// surface would have computed before mount). Property writes are recorded
/// and readable, so interpolation math is fully observable in tests.
#[derive(Default)]
pub struct HeadlessStage {
    elements: SlotMap<ElementId, ElementNode>,
    spacers: SlotMap<SpacerId, Spacer>,
    ids: FxHashMap<String, ElementId>,
    /// Flow height contributed by element layout (grows as elements register)
    base_height: f32,
    write_count: u64,
}

impl HeadlessStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element at its laid-out document rect
    ///
    /// If the string id was already registered, the old mapping is replaced
    /// (last-wins) and a warning is logged.
    pub fn add_element(&mut self, name: impl Into<String>, rect: Rect) -> ElementId {
        let name = name.into();
        let id = self.elements.insert(ElementNode {
            rect,
            props: PropertySet::identity(),
            pinned: false,
        });
        if self.ids.insert(name.clone(), id).is_some() {
            tracing::warn!("duplicate element id registered: {}", name);
        }
        self.base_height = self.base_height.max(rect.bottom());
        id
    }

    /// Look up an element by its string id
    pub fn element(&self, name: &str) -> Option<ElementId> {
        self.ids.get(name).copied()
    }

    /// Look up an element that callers require to exist
    pub fn require_element(&self, name: &str) -> Result<ElementId> {
        self.element(name)
            .ok_or_else(|| SkrollError::UnknownElement(name.to_string()))
    }

    /// Remove an element entirely (simulates unmounted/removed nodes)
    ///
    /// Subsequent writes to the id are silently dropped; the flow height it
    /// contributed is retained, as a real surface would reflow lazily.
    pub fn remove_element(&mut self, id: ElementId) {
        self.elements.remove(id);
        self.ids.retain(|_, v| *v != id);
    }

    /// Snapshot of an element's current property values
    pub fn props(&self, id: ElementId) -> Option<PropertySet> {
        self.elements.get(id).map(|node| node.props)
    }

    pub fn is_pinned(&self, id: ElementId) -> bool {
        self.elements.get(id).map(|node| node.pinned).unwrap_or(false)
    }

    /// Height of a specific spacer, if it still exists
    pub fn spacer_height(&self, spacer: SpacerId) -> Option<f32> {
        self.spacers.get(spacer).map(|s| s.height)
    }

    pub fn spacer_count(&self) -> usize {
        self.spacers.len()
    }

    /// Number of successful property writes so far
    ///
    /// Reverted scopes must produce zero further writes; tests assert on the
    /// delta of this counter.
    pub fn write_count(&self) -> u64 {
        self.write_count
    }
}

impl Stage for HeadlessStage {
    fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.elements.get(id).map(|node| node.rect)
    }

    fn natural_size(&self, id: ElementId) -> Option<Size> {
        self.elements.get(id).map(|node| node.rect.size)
    }

    fn read(&self, id: ElementId, prop: Property) -> Option<f32> {
        self.elements.get(id).map(|node| node.props.get(prop))
    }

    fn write(&mut self, id: ElementId, prop: Property, value: f32) {
        if let Some(node) = self.elements.get_mut(id) {
            node.props.set(prop, value);
            self.write_count += 1;
        }
    }

    fn set_pinned(&mut self, id: ElementId, pinned: bool) {
        if let Some(node) = self.elements.get_mut(id) {
            node.pinned = pinned;
        }
    }

    fn insert_spacer(&mut self, id: ElementId, height: f32) -> Option<SpacerId> {
        if !self.elements.contains_key(id) {
            return None;
        }
        Some(self.spacers.insert(Spacer { height }))
    }

    fn remove_spacer(&mut self, spacer: SpacerId) {
        self.spacers.remove(spacer);
    }

    fn document_height(&self) -> f32 {
        let spacer_height: f32 = self.spacers.values().map(|s| s.height).sum();
        let pinned_height: f32 = self
            .elements
            .values()
            .filter(|node| node.pinned)
            .map(|node| node.rect.height())
            .sum();
        self.base_height + spacer_height - pinned_height
    }
}
