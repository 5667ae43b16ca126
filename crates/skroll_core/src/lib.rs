//! skroll core primitives
//!
//! Foundational types for the scroll-linked animation engine:
//!
//! - **Geometry**: document-space points, rects, and the scrolling viewport
//! - **Properties**: the numeric visual properties tweens can drive
//! - **Stage**: the injected host surface (geometry queries + property sink),
//!   including an in-memory [`HeadlessStage`] for tests and headless hosts
//! - **Errors**: construction-time error types shared by the workspace

pub mod error;
pub mod geometry;
pub mod property;
pub mod stage;

pub use error::{Result, SkrollError};
pub use geometry::{Point, Rect, Size, Viewport};
pub use property::{Property, PropertySet};
pub use stage::{ElementId, HeadlessStage, SpacerId, Stage};
