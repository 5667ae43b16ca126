//! skroll reference site
//!
//! A complete page built on the skroll engine, exercising every coupling the
//! engine offers: a scrubbed and pinned intro loader, a staggered hero
//! entrance, toggled reveal blocks, a pinned services section with an
//! active-index switcher, a scrubbed project stack, and a floating parallax
//! gallery. Breakpoint parameters load from a TOML table and the whole page
//! rebuilds when a resize crosses one.

pub mod breakpoints;
pub mod content;
pub mod scenes;
pub mod site;

pub use content::{PageContent, PageElements, Project, Service};
pub use site::Site;
