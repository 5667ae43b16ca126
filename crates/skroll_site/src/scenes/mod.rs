//! Scene builders
//!
//! One module per page section. Each exposes a `build` function that mounts
//! the section's triggers and timelines through a [`SceneBuilder`]; the site
//! wraps each in its own scope so sections tear down independently and
//! rebuild cleanly on variant changes.
//!
//! [`SceneBuilder`]: skroll_trigger::SceneBuilder

pub mod gallery;
pub mod hero;
pub mod intro;
pub mod reveal;
pub mod services;
pub mod stack;
