//! Error types shared across the skroll workspace

use thiserror::Error;

/// Errors surfaced by engine configuration and content validation
///
/// Runtime animation paths never return errors: a misbehaving binding
/// degrades to "no animation" (skipped element, clamped progress) rather
/// than failing the host. These variants cover the construction-time paths
/// where the caller can actually act on the problem.
#[derive(Error, Debug)]
pub enum SkrollError {
    /// A named element was expected on the stage but is not registered
    #[error("unknown element id: {0}")]
    UnknownElement(String),

    /// The content collaborator handed over an empty item list
    #[error("content list is empty")]
    EmptyContent,

    /// A responsive context was built with no variants
    #[error("responsive context has no variants")]
    NoVariants,

    /// Configuration could not be parsed or was internally inconsistent
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for skroll operations
pub type Result<T> = std::result::Result<T, SkrollError>;
