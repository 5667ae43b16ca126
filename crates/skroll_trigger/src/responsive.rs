//! Responsive variants
//!
//! Animation parameters vary by viewport width. A [`Variant`] couples a
//! width range to a [`VariantParams`] bag the scene builders read; the
//! [`ResponsiveContext`] tracks which variant the current viewport matches
//! and reports changes so the engine can revert and rebuild every scope
//! under the new parameters.
//!
//! Variants deserialize from configuration (the site crate ships a TOML
//! table), so breakpoints live in data rather than code.

use serde::{Deserialize, Serialize};

use skroll_core::Viewport;

/// Scene parameters a variant provides
///
/// Scene builders are free to interpret these however their animations need;
/// the names follow what the shipped scenes consume.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantParams {
    /// Target scale for zoom-style intros
    pub zoom: f32,
    /// Base pixel offset for entrance/parallax movement
    pub offset: f32,
    /// Seconds between staggered sibling starts
    pub stagger: f32,
}

impl Default for VariantParams {
    fn default() -> Self {
        Self {
            zoom: 150.0,
            offset: 100.0,
            stagger: 0.1,
        }
    }
}

/// A named width range with its parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    /// Inclusive lower bound on viewport width
    #[serde(default)]
    pub min_width: Option<f32>,
    /// Exclusive upper bound on viewport width
    #[serde(default)]
    pub max_width: Option<f32>,
    #[serde(default)]
    pub params: VariantParams,
}

impl Variant {
    pub fn matches(&self, viewport: &Viewport) -> bool {
        let above_min = self.min_width.map(|min| viewport.width >= min).unwrap_or(true);
        let below_max = self.max_width.map(|max| viewport.width < max).unwrap_or(true);
        above_min && below_max
    }
}

/// Tracks the active variant across viewport resizes
pub struct ResponsiveContext {
    variants: Vec<Variant>,
    active: usize,
}

impl ResponsiveContext {
    /// Build a context and select the initial variant for `viewport`
    ///
    /// Errors if `variants` is empty. When no variant matches the initial
    /// viewport, the first declared variant is used and a warning logged.
    pub fn new(variants: Vec<Variant>, viewport: &Viewport) -> skroll_core::Result<Self> {
        if variants.is_empty() {
            return Err(skroll_core::SkrollError::NoVariants);
        }
        let active = match Self::select(&variants, viewport) {
            Some(index) => index,
            None => {
                tracing::warn!(
                    width = viewport.width,
                    "no variant matches initial viewport; falling back to first"
                );
                0
            }
        };
        Ok(Self { variants, active })
    }

    fn select(variants: &[Variant], viewport: &Viewport) -> Option<usize> {
        variants.iter().position(|v| v.matches(viewport))
    }

    pub fn current(&self) -> &Variant {
        &self.variants[self.active]
    }

    pub fn params(&self) -> VariantParams {
        self.variants[self.active].params
    }

    /// Re-select for a new viewport; true when the active variant changed
    ///
    /// When no variant matches, the previous one stays active (a warning is
    /// logged) so scopes are never rebuilt against missing parameters.
    pub fn update(&mut self, viewport: &Viewport) -> bool {
        match Self::select(&self.variants, viewport) {
            Some(index) if index != self.active => {
                tracing::debug!(
                    from = %self.variants[self.active].name,
                    to = %self.variants[index].name,
                    "variant change"
                );
                self.active = index;
                true
            }
            Some(_) => false,
            None => {
                tracing::warn!(
                    width = viewport.width,
                    "no variant matches viewport; keeping {}",
                    self.variants[self.active].name
                );
                false
            }
        }
    }
}
