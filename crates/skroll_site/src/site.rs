//! Site assembly
//!
//! [`Site`] wires the whole page together: lays the content out on a
//! [`HeadlessStage`], builds a [`ScrollEngine`] with the shipped breakpoint
//! table, and mounts every scene in its own scope. Hosts drive it with
//! `scroll`, `resize`, and `run`, and can tear the whole page down with one
//! call.

use skroll_core::{HeadlessStage, Result, Viewport};
use skroll_trigger::{ResponsiveContext, ScopeId, ScrollEngine};

use crate::breakpoints;
use crate::content::{PageContent, PageElements};
use crate::scenes;

/// Simulated frame length for [`Site::run`]
const FRAME: f32 = 1.0 / 60.0;

/// The assembled page
pub struct Site {
    stage: HeadlessStage,
    engine: ScrollEngine,
    elements: PageElements,
    scopes: Vec<ScopeId>,
}

impl Site {
    /// Lay out `content` and mount every scene
    pub fn new(content: &PageContent, viewport: Viewport) -> Result<Self> {
        let mut stage = HeadlessStage::new();
        let elements = content.layout(&mut stage, &viewport)?;
        let responsive = ResponsiveContext::new(breakpoints::default_variants(), &viewport)?;
        let mut engine = ScrollEngine::new(viewport).with_responsive(responsive);

        let mut scopes = Vec::new();
        macro_rules! mount_scene {
            ($module:ident) => {{
                let page = elements.clone();
                scopes.push(engine.mount(&mut stage, move |b| scenes::$module::build(b, &page)));
            }};
        }
        mount_scene!(intro);
        mount_scene!(hero);
        mount_scene!(reveal);
        mount_scene!(services);
        mount_scene!(stack);
        mount_scene!(gallery);
        tracing::info!(scenes = scopes.len(), "site mounted");

        Ok(Self {
            stage,
            engine,
            elements,
            scopes,
        })
    }

    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    pub fn stage(&self) -> &HeadlessStage {
        &self.stage
    }

    pub fn variant_name(&self) -> Option<&str> {
        self.engine.variant_name()
    }

    pub fn scroll(&mut self, scroll_y: f32) {
        self.engine.on_scroll(&mut self.stage, scroll_y);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.on_resize(&mut self.stage, width, height);
    }

    /// Advance one frame; true while more frames are wanted
    pub fn frame(&mut self, dt: f32) -> bool {
        self.engine.on_frame(&mut self.stage, dt)
    }

    /// Run the frame clock for a fixed stretch of simulated time
    ///
    /// The gallery floats loop forever, so "run until idle" never ends;
    /// callers advance by duration instead.
    pub fn run(&mut self, seconds: f32) {
        let mut elapsed = 0.0;
        while elapsed < seconds {
            self.frame(FRAME);
            elapsed += FRAME;
        }
    }

    /// Unmount every scene; safe to call more than once
    pub fn teardown(&mut self) {
        for scope in self.scopes.drain(..) {
            self.engine.unmount(&mut self.stage, scope);
        }
    }
}
