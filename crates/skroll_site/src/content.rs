//! Page content and layout
//!
//! The reference site is a single long page: an intro loader over the hero,
//! a run of reveal blocks, a pinned services section, a stacked project
//! showcase, and a floating image gallery. [`PageContent`] is the data;
//! [`PageContent::layout`] registers every element with the stage at the
//! document rect a real layout pass would have produced, and hands back the
//! ids the scene builders animate.

use skroll_core::{ElementId, HeadlessStage, Rect, Result, SkrollError, Viewport};

#[derive(Clone, Debug)]
pub struct Service {
    pub title: String,
    pub blurb: String,
}

#[derive(Clone, Debug)]
pub struct Project {
    pub title: String,
    pub year: u32,
}

/// Everything the page renders, in document order
#[derive(Clone, Debug)]
pub struct PageContent {
    pub hero_lines: Vec<String>,
    pub reveal_blocks: Vec<String>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub gallery_count: usize,
}

impl Default for PageContent {
    fn default() -> Self {
        Self::studio()
    }
}

impl PageContent {
    /// The shipped demo content
    pub fn studio() -> Self {
        Self {
            hero_lines: vec![
                "Digital experiences".into(),
                "built with motion".into(),
                "and intent.".into(),
            ],
            reveal_blocks: vec![
                "We are a small studio obsessed with craft.".into(),
                "Every pixel earns its place.".into(),
            ],
            services: vec![
                Service {
                    title: "Brand identity".into(),
                    blurb: "Systems that hold up everywhere.".into(),
                },
                Service {
                    title: "Web design".into(),
                    blurb: "Interfaces that feel inevitable.".into(),
                },
                Service {
                    title: "Motion".into(),
                    blurb: "Movement with a reason.".into(),
                },
            ],
            projects: vec![
                Project {
                    title: "Meridian".into(),
                    year: 2024,
                },
                Project {
                    title: "Halftone".into(),
                    year: 2024,
                },
                Project {
                    title: "Fieldnotes".into(),
                    year: 2025,
                },
                Project {
                    title: "Aperture".into(),
                    year: 2025,
                },
            ],
            gallery_count: 5,
        }
    }

    /// Register the page with the stage and return the animatable ids
    ///
    /// Rects are laid out top to bottom with a moving cursor, scaled to the
    /// viewport. Errors if the page has no sections at all.
    pub fn layout(&self, stage: &mut HeadlessStage, viewport: &Viewport) -> Result<PageElements> {
        if self.hero_lines.is_empty()
            && self.reveal_blocks.is_empty()
            && self.services.is_empty()
            && self.projects.is_empty()
            && self.gallery_count == 0
        {
            return Err(SkrollError::EmptyContent);
        }
        let w = viewport.width;
        let h = viewport.height;
        let mut cursor = 0.0;

        // Hero fills the first viewport; the intro overlay sits on top of it
        let hero = stage.add_element("hero", Rect::new(0.0, cursor, w, h));
        let intro_overlay =
            stage.add_element("intro-overlay", Rect::new(0.0, cursor, w, h));
        let intro_logo = stage.add_element(
            "intro-logo",
            Rect::new(w * 0.5 - 100.0, cursor + h * 0.5 - 50.0, 200.0, 100.0),
        );
        let hero_lines = self
            .hero_lines
            .iter()
            .enumerate()
            .map(|(i, _)| {
                stage.add_element(
                    format!("hero-line-{}", i),
                    Rect::new(w * 0.08, cursor + h * 0.35 + i as f32 * 90.0, w * 0.7, 80.0),
                )
            })
            .collect();
        cursor += h;

        let reveal_blocks = self
            .reveal_blocks
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let rect = Rect::new(w * 0.1, cursor + i as f32 * 640.0, w * 0.8, 520.0);
                stage.add_element(format!("reveal-{}", i), rect)
            })
            .collect();
        cursor += self.reveal_blocks.len() as f32 * 640.0;

        // Services: text column on the left, one visual panel pinned right
        let services_panel =
            stage.add_element("services-panel", Rect::new(w * 0.55, cursor, w * 0.45, h));
        let mut service_texts = Vec::new();
        let mut service_visuals = Vec::new();
        for (i, _) in self.services.iter().enumerate() {
            service_texts.push(stage.add_element(
                format!("service-text-{}", i),
                Rect::new(0.0, cursor + i as f32 * h, w * 0.5, h),
            ));
            // Visuals are layers inside the pinned panel; they share its rect
            service_visuals.push(stage.add_element(
                format!("service-visual-{}", i),
                Rect::new(w * 0.55, cursor, w * 0.45, h),
            ));
        }
        cursor += self.services.len() as f32 * h;

        let stack_section = stage.add_element("projects", Rect::new(0.0, cursor, w, h));
        let stack_cards = self
            .projects
            .iter()
            .enumerate()
            .map(|(i, _)| {
                stage.add_element(
                    format!("project-card-{}", i),
                    Rect::new(w * 0.15, cursor + h * 0.2, w * 0.7, h * 0.6),
                )
            })
            .collect();
        cursor += h;

        let gallery_section =
            stage.add_element("gallery", Rect::new(0.0, cursor, w, 2.0 * h));
        let gallery_headline = stage.add_element(
            "gallery-headline",
            Rect::new(w * 0.2, cursor + h * 0.4, w * 0.6, 120.0),
        );
        let gallery_images = (0..self.gallery_count)
            .map(|i| {
                let col = (i % 3) as f32;
                let row = (i / 3) as f32;
                stage.add_element(
                    format!("gallery-image-{}", i),
                    Rect::new(
                        w * (0.08 + col * 0.32),
                        cursor + h * 0.2 + row * h,
                        w * 0.24,
                        h * 0.45,
                    ),
                )
            })
            .collect();
        cursor += 2.0 * h;

        // Footer gives the last sections room to finish their windows
        stage.add_element("footer", Rect::new(0.0, cursor, w, h));

        Ok(PageElements {
            intro_overlay,
            intro_logo,
            hero,
            hero_lines,
            reveal_blocks,
            services_panel,
            service_texts,
            service_visuals,
            stack_section,
            stack_cards,
            gallery_section,
            gallery_headline,
            gallery_images,
        })
    }
}

/// Element ids the scene builders animate
#[derive(Clone, Debug)]
pub struct PageElements {
    pub intro_overlay: ElementId,
    pub intro_logo: ElementId,
    pub hero: ElementId,
    pub hero_lines: Vec<ElementId>,
    pub reveal_blocks: Vec<ElementId>,
    pub services_panel: ElementId,
    pub service_texts: Vec<ElementId>,
    pub service_visuals: Vec<ElementId>,
    pub stack_section: ElementId,
    pub stack_cards: Vec<ElementId>,
    pub gallery_section: ElementId,
    pub gallery_headline: ElementId,
    pub gallery_images: Vec<ElementId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use skroll_core::Stage;

    #[test]
    fn test_layout_registers_all_sections() {
        let mut stage = HeadlessStage::new();
        let viewport = Viewport::new(1280.0, 800.0);
        let page = PageContent::studio()
            .layout(&mut stage, &viewport)
            .unwrap();

        assert_eq!(page.hero_lines.len(), 3);
        assert_eq!(page.service_texts.len(), page.service_visuals.len());
        assert_eq!(page.stack_cards.len(), 4);
        assert!(stage.element("footer").is_some());
        assert!(stage.document_height() > 5.0 * viewport.height);
    }

    #[test]
    fn test_sections_are_ordered_top_to_bottom() {
        let mut stage = HeadlessStage::new();
        let viewport = Viewport::new(1280.0, 800.0);
        let page = PageContent::studio()
            .layout(&mut stage, &viewport)
            .unwrap();

        let hero = stage.bounds(page.hero).unwrap();
        let services = stage.bounds(page.service_texts[0]).unwrap();
        let projects = stage.bounds(page.stack_section).unwrap();
        let gallery = stage.bounds(page.gallery_section).unwrap();
        assert!(hero.top() < services.top());
        assert!(services.top() < projects.top());
        assert!(projects.top() < gallery.top());
    }

    #[test]
    fn test_empty_content_rejected() {
        let mut stage = HeadlessStage::new();
        let empty = PageContent {
            hero_lines: vec![],
            reveal_blocks: vec![],
            services: vec![],
            projects: vec![],
            gallery_count: 0,
        };
        assert!(empty
            .layout(&mut stage, &Viewport::new(1280.0, 800.0))
            .is_err());
    }
}
