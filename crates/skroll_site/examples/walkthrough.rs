//! Simulated scroll session through the reference site
//!
//! Run with logging to watch the engine work:
//! `RUST_LOG=debug cargo run -p skroll_site --example walkthrough`

use skroll_core::{Property, Stage, Viewport};
use skroll_site::{PageContent, Site};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut site = Site::new(&PageContent::studio(), Viewport::new(1280.0, 800.0))?;
    site.run(3.0); // let the hero entrance finish

    let logo = site.elements().intro_logo;
    let height = site.stage().document_height();
    println!("document height: {height:.0}px");

    // Scroll the full page in steps, ticking frames between events
    for step in 0..=20 {
        let y = height * step as f32 / 20.0;
        site.scroll(y);
        site.run(0.5);
        let scale = site.stage().read(logo, Property::Scale).unwrap_or(1.0);
        println!("scroll {y:>7.0}  logo scale {scale:>6.1}");
    }

    // Cross the breakpoint: the page rebuilds under narrow parameters
    site.resize(390.0, 844.0);
    println!("variant after resize: {:?}", site.variant_name());

    site.teardown();
    println!("writes issued: {}", site.stage().write_count());
    Ok(())
}
