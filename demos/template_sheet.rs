//! Generate preview images for every card template.

use std::fs;
use std::path::Path;

use anyhow::Result;

use mitocard::card::Submission;
use mitocard::render::compose::compose_svg;
use mitocard::render::Rasterizer;
use mitocard::template::Template;
use mitocard::RendererConfig;

const SAMPLE_PFP: &str =
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

fn main() -> Result<()> {
    println!("Generating preview images for card templates...");

    let config = RendererConfig::default();
    let rasterizer = mitocard::new_rasterizer(&config);
    let out_dir = Path::new("template-previews");
    fs::create_dir_all(out_dir)?;

    for template in Template::SELECTABLE
        .into_iter()
        .chain([Template::GlassmorphismBlobs])
    {
        println!("Rendering {}...", template.label());

        let card = Submission {
            name: "Preview".to_string(),
            username: "preview".to_string(),
            roles: vec!["Mitosian".to_string()],
            card_color: "purple".to_string(),
            card_template: template.id().to_string(),
            profile_picture: Some(SAMPLE_PFP.to_string()),
            ..Default::default()
        }
        .submit()?;

        let svg = compose_svg(&card, &config);
        let image = rasterizer.rasterize(&svg, config.scale)?;
        let path = out_dir.join(format!("{}.png", template.id()));
        fs::write(&path, &image.png_data)?;
        println!("  -> {}", path.display());
    }

    println!("Done!");
    Ok(())
}
