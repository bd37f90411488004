//! Render card example - demonstrates a full submission-to-PNG run

use mitocard::assets::Logo;
use mitocard::card::Submission;
use mitocard::{Exporter, RendererConfig};

// 1x1 transparent PNG stand-in for an uploaded picture.
const SAMPLE_PFP: &str =
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Mitosis Card Engine - Render Example\n");

    let submission = Submission {
        name: "Alice Example".to_string(),
        username: "alice".to_string(),
        roles: vec!["Settler".to_string(), "Guru".to_string()],
        card_color: "#0E7490".to_string(),
        card_template: "flowing-mesh".to_string(),
        logo: Logo::Mint,
        twitter_handle: "alice_builds".to_string(),
        profile_picture: Some(SAMPLE_PFP.to_string()),
        ..Default::default()
    };

    let card = submission.submit()?;
    let config = RendererConfig::default();

    let svg = mitocard::render::compose::compose_svg(&card, &config);
    println!("Composed {} bytes of SVG", svg.len());

    let exporter = Exporter::new(config);
    match exporter.export(&card).await {
        Ok(path) => println!("Saved {}", path.display()),
        Err(e) => eprintln!("Export failed: {e}"),
    }
    exporter.close().await?;

    Ok(())
}
