//! Composition smoke tests over the whole template set and edge inputs.

use mitocard::card::Submission;
use mitocard::render::compose::compose_svg;
use mitocard::template::Template;
use mitocard::RendererConfig;

fn submission() -> Submission {
    Submission {
        name: "Smoke Test".to_string(),
        username: "smoke".to_string(),
        roles: vec!["Mitosian".to_string()],
        card_color: "#0E7490".to_string(),
        card_template: "blue-waves".to_string(),
        profile_picture: Some("data:image/png;base64,AAAA".to_string()),
        ..Default::default()
    }
}

#[test]
fn every_template_composes() {
    let config = RendererConfig::default();
    for template in Template::SELECTABLE
        .into_iter()
        .chain([Template::GlassmorphismBlobs])
    {
        let mut s = submission();
        s.card_template = template.id().to_string();
        let svg = compose_svg(&s.submit().unwrap(), &config);
        assert!(
            svg.contains(r#"transform="scale("#),
            "{} produced no decoration layer",
            template.id()
        );
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}

#[test]
fn composes_without_profile_picture() {
    // Hand-built card: the renderer itself tolerates an absent picture even
    // though submissions require one.
    let mut card = submission().submit().unwrap();
    card.profile_picture = None;
    let svg = compose_svg(&card, &RendererConfig::default());
    assert!(!svg.contains("preserveAspectRatio"));
    assert!(svg.contains("stroke-width=\"4\"")); // the ring still renders
}

#[test]
fn long_strings_do_not_break_composition() {
    let mut s = submission();
    s.name = "A".repeat(200);
    s.username = "very long discord username with spaces".to_string();
    s.roles = vec!["Mitosis Marketing Manager".to_string(), "Co-Founder & CPO at Mitosis".to_string()];
    let svg = compose_svg(&s.submit().unwrap(), &RendererConfig::default());
    assert!(svg.contains("&amp;")); // the ampersand role is escaped
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn custom_canvas_scales_decoration() {
    let config = RendererConfig {
        size: mitocard::CardSize {
            width: 900,
            height: 500,
        },
        ..Default::default()
    };
    let svg = compose_svg(&submission().submit().unwrap(), &config);
    assert!(svg.contains(r#"viewBox="0 0 900 500""#));
    assert!(svg.contains(r#"transform="scale(2 2)""#));
}
