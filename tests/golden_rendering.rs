use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use mitocard::card::Submission;
use mitocard::render::compose::compose_svg;
use mitocard::RendererConfig;

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn fixture_card() -> mitocard::CardData {
    Submission {
        name: "Golden Fixture".to_string(),
        username: "golden".to_string(),
        roles: vec!["Settler".to_string(), "Guru".to_string()],
        card_color: "white".to_string(),
        card_template: "concentric-lines".to_string(),
        logo: mitocard::assets::Logo::Black,
        profile_picture: Some("data:image/png;base64,AAAA".to_string()),
        ..Default::default()
    }
    .submit()
    .expect("fixture submission")
}

/// The composition is content-addressed: the golden stores the SHA-256 of
/// the emitted SVG rather than the document itself.
fn check_golden(name: &str, svg: &str) {
    let digest = hex::encode(Sha256::digest(svg.as_bytes()));

    let expected_path = golden_path(name);
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim());
}

#[test]
fn golden_composition_matches_fixture() {
    let svg = compose_svg(&fixture_card(), &RendererConfig::default());
    check_golden("white_card.svg.sha256", &svg);
}

#[test]
fn golden_composition_scaled_canvas() {
    let config = RendererConfig {
        size: mitocard::CardSize {
            width: 900,
            height: 500,
        },
        ..Default::default()
    };
    let svg = compose_svg(&fixture_card(), &config);
    check_golden("white_card_2x.svg.sha256", &svg);
}
