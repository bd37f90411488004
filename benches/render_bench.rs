use criterion::{criterion_group, criterion_main, Criterion};

use mitocard::card::Submission;
use mitocard::render::compose::compose_svg;
use mitocard::RendererConfig;

fn bench_card() -> mitocard::CardData {
    Submission {
        name: "Bench".to_string(),
        username: "bench".to_string(),
        roles: vec!["Settler".to_string()],
        card_color: "#0E7490".to_string(),
        card_template: "flowing-mesh".to_string(),
        profile_picture: Some("data:image/png;base64,AAAA".to_string()),
        ..Default::default()
    }
    .submit()
    .expect("bench submission")
}

fn bench_compose(c: &mut Criterion) {
    let card = bench_card();
    let config = RendererConfig::default();

    c.bench_function("compose_svg", |b| {
        b.iter(|| compose_svg(&card, &config));
    });
}

#[allow(dead_code)]
fn bench_rasterize(c: &mut Criterion) {
    if !cfg!(feature = "raster") {
        return;
    }

    #[cfg(feature = "raster")]
    {
        use mitocard::render::Rasterizer;

        let card = bench_card();
        let config = RendererConfig::default();
        let svg = compose_svg(&card, &config);
        let rasterizer = mitocard::new_rasterizer(&config);

        c.bench_function("rasterize_card", |b| {
            b.iter(|| {
                let _ = rasterizer.rasterize(&svg, config.scale).unwrap();
            })
        });
    }
}

criterion_group!(benches, bench_compose, bench_rasterize);
criterion_main!(benches);
