//! Integration tests for the ring to path to export pipeline

// Tests are allowed to use expect/unwrap for cleaner error messages
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use blobkit_core::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn ring_to_svg_file() {
    let mut rng = StdRng::seed_from_u64(2024);
    let config = PolygonConfig::new(8, 0.35).with_radius(70.0);

    let ring = generate(&config, &mut rng);
    assert_eq!(ring.len(), 8);

    let path = ring.to_path();
    assert_eq!(path.segment_count(), 8);

    let style = BlobStyle::palette(0).expect("palette 0 exists");
    let svg = blob_svg(&path, &style);

    let temp_path = std::env::temp_dir().join("blobkit_test_pipeline.svg");
    export_svg(&svg, &temp_path).expect("Export should succeed");

    let written = std::fs::read_to_string(&temp_path).unwrap();
    assert_eq!(written, svg);
    assert!(written.contains(&path.to_svg()));

    std::fs::remove_file(&temp_path).ok();
}

#[test]
fn same_seed_same_document() {
    let config = PolygonConfig::default();
    let a = blob_svg(&generate_seeded(&config, 99).to_path(), &BlobStyle::default());
    let b = blob_svg(&generate_seeded(&config, 99).to_path(), &BlobStyle::default());
    assert_eq!(a, b);
}

#[test]
fn jittered_ring_still_closes() {
    let mut rng = StdRng::seed_from_u64(3);
    let ring = generate(&PolygonConfig::new(5, 1.0), &mut rng);
    let rough = jitter(&ring, 10.0, &mut rng);

    let svg = rough.to_path().to_svg();
    assert!(svg.starts_with("M "));
    assert!(svg.ends_with(" Z"));
    assert_eq!(svg.matches('C').count(), 5);
}

#[test]
fn canvas_with_noise_overlay() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut canvas = Canvas::new();
    canvas.noise.size = 4;

    for palette in 0..3 {
        let style = BlobStyle::palette(palette).unwrap();
        let blob = BlobConfig::generate(6, 0.6, style, &mut rng);
        canvas.apply(CanvasCommand::Add(blob)).unwrap();
    }
    canvas.apply(CanvasCommand::SetBlur(20.0)).unwrap();

    let grain = canvas.noise_texture(&mut rng);
    assert_eq!((grain.width(), grain.height()), (250, 150));

    let dir = std::env::temp_dir();
    let png = dir.join("blobkit_test_canvas_grain.png");
    let svg_path = dir.join("blobkit_test_canvas.svg");

    export_png(&grain, canvas.noise.size, &png).unwrap();
    let svg = canvas.to_svg_with_noise("blobkit_test_canvas_grain.png");
    export_svg(&svg, &svg_path).unwrap();

    let img = image::open(&png).unwrap();
    assert_eq!((img.width(), img.height()), (1000, 600));
    assert_eq!(svg.matches("<path").count(), 3);

    std::fs::remove_file(&png).ok();
    std::fs::remove_file(&svg_path).ok();
}

#[test]
fn degenerate_inputs_degrade_gracefully() {
    let mut rng = StdRng::seed_from_u64(0);
    let ring = generate(&PolygonConfig::new(2, 0.5), &mut rng);
    assert_eq!(ring.len(), 2);
    assert!(ring.to_path().is_empty());
    assert_eq!(ring.to_path().to_svg(), "");

    let grain = generate_noise(&NoiseTextureConfig::new(3, 3).with_intensity(0.0), &mut rng);
    assert!(grain.samples().iter().all(|&v| v == 128));
}
