//! Export serialization: at most one rasterization in flight, fail-fast
//! rejection while busy, and side-effect-free retries.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mitocard::card::Submission;
use mitocard::export::{Exporter, EXPORT_FILE_NAME};
use mitocard::render::{CardImage, Rasterizer};
use mitocard::{CardData, Error, RendererConfig};

/// Rasterizer stub that sleeps and records how many calls overlap.
struct SlowRasterizer {
    delay: Duration,
    in_flight: Arc<AtomicUsize>,
    max_overlap: Arc<AtomicUsize>,
}

impl SlowRasterizer {
    fn new(delay: Duration) -> (Self, Arc<AtomicUsize>) {
        let max_overlap = Arc::new(AtomicUsize::new(0));
        (
            Self {
                delay,
                in_flight: Arc::new(AtomicUsize::new(0)),
                max_overlap: max_overlap.clone(),
            },
            max_overlap,
        )
    }
}

impl Rasterizer for SlowRasterizer {
    fn rasterize(&self, _svg: &str, _scale: f32) -> mitocard::Result<CardImage> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_overlap.fetch_max(now, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(CardImage {
            width: 1,
            height: 1,
            png_data: vec![0x89, 0x50, 0x4E, 0x47],
        })
    }
}

/// Rasterizer stub that always fails.
struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, _svg: &str, _scale: f32) -> mitocard::Result<CardImage> {
        Err(Error::Raster("simulated failure".to_string()))
    }
}

fn test_out_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mitocard-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create test out dir");
    dir
}

fn card() -> CardData {
    Submission {
        name: "Alice".to_string(),
        username: "alice".to_string(),
        roles: vec!["Settler".to_string()],
        card_color: "purple".to_string(),
        card_template: "blue-waves".to_string(),
        profile_picture: Some("data:image/png;base64,AAAA".to_string()),
        ..Default::default()
    }
    .submit()
    .expect("valid submission")
}

fn config(tag: &str) -> RendererConfig {
    RendererConfig {
        out_dir: test_out_dir(tag),
        ..Default::default()
    }
}

#[tokio::test]
async fn second_export_rejected_while_busy() {
    let (raster, max_overlap) = SlowRasterizer::new(Duration::from_millis(300));
    let config = config("busy");
    let exporter = Exporter::with_rasterizer(raster, config.clone());
    let card = card();

    let first = {
        let exporter = exporter.clone();
        let card = card.clone();
        tokio::spawn(async move { exporter.export(&card).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    // The control is disabled for the duration of the first export.
    assert!(exporter.is_busy());
    assert!(matches!(
        exporter.export(&card).await,
        Err(Error::ExportInFlight)
    ));

    let first = first.await.expect("task join");
    assert!(first.is_ok(), "first export should succeed: {first:?}");
    assert_eq!(max_overlap.load(Ordering::SeqCst), 1);

    // Once settled, a retry goes through.
    assert!(!exporter.is_busy());
    let retry = exporter.export(&card).await.expect("retry export");
    assert!(retry.ends_with(EXPORT_FILE_NAME));
    assert!(retry.exists());

    exporter.close().await.expect("close");
}

#[tokio::test]
async fn failed_export_leaves_no_artifact_and_is_retryable() {
    let config = config("failure");
    let exporter = Exporter::with_rasterizer(FailingRasterizer, config.clone());
    let card = card();

    let res = exporter.export(&card).await;
    assert!(matches!(res, Err(Error::Raster(_))), "got {res:?}");

    // No partial file, no staged temp file.
    assert!(!config.out_dir.join(EXPORT_FILE_NAME).exists());
    assert!(!config
        .out_dir
        .join(format!(".{EXPORT_FILE_NAME}.part"))
        .exists());

    // The export state is reset; the same exporter accepts another attempt.
    assert!(!exporter.is_busy());
    assert!(matches!(
        exporter.export(&card).await,
        Err(Error::Raster(_))
    ));
}

#[tokio::test]
async fn artifact_is_written_under_the_fixed_name() {
    let (raster, _) = SlowRasterizer::new(Duration::from_millis(1));
    let config = config("artifact");
    let exporter = Exporter::with_rasterizer(raster, config.clone());

    let path = exporter.export(&card()).await.expect("export");
    assert_eq!(path, config.out_dir.join("mitosis-card.png"));
    let written = std::fs::read(&path).expect("read artifact");
    assert_eq!(&written[..4], &[0x89, 0x50, 0x4E, 0x47]);
}
