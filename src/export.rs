//! Async export facade.
//!
//! A dedicated worker thread owns the rasterizer and processes export
//! commands from its channel one at a time, so at most one rasterization is
//! ever in flight. The `busy` flag plays the role of the disabled export
//! control: while an export runs, further requests fail fast with
//! [`Error::ExportInFlight`] and start nothing. There is no cancellation; an
//! in-flight export completes or fails, and a failed export leaves no
//! partial artifact, so retrying is always safe.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;

use tokio::sync::oneshot;

use crate::card::CardData;
use crate::error::{Error, Result};
use crate::render::compose::compose_svg;
use crate::render::Rasterizer;
use crate::RendererConfig;

/// Fixed artifact filename.
pub const EXPORT_FILE_NAME: &str = "mitosis-card.png";

enum Command {
    Export(Box<CardData>, oneshot::Sender<Result<PathBuf>>),
    Close(oneshot::Sender<()>),
}

/// Handle to the export worker. Cloning shares the same worker and the same
/// in-flight guard.
#[derive(Clone)]
pub struct Exporter {
    cmd_tx: Sender<Command>,
    busy: Arc<AtomicBool>,
}

impl Exporter {
    /// Spawn the worker with the default resvg backend.
    #[cfg(feature = "raster")]
    pub fn new(config: RendererConfig) -> Self {
        let rasterizer = crate::render::raster::SvgRasterizer::new(&config.font_family);
        Self::with_rasterizer(rasterizer, config)
    }

    /// Spawn the worker around an explicit rasterizer backend.
    pub fn with_rasterizer<R>(rasterizer: R, config: RendererConfig) -> Self
    where
        R: Rasterizer + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let busy = Arc::new(AtomicBool::new(false));
        let busy_worker = busy.clone();

        thread::spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Export(card, resp) => {
                        let res = run_export(&rasterizer, &card, &config);
                        busy_worker.store(false, Ordering::SeqCst);
                        let _ = resp.send(res);
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(());
                        break;
                    }
                }
            }
        });

        Self { cmd_tx, busy }
    }

    /// Whether an export is currently in flight (the export control state).
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Export the card to `mitosis-card.png` in the configured directory.
    ///
    /// Fails fast with [`Error::ExportInFlight`] when another export is
    /// already running; otherwise resolves once the worker has written (or
    /// failed to write) the artifact.
    pub async fn export(&self, card: &CardData) -> Result<PathBuf> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(Error::ExportInFlight);
        }

        let (tx, rx) = oneshot::channel();
        if self
            .cmd_tx
            .send(Command::Export(Box::new(card.clone()), tx))
            .is_err()
        {
            self.busy.store(false, Ordering::SeqCst);
            return Err(Error::Export("export worker is gone".into()));
        }

        match rx.await {
            Ok(res) => res,
            // The worker never drops a response for a command it received,
            // so this only fires if the worker died mid-export.
            Err(e) => Err(Error::Export(format!("export interrupted: {e}"))),
        }
    }

    /// Shut the worker down. In-flight work completes first.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Close(tx));
        rx.await
            .map_err(|e| Error::Export(format!("close interrupted: {e}")))
    }
}

fn run_export<R: Rasterizer>(
    rasterizer: &R,
    card: &CardData,
    config: &RendererConfig,
) -> Result<PathBuf> {
    let svg = compose_svg(card, config);
    let image = rasterizer.rasterize(&svg, config.scale)?;

    let path = config.out_dir.join(EXPORT_FILE_NAME);
    // Stage into a sibling temp file and rename, so a failure never leaves a
    // partial artifact at the final path.
    let staged = config.out_dir.join(format!(".{EXPORT_FILE_NAME}.part"));
    std::fs::write(&staged, &image.png_data)
        .map_err(|e| Error::Export(format!("cannot write {}: {e}", staged.display())))?;
    if let Err(e) = std::fs::rename(&staged, &path) {
        let _ = std::fs::remove_file(&staged);
        return Err(Error::Export(format!(
            "cannot move artifact into place: {e}"
        )));
    }

    log::info!(
        "exported {}x{} card to {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(path)
}
