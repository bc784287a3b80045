use anyhow::{Context, Result, anyhow};
use async_channel::{Receiver, TrySendError};
use panadapter::dsp::pipeline::{FrameSnapshot, PlotterPipeline};
use panadapter::dsp::{FrameProcessor, SpectrumFrame};
use panadapter::settings::Settings;
use panadapter::source::ToneSource;
use panadapter::util::{log, telemetry};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

// one summary line per this many rendered snapshots
const SUMMARY_INTERVAL: u64 = 30;

fn main() {
    telemetry::init();
    info!("panadapter starting up");

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());

    if let Err(err) = run(settings) {
        error!("[driver] failed: {err:#}");
        std::process::exit(1);
    }
}

fn run(settings: Settings) -> Result<()> {
    let driver = settings.driver;
    let (snapshot_tx, snapshot_rx) =
        async_channel::bounded::<Arc<FrameSnapshot>>(driver.render_queue);

    let render = thread::Builder::new()
        .name("panadapter-render".into())
        .spawn(move || render_loop(snapshot_rx))
        .context("failed to spawn render thread")?;

    let mut pipeline = PlotterPipeline::new(settings.plotter);
    pipeline.set_center_freq(driver.center_freq_hz);
    let mut source = ToneSource::new(
        pipeline.view().sample_rate_hz(),
        driver.fft_size,
        &driver.tones,
        driver.noise_floor_db,
        driver.seed,
    );

    let frame_rate = pipeline.config().frame_rate;
    let period = Duration::from_secs_f64(1.0 / f64::from(frame_rate));
    let start = Instant::now();
    let mut dropped = 0u64;

    for n in 0..driver.frame_count {
        let due = start + period.mul_f64(n as f64);
        let timestamp = if driver.realtime {
            thread::sleep(due.saturating_duration_since(Instant::now()));
            Instant::now()
        } else {
            due
        };

        let frame = SpectrumFrame::new(source.next_frame(), frame_rate, timestamp);
        pipeline.process_frame(&frame);
        for event in pipeline.drain_events() {
            debug!("[driver] {event:?}");
        }

        if let Some(snapshot) = pipeline.take_render(timestamp) {
            match snapshot_tx.try_send(snapshot) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => dropped += 1,
                Err(TrySendError::Closed(_)) => {
                    info!("[driver] render channel closed; stopping");
                    break;
                }
            }
        }
    }

    drop(snapshot_tx);
    let rendered = render
        .join()
        .map_err(|_| anyhow!("render thread panicked"))?;

    info!(
        "[driver] processed {} frames, rendered {rendered}, dropped {dropped}, waterfall rows {}",
        pipeline.frames_processed(),
        pipeline.waterfall().rows_emitted()
    );
    Ok(())
}

fn render_loop(snapshots: Receiver<Arc<FrameSnapshot>>) -> u64 {
    let mut rendered = 0u64;
    while let Ok(snapshot) = snapshots.recv_blocking() {
        if rendered % SUMMARY_INTERVAL == 0 {
            log::pipeline_summary("snapshot", &snapshot);
        }
        rendered += 1;
    }
    rendered
}
