use crate::dsp::pipeline::FrameSnapshot;
use crate::util::db::power_to_db;
use tracing::info;

pub fn pipeline_summary(kind: &str, snapshot: &FrameSnapshot) {
    let strongest = strongest_column(snapshot);
    let (x, level_db) =
        strongest.map_or((0, f32::NEG_INFINITY), |(x, power)| (x, power_to_db(power)));

    info!(
        "[render] {kind}: fft={}, mode={:?}, columns={}..{}, strongest={:.1} {} at x={}, peaks={}, histogram_bins={}, waterfall_row={}",
        snapshot.fft_size,
        snapshot.plot_mode,
        snapshot.x_range.start,
        snapshot.x_range.end,
        level_db,
        snapshot.unit,
        x,
        snapshot.peaks.len(),
        snapshot.histogram.as_ref().map_or(0, |h| h.bins),
        snapshot.waterfall_row
    );
}

fn strongest_column(snapshot: &FrameSnapshot) -> Option<(usize, f32)> {
    let end = snapshot.x_range.end.min(snapshot.columns.max_raw.len());
    let start = snapshot.x_range.start.min(end);
    snapshot.columns.max_raw[start..end]
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, &power)| (start + i, power))
}
