use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use crate::{extract, frame::Frame, transform, write};

/// Run the whole batch: scan archives, aggregate, normalize, write.
///
/// The two empty-input conditions — no archives at all, or archives with no
/// CSV entries — fail here, before the output directory is created or any
/// file is written.
pub fn run(input_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<()> {
    let input_dir = input_dir.as_ref();

    let archives = extract::scan_archives(input_dir)?;
    if archives.is_empty() {
        bail!("no zip archives found in {:?}", input_dir);
    }
    info!(archives = archives.len(), "scanned input directory");

    let mut tables = Vec::new();
    for archive in &archives {
        tables.extend(extract::load_zip_tables(archive)?);
    }
    if tables.is_empty() {
        bail!("archives in {:?} contained no csv entries", input_dir);
    }
    info!(tables = tables.len(), "loaded csv entries");

    let frame = Frame::from_tables(tables);
    info!(
        rows = frame.rows.len(),
        columns = frame.columns.len(),
        "aggregated record set"
    );

    let views = [
        transform::client_view(&frame),
        transform::campaign_view(&frame),
        transform::economics_view(&frame),
    ];
    write::write_views(output_dir, &views)?;

    Ok(())
}
