use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::info;

use crate::transform::View;

/// Serialize each view as `<name>.csv` under `out_dir`, creating the
/// directory (and missing parents) first. Absent cells become empty fields.
/// Existing files are overwritten; the three writes are not transactional —
/// a failure partway leaves earlier files in place.
pub fn write_views(out_dir: impl AsRef<Path>, views: &[View]) -> Result<()> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {:?}", out_dir))?;

    for view in views {
        let path = out_dir.join(format!("{}.csv", view.name));
        let mut wtr =
            csv::Writer::from_path(&path).with_context(|| format!("creating {:?}", path))?;

        wtr.write_record(&view.headers)
            .with_context(|| format!("writing header of {:?}", path))?;
        for row in &view.rows {
            wtr.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))
                .with_context(|| format!("writing row to {:?}", path))?;
        }
        wtr.flush().with_context(|| format!("flushing {:?}", path))?;

        info!(file = %path.display(), rows = view.rows.len(), "wrote view");
    }

    Ok(())
}
