use anyhow::Result;
use campsplit::pipeline;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) configure dirs ───────────────────────────────────────────
    let input_dir = Path::new("files/input");
    let output_dir = Path::new("files/output");

    // ─── 3) split the extracts ───────────────────────────────────────
    pipeline::run(input_dir, output_dir)?;

    info!("all done");
    Ok(())
}
