pub mod builders;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};
use waveplan::dag::Wave;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Map every task id to the index of the wave it was placed in.
pub fn wave_assignment(waves: &[Wave]) -> HashMap<String, usize> {
    waves
        .iter()
        .enumerate()
        .flat_map(|(i, wave)| wave.iter().map(move |id| (id.clone(), i)))
        .collect()
}

/// Write `contents` to `Waveplan.toml` inside `dir` and return its path.
pub fn write_project(dir: &Path, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join("Waveplan.toml");
    std::fs::write(&path, contents)?;
    Ok(path)
}
