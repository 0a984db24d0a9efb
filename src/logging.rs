//! File logging setup.
//!
//! The game owns stdout in raw mode, so log records only ever go to a file.

use anyhow::Result;
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

use crate::config::GameConfig;

pub const LOG_BASENAME: &str = "term-tetris";

/// Start the file logger if the config asks for one.
///
/// The returned handle must be kept alive for the rest of the program so the
/// buffered writer is flushed on shutdown.
pub fn init(config: &GameConfig) -> Result<Option<LoggerHandle>> {
    let Some(spec) = config.log_spec.as_deref() else {
        return Ok(None);
    };

    let handle = Logger::try_with_env_or_str(spec)?
        .log_to_file(
            FileSpec::default()
                .directory(&config.log_dir)
                .basename(LOG_BASENAME),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .format(flexi_logger::detailed_format)
        .start()?;

    for (name, raw) in &config.rejected {
        log::warn!("ignoring {}={:?}, using default", name, raw);
    }

    Ok(Some(handle))
}
