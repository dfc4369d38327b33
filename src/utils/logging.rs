// ============================================================================
// Logging Setup
// Installs a tracing-subscriber formatter for the engine's trace output
// ============================================================================
//
// The library itself only emits `tracing` events: `debug!` when an engine is
// created and `trace!` for each dispatched operation. Errors are returned to
// the caller and never logged here.
//
// # Usage
//
// ```ignore
// use decimal_calculator::utils::init_logging;
//
// init_logging(tracing::Level::TRACE)?;
// ```
// ============================================================================

use tracing::Level;

/// Install a global fmt subscriber capped at `level`.
///
/// # Errors
/// Returns the subscriber error message if a global subscriber is already set.
pub fn init_logging(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())
}
