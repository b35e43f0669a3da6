//! Optional JSON trace log for conversion diagnostics.
//!
//! Built with the `trace` feature, [`init_tracing`] installs a subscriber
//! writing one JSON object per event to `lex-furigana-trace.jsonl`. The
//! filter comes from `LEX_FURIGANA_LOG`, falling back to [`DEFAULT_FILTER`].

use std::path::{Path, PathBuf};

pub const TRACE_FILE_NAME: &str = "lex-furigana-trace.jsonl";
pub const FILTER_ENV: &str = "LEX_FURIGANA_LOG";
pub const DEFAULT_FILTER: &str = "lex_furigana=debug";

/// Path of the trace log inside `log_dir`.
pub fn trace_file(log_dir: &Path) -> PathBuf {
    log_dir.join(TRACE_FILE_NAME)
}

/// Start writing the trace log to `log_dir`. Returns the log path, or `None`
/// when the crate was built without the `trace` feature. Later calls reuse
/// the first subscriber.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<PathBuf> {
    use std::sync::Once;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // flushed on process exit
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
    });
    Some(trace_file(log_dir))
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Option<PathBuf> {
    None
}
