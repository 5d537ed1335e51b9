//! Run log: one plain-text file per run.
//!
//! Every line reads `timestamp - component - LEVEL - message`. The file is
//! written through a `tracing-appender` non-blocking worker; [`RunLog`] owns
//! the worker guard, so pending lines are flushed when it is dropped.

use chrono::{DateTime, Local};
use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{Layer, fmt as tfmt};

/// Timestamp shared by the log and transcript names of one run
pub fn run_stamp(at: DateTime<Local>) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

pub fn log_file_name(stamp: &str) -> String {
    format!("clarifier_{}.log", stamp)
}

pub fn transcript_file_name(stamp: &str) -> String {
    format!("clarifier_{}.conversation.jsonl", stamp)
}

/// Parse a configured level, falling back to `info`
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}

/// `timestamp - component - LEVEL - ` prefix of one run log line
pub fn line_prefix(at: DateTime<Local>, component: &str, level: &Level) -> String {
    format!(
        "{} - {} - {} - ",
        at.format("%Y-%m-%d %H:%M:%S,%3f"),
        component,
        level
    )
}

/// Event formatter for the run log file
pub struct RunLogFormat;

impl<S, N> FormatEvent<S, N> for RunLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{}",
            line_prefix(Local::now(), meta.target(), meta.level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Open run log file. Keep it alive until the end of `main`.
pub struct RunLog {
    path: PathBuf,
    _guard: WorkerGuard,
}

impl RunLog {
    /// Create `dir/clarifier_<stamp>.log` and its background writer.
    pub fn create(dir: &Path, stamp: &str) -> io::Result<(Self, NonBlocking)> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(log_file_name(stamp));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        Ok((
            Self {
                path,
                _guard: guard,
            },
            writer,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `tracing-subscriber` layer writing run log lines at `level` and above
pub fn run_log_layer<S>(writer: NonBlocking, level: LevelFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tfmt::layer()
        .event_format(RunLogFormat)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_file_names_share_stamp() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let stamp = run_stamp(at);
        assert_eq!(stamp, "20240309_140507");
        assert_eq!(log_file_name(&stamp), "clarifier_20240309_140507.log");
        assert_eq!(
            transcript_file_name(&stamp),
            "clarifier_20240309_140507.conversation.jsonl"
        );
    }

    #[test]
    fn test_line_prefix_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            line_prefix(at, "clarifier", &Level::WARN),
            "2024-03-09 14:05:07,000 - clarifier - WARN - "
        );
    }

    #[test]
    fn test_parse_level_falls_back_to_info() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level("loud"), LevelFilter::INFO);
    }

    #[test]
    fn test_formatter_writes_component_level_and_message() {
        let buf = SharedBuf::default();
        let sink = buf.clone();
        let subscriber = tracing_subscriber::registry().with(
            tfmt::layer()
                .event_format(RunLogFormat)
                .with_ansi(false)
                .with_writer(move || sink.clone()),
        );

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "pipeline", "Calling Reader Agent");
        });

        let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let line = output.lines().next().unwrap();
        assert!(line.ends_with(" - pipeline - INFO - Calling Reader Agent"));
    }

    #[test]
    fn test_create_makes_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        let (run_log, _writer) = RunLog::create(&logs, "20240101_000000").unwrap();
        assert!(run_log.path().exists());
        assert_eq!(
            run_log.path().file_name().unwrap(),
            "clarifier_20240101_000000.log"
        );
    }
}
