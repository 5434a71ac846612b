use std::sync::{LazyLock, Mutex};

use time_format::TimeStampMs;

pub struct LogSink {
    pub entries: Vec<LogEntry>,
}

pub struct LogEntry {
    pub time: TimeStampMs,
    pub level: log::Level,
    pub message: String,
    pub target: String,
}

pub static LOG_SINK: LazyLock<Mutex<LogSink>> = LazyLock::new(|| {
    Mutex::new(LogSink {
        entries: vec![],
    })
});

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(time) = time_format::now_ms() else {
            return;
        };
        let entry = LogEntry {
            time,
            level: record.level(),
            message: record.args().to_string(),
            target: record.target().to_string(),
        };
        if let Ok(mut sink) = LOG_SINK.lock() {
            sink.entries.push(entry);
        }
    }

    fn flush(&self) {
        for entry in drain() {
            eprintln!("{}", format_entry(&entry));
        }
    }
}

static LOGGER: Logger = Logger;

/// Initialise the global logger.
pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_max_level(level);
    log::set_logger(&LOGGER)
}

/// Takes every buffered entry out of the sink.
pub fn drain() -> Vec<LogEntry> {
    match LOG_SINK.lock() {
        Ok(mut sink) => std::mem::take(&mut sink.entries),
        Err(_) => vec![],
    }
}

fn format_timestamp(entry: &LogEntry) -> String {
    let format = time_format::DateFormat::Custom("%H:%M:%S.{ms}");
    time_format::format_common_ms_local(entry.time, format).unwrap_or_else(|_| "???".to_string())
}

pub fn format_entry(entry: &LogEntry) -> String {
    format!("{} {:<5} [{}] {}", format_timestamp(entry), entry.level, entry.target, entry.message)
}
