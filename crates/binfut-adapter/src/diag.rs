/*
[INPUT]:  Request/response events from the HTTP client
[OUTPUT]: Append-only diagnostic records (file, memory, or discarded)
[POS]:    Observability layer - injected sink, no global logging state
[UPDATE]: When event shapes or the line format change
*/

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;

/// A single diagnostic record.
///
/// Request events carry the canonical query string as signed, which never
/// includes the `signature` parameter; the secret key never reaches this
/// layer at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    Request {
        method: String,
        path: String,
        query: String,
    },
    Response {
        status: u16,
        body: String,
    },
}

impl DiagnosticEvent {
    pub fn request(method: &str, path: &str, query: &str) -> Self {
        DiagnosticEvent::Request {
            method: method.to_string(),
            path: path.to_string(),
            query: query.to_string(),
        }
    }

    pub fn response(status: u16, body: &str) -> Self {
        DiagnosticEvent::Response {
            status,
            body: body.to_string(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            DiagnosticEvent::Request {
                method,
                path,
                query,
            } => format!("REQUEST {method} {path}?{query}"),
            DiagnosticEvent::Response { status, body } => {
                format!("STATUS {status} | RESPONSE {body}")
            }
        }
    }
}

/// Destination for diagnostic records, injected into the client at
/// construction.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: DiagnosticEvent);
}

/// Discards every event
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _event: DiagnosticEvent) {}
}

/// Appends one timestamped line per event to a log file
#[derive(Debug)]
pub struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl DiagnosticSink for FileSink {
    fn record(&self, event: DiagnosticEvent) {
        let line = format!(
            "{} | {}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            event.render()
        );
        // A failed log write must not abort the order flow
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Captures events in memory for assertions in tests
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, event: DiagnosticEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_render() {
        let event = DiagnosticEvent::request("POST", "/fapi/v1/order", "symbol=BTCUSDT");
        assert_eq!(event.render(), "REQUEST POST /fapi/v1/order?symbol=BTCUSDT");
    }

    #[test]
    fn test_response_render() {
        let event = DiagnosticEvent::response(400, r#"{"code":-1121}"#);
        assert_eq!(event.render(), r#"STATUS 400 | RESPONSE {"code":-1121}"#);
    }

    #[test]
    fn test_memory_sink_captures_in_order() {
        let sink = MemorySink::new();
        sink.record(DiagnosticEvent::request("GET", "/fapi/v2/account", ""));
        sink.record(DiagnosticEvent::response(200, "{}"));
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], DiagnosticEvent::Request { .. }));
        assert!(matches!(events[1], DiagnosticEvent::Response { .. }));
    }

    #[test]
    fn test_file_sink_appends() {
        let path = std::env::temp_dir().join(format!(
            "binfut-diag-test-{}-{}.log",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        {
            let sink = FileSink::open(&path).unwrap();
            sink.record(DiagnosticEvent::response(200, "{}"));
            sink.record(DiagnosticEvent::response(400, "{}"));
        }
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains("STATUS 200"));
        let _ = std::fs::remove_file(&path);
    }
}
