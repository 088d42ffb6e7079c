//! Common test utilities: roster builders and temporary workspaces.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use seatchart::{Occupant, Roster};

// ============================================================================
// Roster CSV Builder
// ============================================================================

/// Builder for roster CSV text in the course-participant export layout.
#[derive(Debug, Clone)]
pub struct RosterCsvBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Default for RosterCsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterCsvBuilder {
    /// Start with `First name,Surname,ID number,Email address` headers.
    pub fn new() -> Self {
        Self::with_headers(&["First name", "Surname", "ID number", "Email address"])
    }

    pub fn with_headers(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a student under the default headers.
    pub fn student(self, name: &str, id: &str) -> Self {
        let email = format!("{}@example.edu", id);
        self.row(&[name, "Doe", id, &email])
    }

    /// Add `n` students named `Student 0..n` with IDs `S000..`.
    pub fn students(mut self, n: usize) -> Self {
        for i in 0..n {
            self = self.student(&format!("Student {i}"), &format!("S{i:03}"));
        }
        self
    }

    pub fn row(mut self, values: &[&str]) -> Self {
        self.rows.push(values.iter().map(ToString::to_string).collect());
        self
    }

    pub fn build(&self) -> String {
        let mut out = csv_line(&self.headers);
        for row in &self.rows {
            out.push_str(&csv_line(row));
        }
        out
    }

    /// Write the CSV into `dir` and return its path.
    pub fn write_to(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, self.build()).expect("Failed to write roster");
        path
    }
}

fn csv_line(values: &[String]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|v| {
            if v.contains(',') || v.contains('"') || v.contains('\n') {
                format!("\"{}\"", v.replace('"', "\"\""))
            } else {
                v.clone()
            }
        })
        .collect();
    format!("{}\n", quoted.join(","))
}

// ============================================================================
// Helpers
// ============================================================================

/// Roster of `(name, id)` pairs in order.
pub fn roster_of(pairs: &[(&str, &str)]) -> Roster {
    pairs
        .iter()
        .map(|(name, id)| Occupant::new(*name, *id))
        .collect()
}

/// Text of every `<td>` in document order.
pub fn td_cells(html: &str) -> Vec<String> {
    html.lines()
        .map(str::trim)
        .filter(|l| l.starts_with("<td"))
        .map(ToString::to_string)
        .collect()
}

// ============================================================================
// Log Capture
// ============================================================================

/// Shared buffer that a `tracing_subscriber::fmt` subscriber writes into.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Lines of captured output at `level` (e.g. `"WARN"`).
    pub fn lines_at(&self, level: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|l| l.split_whitespace().next() == Some(level))
            .map(ToString::to_string)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a plain-text fmt subscriber installed for this thread and
/// return its result along with everything it logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, LogBuffer) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer)
}
