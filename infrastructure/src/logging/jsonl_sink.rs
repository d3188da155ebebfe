//! JSONL file writer for load-test samples.
//!
//! Each [`VoteSample`] is serialized as a single JSON line and appended to the
//! file via a buffered writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use votestream_application::{SampleSink, VoteSample};

/// JSONL sample sink that writes one JSON object per vote request.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlSampleSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlSampleSink {
    /// Create a new sink writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist,
    /// truncating an existing file. Returns `None` if the file cannot be
    /// created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create sample directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create sample file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the sample file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

impl SampleSink for JsonlSampleSink {
    fn record(&self, sample: VoteSample) {
        let Ok(line) = serde_json::to_string(&sample) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

impl Drop for JsonlSampleSink {
    fn drop(&mut self) {
        self.flush();
    }
}
