//! JSON-lines recording of render snapshots.
//!
//! One snapshot per line, so recordings can be streamed into other tools or
//! replayed by an external renderer frame by frame.

use crate::error::Result;
use biotelia_data::RenderSnapshot;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct FrameRecorder<W: Write> {
    writer: W,
    frames: u64,
}

impl FrameRecorder<BufWriter<File>> {
    /// Creates (or truncates) the recording file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> FrameRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frames: 0 }
    }

    pub fn record(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.frames += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
