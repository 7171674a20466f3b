//! Destinations for finished frames.

use std::convert::Infallible;
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;

use super::RenderError;

/// Receives every frame the canvas emits, once per annotated frame.
pub trait FrameSink {
    /// Error type for output failures.
    type Error;

    fn emit(&mut self, frame: &RgbImage) -> Result<(), Self::Error>;
}

/// Discards frames. Use when annotated frames are only consumed through the
/// returned result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    type Error = Infallible;

    fn emit(&mut self, _frame: &RgbImage) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Keeps a copy of every emitted frame.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    frames: Vec<RgbImage>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames emitted so far, oldest first.
    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    /// Take the emitted frames.
    pub fn into_frames(self) -> Vec<RgbImage> {
        self.frames
    }
}

impl FrameSink for MemorySink {
    type Error = Infallible;

    fn emit(&mut self, frame: &RgbImage) -> Result<(), Self::Error> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Writes frames as numbered PNG files (`frame_000000.png`, ...).
///
/// The directory is created on the first emitted frame.
#[derive(Debug, Clone)]
pub struct ImageDirSink {
    dir: PathBuf,
    next_index: u64,
    created: bool,
}

impl ImageDirSink {
    /// Write frames into `dir`, starting at index 0.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next_index: 0,
            created: false,
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of frames written so far.
    pub fn written(&self) -> u64 {
        self.next_index
    }

    fn frame_path(&self, index: u64) -> PathBuf {
        self.dir.join(format!("frame_{index:06}.png"))
    }
}

impl FrameSink for ImageDirSink {
    type Error = RenderError;

    fn emit(&mut self, frame: &RgbImage) -> Result<(), Self::Error> {
        if !self.created {
            fs::create_dir_all(&self.dir).map_err(|source| RenderError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;
            self.created = true;
        }

        let path = self.frame_path(self.next_index);
        frame
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|source| RenderError::WriteFrame {
                path: path.clone(),
                source,
            })?;
        log::trace!("wrote {path:?}");
        self.next_index += 1;
        Ok(())
    }
}
