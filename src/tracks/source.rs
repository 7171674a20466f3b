//! Trait for tracker backends, plus two small built-in sources.

use std::collections::{BTreeSet, VecDeque};

use image::RgbImage;

use super::Track;

/// Trait for object tracking backends.
///
/// Implement this trait to connect any detector + tracker to the annotator.
/// Each call corresponds to exactly one frame and must return a finite list,
/// possibly empty. The order of the returned tracks is the order in which they
/// are drawn.
///
/// # Example
///
/// ```ignore
/// use vision_eye::{Track, TrackSource};
///
/// struct MyTracker {
///     // Your model and tracker state here
/// }
///
/// impl TrackSource for MyTracker {
///     type Error = std::io::Error;
///
///     fn tracks(&mut self, frame: &image::RgbImage) -> Result<Vec<Track>, Self::Error> {
///         // Run inference + association and return the tracks of this frame
///         Ok(vec![])
///     }
/// }
/// ```
pub trait TrackSource {
    /// Error type for tracking failures.
    type Error;

    /// Extract the tracks present in `frame`.
    fn tracks(&mut self, frame: &RgbImage) -> Result<Vec<Track>, Self::Error>;
}

impl<S: TrackSource + ?Sized> TrackSource for &mut S {
    type Error = S::Error;

    fn tracks(&mut self, frame: &RgbImage) -> Result<Vec<Track>, Self::Error> {
        (**self).tracks(frame)
    }
}

/// Helper trait for converting tracker-specific outputs to `Track`.
///
/// Implement this for your tracker's output format to enable easy conversion.
pub trait IntoTracks {
    /// Convert the output into a vector of tracks.
    fn into_tracks(self) -> Vec<Track>;
}

impl IntoTracks for Vec<Track> {
    fn into_tracks(self) -> Vec<Track> {
        self
    }
}

/// Errors reported by the built-in track sources.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("replay exhausted: no tracks recorded for frame {frame}")]
    Exhausted { frame: usize },
}

/// Replays pre-recorded per-frame track lists, one list per call.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    frames: VecDeque<Vec<Track>>,
    served: usize,
}

impl ReplaySource {
    pub fn new<I, T>(frames: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoTracks,
    {
        Self {
            frames: frames.into_iter().map(IntoTracks::into_tracks).collect(),
            served: 0,
        }
    }

    /// Number of frames not yet replayed.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// Queue another frame's tracks at the end of the replay.
    pub fn push_frame(&mut self, tracks: impl IntoTracks) {
        self.frames.push_back(tracks.into_tracks());
    }
}

impl TrackSource for ReplaySource {
    type Error = SourceError;

    fn tracks(&mut self, _frame: &RgbImage) -> Result<Vec<Track>, Self::Error> {
        let tracks = self.frames.pop_front().ok_or(SourceError::Exhausted {
            frame: self.served,
        })?;
        self.served += 1;
        Ok(tracks)
    }
}

/// Keeps only tracks whose class is in an allow-list.
///
/// This is tracker-side filtering: the annotator still counts exactly what
/// the wrapped source hands over after the filter.
#[derive(Debug, Clone)]
pub struct ClassFilter<S> {
    inner: S,
    classes: BTreeSet<u32>,
}

impl<S: TrackSource> ClassFilter<S> {
    pub fn new(inner: S, classes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            inner,
            classes: classes.into_iter().collect(),
        }
    }

    /// Get a reference to the wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the filter, returning the wrapped source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: TrackSource> TrackSource for ClassFilter<S> {
    type Error = S::Error;

    fn tracks(&mut self, frame: &RgbImage) -> Result<Vec<Track>, Self::Error> {
        let mut tracks = self.inner.tracks(frame)?;
        tracks.retain(|t| self.classes.contains(&t.class_id));
        Ok(tracks)
    }
}
