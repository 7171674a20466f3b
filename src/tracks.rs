//! Per-frame track data and the sources that produce it.
//!
//! Detection and identity tracking happen outside this crate. A tracker is
//! plugged in by implementing [`TrackSource`]; the types here describe what it
//! hands over for each frame.

mod builder;
mod names;
mod source;
mod track;

pub use builder::TrackBuilder;
pub use names::ClassNames;
pub use source::{ClassFilter, IntoTracks, ReplaySource, SourceError, TrackSource};
pub use track::Track;
