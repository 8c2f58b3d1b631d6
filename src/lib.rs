//! Remux CLI Library
//!
//! Picks the best video track, one audio track per requested language and a
//! deduplicated set of subtitles across several media files, then builds the
//! mkvmerge command that merges them into a single Matroska file.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::errors::{DomainError, DomainResult};
pub use domain::model::{Input, Track, TrackKind, TrackRef, TrackSets};
