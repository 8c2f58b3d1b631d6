// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

/// Codec name mkvmerge reports for HEVC video
pub const HEVC_CODEC: &str = "MPEG-H/HEVC/h.265";

/// Matroska codec id for HEVC video
pub const HEVC_CODEC_ID: &str = "V_MPEGH/ISO/HEVC";

/// Kind of elementary stream inside a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Video,
    Audio,
    Subtitle,
}

impl TrackKind {
    /// Parse the probe's track type; unknown types yield `None`
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "video" => Some(TrackKind::Video),
            "audio" => Some(TrackKind::Audio),
            "subtitles" => Some(TrackKind::Subtitle),
            _ => None,
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Video => write!(f, "video"),
            TrackKind::Audio => write!(f, "audio"),
            TrackKind::Subtitle => write!(f, "subtitles"),
        }
    }
}

/// Display dimensions of a video track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Parse a `"<width>x<height>"` string
    pub fn parse(raw: &str) -> Option<Self> {
        let (width, height) = raw.trim().split_once('x')?;
        Some(Self {
            width: width.trim().parse().ok()?,
            height: height.trim().parse().ok()?,
        })
    }
}

/// Per-track properties reported by the probe
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackProperties {
    pub codec_id: String,
    /// Raw `"WxH"` string, video only
    pub dimensions: Option<String>,
    pub language: String,
    pub forced: bool,
    pub default: bool,
}

/// One elementary stream within a container file
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Unique only within the owning input
    pub id: u32,
    pub kind: TrackKind,
    pub codec: String,
    pub properties: TrackProperties,
}

impl Track {
    /// Create a track with default properties
    pub fn new(id: u32, kind: TrackKind, codec: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            codec: codec.into(),
            properties: TrackProperties::default(),
        }
    }

    pub fn with_codec_id(mut self, codec_id: impl Into<String>) -> Self {
        self.properties.codec_id = codec_id.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.properties.language = language.into();
        self
    }

    pub fn with_dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.properties.dimensions = Some(dimensions.into());
        self
    }

    pub fn forced(mut self) -> Self {
        self.properties.forced = true;
        self
    }

    pub fn default_track(mut self) -> Self {
        self.properties.default = true;
        self
    }

    /// Parsed display dimensions, if present and well formed
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.properties.dimensions.as_deref().and_then(Dimensions::parse)
    }

    /// Height used for ranking; unparsable or missing dimensions rank as 0
    pub fn height(&self) -> u32 {
        self.dimensions().map_or(0, |d| d.height)
    }

    pub fn is_hevc(&self) -> bool {
        self.codec == HEVC_CODEC || self.properties.codec_id == HEVC_CODEC_ID
    }

    /// Track id as a remuxer argument
    pub fn arg_id(&self) -> String {
        self.id.to_string()
    }

    /// `"<id>:<label>"`, the remuxer's per-track option syntax
    pub fn arg_id_label(&self, label: &str) -> String {
        format!("{}:{}", self.id, label)
    }
}

/// One probed input file, owning its tracks
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub path: PathBuf,
    /// Index in the original input list
    pub position: usize,
    pub duration: Duration,
    pub size: u64,
    pub supported: bool,
    pub tracks: Vec<Track>,
}

impl Input {
    /// Create an input with no tracks and empty metadata
    pub fn new(path: impl Into<PathBuf>, position: usize) -> Self {
        Self {
            path: path.into(),
            position,
            duration: Duration::ZERO,
            size: 0,
            supported: true,
            tracks: Vec::new(),
        }
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Source path as a remuxer argument
    ///
    /// Lossy for non-UTF-8 paths; remux requests reject those up front.
    pub fn arg_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// A track paired with the input it belongs to
///
/// Holds borrows only, so the input always outlives the reference.
#[derive(Debug, Clone, Copy)]
pub struct TrackRef<'a> {
    pub input: &'a Input,
    pub track: &'a Track,
}

impl<'a> TrackRef<'a> {
    pub fn new(input: &'a Input, track: &'a Track) -> Self {
        Self { input, track }
    }

    pub fn position(&self) -> usize {
        self.input.position
    }

    pub fn language(&self) -> &'a str {
        &self.track.properties.language
    }

    pub fn codec_id(&self) -> &'a str {
        &self.track.properties.codec_id
    }

    /// Whether both references point at the very same input and track
    pub fn same_as(&self, other: &TrackRef<'_>) -> bool {
        std::ptr::eq(self.input, other.input) && std::ptr::eq(self.track, other.track)
    }
}

impl fmt::Display for TrackRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Track ID {} ({} in {}) from file {}",
            self.track.id,
            self.track.codec,
            self.track.properties.language,
            self.input.path.display()
        )
    }
}

/// Video, audio and subtitle collections built over a set of inputs
///
/// Order is input-list order, then track order within each file.
#[derive(Debug, Clone, Default)]
pub struct TrackSets<'a> {
    pub videos: Vec<TrackRef<'a>>,
    pub audios: Vec<TrackRef<'a>>,
    pub subtitles: Vec<TrackRef<'a>>,
}

impl<'a> TrackSets<'a> {
    /// Bucket every track of `inputs` by kind
    pub fn from_inputs<I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = &'a Input>,
    {
        let mut sets = Self::default();
        for input in inputs {
            for track in &input.tracks {
                let bucket = match track.kind {
                    TrackKind::Video => &mut sets.videos,
                    TrackKind::Audio => &mut sets.audios,
                    TrackKind::Subtitle => &mut sets.subtitles,
                };
                bucket.push(TrackRef::new(input, track));
            }
        }
        sets
    }

    /// Get total number of tracks
    pub fn total_tracks(&self) -> usize {
        self.videos.len() + self.audios.len() + self.subtitles.len()
    }
}
