//! mkvmerge adapter for media file probing
//!
//! Runs `mkvmerge -F json -i <file>` and decodes the identification payload
//! into a [`ProbeReport`].

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// mkvmerge-based probe adapter
pub struct MkvmergeProbeAdapter {
    program: String,
}

impl MkvmergeProbeAdapter {
    /// Create new probe adapter running the given mkvmerge binary
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl ProbePort for MkvmergeProbeAdapter {
    async fn probe(&self, file_path: &Path) -> Result<ProbeReport, DomainError> {
        info!("Getting file info for file: {}", file_path.display());

        let output = Command::new(&self.program)
            .args(["-F", "json", "-i"])
            .arg(file_path)
            .output()
            .await
            .map_err(|e| {
                DomainError::probe(file_path.display(), format!("failed to run {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let mut message = String::from_utf8_lossy(&output.stdout).into_owned();
            message.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(DomainError::probe(
                file_path.display(),
                format!("{} exited with {}: {}", self.program, output.status, message.trim()),
            ));
        }

        let mut report = parse_identification(&output.stdout)
            .map_err(|message| DomainError::probe(file_path.display(), message))?;

        report.size = tokio::fs::metadata(file_path)
            .await
            .map_err(|e| DomainError::probe(file_path.display(), format!("failed to stat file: {}", e)))?
            .len();

        debug!(
            "Probed {}: {} tracks, {:?}, {} bytes",
            file_path.display(),
            report.tracks.len(),
            report.duration,
            report.size
        );
        Ok(report)
    }
}

#[derive(Debug, Deserialize)]
struct Identification {
    container: Container,
    #[serde(default)]
    tracks: Vec<IdentifiedTrack>,
}

#[derive(Debug, Deserialize)]
struct Container {
    #[serde(default)]
    properties: ContainerProperties,
    supported: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ContainerProperties {
    /// Nanoseconds
    #[serde(default)]
    duration: u64,
}

#[derive(Debug, Deserialize)]
struct IdentifiedTrack {
    id: u32,
    #[serde(rename = "type")]
    kind: String,
    codec: String,
    #[serde(default)]
    properties: IdentifiedTrackProperties,
}

#[derive(Debug, Default, Deserialize)]
struct IdentifiedTrackProperties {
    #[serde(default)]
    codec_id: String,
    display_dimensions: Option<String>,
    #[serde(default)]
    language: String,
    #[serde(default)]
    forced_track: bool,
    #[serde(default)]
    default_track: bool,
}

/// Decode an mkvmerge JSON identification payload
///
/// The file size is left at zero; the caller fills it in.
pub fn parse_identification(payload: &[u8]) -> Result<ProbeReport, String> {
    let identification: Identification = serde_json::from_slice(payload)
        .map_err(|e| format!("malformed identification output: {}", e))?;

    let tracks = identification
        .tracks
        .into_iter()
        .filter_map(|track| match TrackKind::parse(&track.kind) {
            Some(kind) => Some(Track {
                id: track.id,
                kind,
                codec: track.codec,
                properties: TrackProperties {
                    codec_id: track.properties.codec_id,
                    dimensions: track.properties.display_dimensions,
                    language: track.properties.language,
                    forced: track.properties.forced_track,
                    default: track.properties.default_track,
                },
            }),
            None => {
                debug!("Ignoring track {} of type {}", track.id, track.kind);
                None
            }
        })
        .collect();

    Ok(ProbeReport {
        duration: Duration::from_nanos(identification.container.properties.duration),
        size: 0,
        supported: identification.container.supported,
        tracks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "container": {
            "properties": { "duration": 5400000000000 },
            "recognized": true,
            "supported": true,
            "type": "Matroska"
        },
        "tracks": [
            {
                "id": 0,
                "type": "video",
                "codec": "MPEG-H/HEVC/h.265",
                "properties": {
                    "codec_id": "V_MPEGH/ISO/HEVC",
                    "display_dimensions": "1920x1080",
                    "language": "und",
                    "default_track": true
                }
            },
            {
                "id": 1,
                "type": "audio",
                "codec": "AAC",
                "properties": { "codec_id": "A_AAC", "language": "eng" }
            },
            {
                "id": 2,
                "type": "subtitles",
                "codec": "SubRip/SRT",
                "properties": { "codec_id": "S_TEXT/UTF8", "language": "eng", "forced_track": true }
            },
            {
                "id": 3,
                "type": "buttons",
                "codec": "VobBtn",
                "properties": {}
            }
        ]
    }"#;

    #[test]
    fn test_parse_identification() {
        let report = parse_identification(SAMPLE.as_bytes()).unwrap();

        assert_eq!(report.duration, Duration::from_secs(5400));
        assert!(report.supported);
        assert_eq!(report.tracks.len(), 3);

        let video = &report.tracks[0];
        assert_eq!(video.kind, TrackKind::Video);
        assert!(video.is_hevc());
        assert_eq!(video.height(), 1080);
        assert!(video.properties.default);

        let audio = &report.tracks[1];
        assert_eq!(audio.kind, TrackKind::Audio);
        assert_eq!(audio.properties.codec_id, "A_AAC");
        assert_eq!(audio.properties.language, "eng");
        assert!(audio.properties.dimensions.is_none());

        let subtitle = &report.tracks[2];
        assert_eq!(subtitle.kind, TrackKind::Subtitle);
        assert!(subtitle.properties.forced);
        assert!(!subtitle.properties.default);
    }

    #[test]
    fn test_parse_identification_without_tracks_or_duration() {
        let report = parse_identification(br#"{"container": {"supported": false}}"#).unwrap();

        assert!(!report.supported);
        assert_eq!(report.duration, Duration::ZERO);
        assert!(report.tracks.is_empty());
    }

    #[test]
    fn test_parse_identification_malformed() {
        assert!(parse_identification(b"not json").is_err());
        assert!(parse_identification(br#"{"tracks": []}"#).is_err());
        assert!(parse_identification(br#"{"container": {"supported": true}, "tracks": [{"id": "x"}]}"#).is_err());
    }

    #[tokio::test]
    async fn test_probe_missing_binary_is_probe_failure() {
        let adapter = MkvmergeProbeAdapter::new("remux-test-binary-that-does-not-exist");

        let err = adapter.probe(Path::new("input.mkv")).await.unwrap_err();
        assert!(matches!(err, DomainError::ProbeFail { .. }));
    }
}
