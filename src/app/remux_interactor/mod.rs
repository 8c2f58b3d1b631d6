// Remux interactor - Orchestrates probe, selection, argument building and remux

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::app::track_repository::TrackRepository;
use crate::domain::arguments::build_arguments;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::TrackSelector;
use crate::ports::*;

/// Minimum number of input files for a remux
pub const MIN_INPUTS: usize = 2;

/// Request to remux the best tracks of several inputs into one file
#[derive(Debug, Clone, PartialEq)]
pub struct RemuxRequest {
    pub output: PathBuf,
    pub inputs: Vec<PathBuf>,
    /// Requested languages, in preference order
    pub languages: Vec<String>,
    pub dry_run: bool,
    pub skip_unsupported: bool,
}

impl RemuxRequest {
    /// Create a request, rejecting an empty output or too few inputs
    ///
    /// Paths must be valid UTF-8 since they are passed on to the remuxer as
    /// string arguments.
    pub fn new(output: impl Into<PathBuf>, inputs: Vec<PathBuf>) -> Result<Self, DomainError> {
        let output = output.into();
        if output.as_os_str().is_empty() {
            return Err(DomainError::BadArgs("output path cannot be empty".to_string()));
        }
        if inputs.len() < MIN_INPUTS {
            return Err(DomainError::BadArgs(format!(
                "at least {} input files are required, got {}",
                MIN_INPUTS,
                inputs.len()
            )));
        }
        if let Some(path) = std::iter::once(&output)
            .chain(&inputs)
            .find(|path| path.to_str().is_none())
        {
            return Err(DomainError::BadArgs(format!(
                "path is not valid UTF-8: {}",
                path.display()
            )));
        }

        Ok(Self {
            output,
            inputs,
            languages: Vec::new(),
            dry_run: false,
            skip_unsupported: false,
        })
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_skip_unsupported(mut self, skip_unsupported: bool) -> Self {
        self.skip_unsupported = skip_unsupported;
        self
    }
}

/// Owned snapshot of one selected track, for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedTrack {
    pub id: u32,
    pub kind: TrackKind,
    pub codec: String,
    pub codec_id: String,
    pub language: String,
    pub forced: bool,
    pub default: bool,
    pub file: String,
    pub position: usize,
}

impl From<TrackRef<'_>> for PlannedTrack {
    fn from(track_ref: TrackRef<'_>) -> Self {
        let track = track_ref.track;
        Self {
            id: track.id,
            kind: track.kind,
            codec: track.codec.clone(),
            codec_id: track.properties.codec_id.clone(),
            language: track.properties.language.clone(),
            forced: track.properties.forced,
            default: track.properties.default,
            file: track_ref.input.arg_path(),
            position: track_ref.position(),
        }
    }
}

impl fmt::Display for PlannedTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Track ID {} ({} in {}) from file {}",
            self.id, self.codec, self.language, self.file
        )
    }
}

/// The chosen tracks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemuxPlan {
    pub output: String,
    pub video: PlannedTrack,
    pub audios: Vec<PlannedTrack>,
    pub subtitles: Vec<PlannedTrack>,
}

/// Outcome of a remux request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemuxResponse {
    pub plan: RemuxPlan,
    /// Remuxer arguments, without the binary name
    pub arguments: Vec<String>,
    pub dry_run: bool,
    /// Captured remuxer output; `None` on a dry run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remux_output: Option<String>,
}

/// Interactor for the remux use case
pub struct RemuxInteractor {
    probe_port: Arc<dyn ProbePort>,
    remux_port: Arc<dyn RemuxPort>,
}

impl RemuxInteractor {
    /// Create new remux interactor with injected ports
    pub fn new(probe_port: Arc<dyn ProbePort>, remux_port: Arc<dyn RemuxPort>) -> Self {
        Self {
            probe_port,
            remux_port,
        }
    }

    /// Probe, select, build arguments and run the remuxer unless dry-running
    pub async fn execute(&self, request: RemuxRequest) -> Result<RemuxResponse, DomainError> {
        info!(
            "Remuxing {} inputs into {}",
            request.inputs.len(),
            request.output.display()
        );

        let repository = TrackRepository::build(
            self.probe_port.as_ref(),
            &request.inputs,
            request.skip_unsupported,
        )
        .await?;

        let output = request.output.to_string_lossy().into_owned();
        let (plan, arguments) = Self::plan(&repository, &output, &request.languages)?;
        debug!("Remuxer arguments: {:?}", arguments);

        if request.dry_run {
            info!("Dry run, not invoking the remuxer");
            return Ok(RemuxResponse {
                plan,
                arguments,
                dry_run: true,
                remux_output: None,
            });
        }

        let report = self.remux_port.remux(&arguments).await?;
        info!("Remux completed: {}", output);

        Ok(RemuxResponse {
            plan,
            arguments,
            dry_run: false,
            remux_output: Some(report.output),
        })
    }

    /// Select tracks from the repository and build the remuxer arguments
    pub fn plan(
        repository: &TrackRepository,
        output: &str,
        languages: &[String],
    ) -> DomainResult<(RemuxPlan, Vec<String>)> {
        let sets = repository.sets();
        debug!(
            "Selecting from {} videos, {} audios, {} subtitles",
            sets.videos.len(),
            sets.audios.len(),
            sets.subtitles.len()
        );

        let video = TrackSelector::choose_best_video(&sets.videos)?;
        let audios = TrackSelector::choose_best_audios(&sets.audios, languages)?;
        let subtitles = TrackSelector::choose_best_subtitles(&sets.subtitles, languages);

        let arguments = build_arguments(output, video, &audios, &subtitles);

        let plan = RemuxPlan {
            output: output.to_string(),
            video: video.into(),
            audios: audios.into_iter().map(PlannedTrack::from).collect(),
            subtitles: subtitles.into_iter().map(PlannedTrack::from).collect(),
        };

        Ok((plan, arguments))
    }
}
