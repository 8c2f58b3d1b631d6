// Track repository - Aggregates probed inputs into typed track collections

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Probed inputs in original list order
///
/// Owns every [`Input`]; the track collections handed out by [`sets`]
/// borrow from it.
///
/// [`sets`]: TrackRepository::sets
#[derive(Debug, Clone, Default)]
pub struct TrackRepository {
    inputs: Vec<Input>,
}

impl TrackRepository {
    /// Probe every path in order, assigning position = list index
    ///
    /// The first probe failure aborts the whole build. With
    /// `skip_unsupported`, inputs the probe flags as unsupported keep their
    /// position but contribute no tracks.
    pub async fn build(
        probe: &dyn ProbePort,
        paths: &[PathBuf],
        skip_unsupported: bool,
    ) -> DomainResult<Self> {
        let mut inputs = Vec::with_capacity(paths.len());

        for (position, path) in paths.iter().enumerate() {
            let report = probe.probe(path).await?;
            let mut input = report.into_input(path.clone(), position);

            if !input.supported {
                if skip_unsupported {
                    warn!(
                        "Skipping tracks of unsupported file {} ({} tracks)",
                        path.display(),
                        input.tracks.len()
                    );
                    input.tracks.clear();
                } else {
                    warn!("File {} is flagged as unsupported by the probe", path.display());
                }
            }

            debug!(
                "Input {} at position {}: {} tracks",
                path.display(),
                position,
                input.tracks.len()
            );
            inputs.push(input);
        }

        let repository = Self { inputs };
        info!(
            "Probed {} input files with {} usable tracks",
            repository.inputs.len(),
            repository.sets().total_tracks()
        );
        Ok(repository)
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    /// Video, audio and subtitle collections over all inputs
    pub fn sets(&self) -> TrackSets<'_> {
        TrackSets::from_inputs(&self.inputs)
    }
}
