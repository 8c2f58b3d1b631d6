// Domain rules - Track selection policies

use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Audio codec preference, best first, as (label, codec id) pairs
pub const AUDIO_CODEC_LADDER: &[(&str, &str)] = &[
    ("AAC", "A_AAC"),
    ("Vorbis", "A_VORBIS"),
    ("Opus", "A_OPUS"),
    ("AC-3", "A_AC3"),
];

/// Business rules for picking tracks out of the aggregated inputs
pub struct TrackSelector;

impl TrackSelector {
    /// Choose the single best video track
    ///
    /// A lone HEVC track wins outright. Otherwise the HEVC tracks (or every
    /// track, when there is no HEVC) are ranked by height, ties going to the
    /// later input.
    pub fn choose_best_video<'a>(videos: &[TrackRef<'a>]) -> DomainResult<TrackRef<'a>> {
        if videos.is_empty() {
            return Err(DomainError::SelectionFail(
                "no video tracks found in any input".to_string(),
            ));
        }

        let hevc: Vec<TrackRef<'a>> = videos.iter().copied().filter(|v| v.track.is_hevc()).collect();

        if let [only] = hevc.as_slice() {
            debug!("Single HEVC source found: {}", only);
            return Ok(*only);
        }

        let mut candidates = if hevc.is_empty() { videos.to_vec() } else { hevc };
        candidates.sort_by(|a, b| {
            b.track
                .height()
                .cmp(&a.track.height())
                .then_with(|| b.position().cmp(&a.position()))
        });

        let best = candidates[0];
        debug!("Best video by height and position: {}", best);
        Ok(best)
    }

    /// Choose one audio track per requested language, in request order
    ///
    /// With no languages requested the full audio set is returned untouched.
    pub fn choose_best_audios<'a>(
        audios: &[TrackRef<'a>],
        languages: &[String],
    ) -> DomainResult<Vec<TrackRef<'a>>> {
        if languages.is_empty() {
            return Ok(audios.to_vec());
        }

        languages
            .iter()
            .map(|language| Self::choose_best_audio(audios, language))
            .collect()
    }

    /// Choose the best audio track for a single language
    ///
    /// When the language is missing entirely, every audio track competes.
    /// The codec ladder is always evaluated against the full audio set.
    pub fn choose_best_audio<'a>(
        audios: &[TrackRef<'a>],
        language: &str,
    ) -> DomainResult<TrackRef<'a>> {
        if audios.is_empty() {
            return Err(DomainError::SelectionFail(
                "no audio tracks found in any input".to_string(),
            ));
        }

        let matching: Vec<TrackRef<'a>> = audios
            .iter()
            .copied()
            .filter(|a| a.language() == language)
            .collect();

        let mut candidates = match matching.len() {
            1 => {
                debug!("Only audio track in {}: {}", language, matching[0]);
                return Ok(matching[0]);
            }
            0 => {
                debug!("No audio track in {}, considering all audio tracks", language);
                audios.to_vec()
            }
            _ => matching,
        };

        for (label, codec_id) in AUDIO_CODEC_LADDER {
            if let Some(found) = audios.iter().find(|a| a.codec_id() == *codec_id) {
                debug!("Preferred {} audio for {}: {}", label, language, found);
                return Ok(*found);
            }
        }

        candidates.sort_by(|a, b| b.position().cmp(&a.position()));
        let best = candidates[0];
        debug!("No preferred codec for {}, using input priority: {}", language, best);
        Ok(best)
    }

    /// Choose subtitles for each requested language, in request order
    ///
    /// Each language keeps at most one forced and one regular track. When no
    /// subtitle anywhere is flagged forced, the first default-flagged track
    /// counts as forced while deduplicating.
    pub fn choose_best_subtitles<'a>(
        subtitles: &[TrackRef<'a>],
        languages: &[String],
    ) -> Vec<TrackRef<'a>> {
        if languages.is_empty() {
            return subtitles.to_vec();
        }

        let promoted = Self::promoted_forced(subtitles);

        languages
            .iter()
            .flat_map(|language| {
                let matching = subtitles
                    .iter()
                    .copied()
                    .filter(|s| s.language() == language.as_str());
                Self::dedup_subtitles(matching, promoted)
            })
            .collect()
    }

    /// The default track standing in for a forced one, if no track is forced
    fn promoted_forced<'a>(subtitles: &[TrackRef<'a>]) -> Option<TrackRef<'a>> {
        if subtitles.iter().any(|s| s.track.properties.forced) {
            return None;
        }
        subtitles
            .iter()
            .copied()
            .find(|s| s.track.properties.default)
    }

    fn effective_forced(subtitle: &TrackRef<'_>, promoted: Option<TrackRef<'_>>) -> bool {
        subtitle.track.properties.forced || promoted.is_some_and(|p| p.same_as(subtitle))
    }

    fn dedup_subtitles<'a, I>(subtitles: I, promoted: Option<TrackRef<'a>>) -> Vec<TrackRef<'a>>
    where
        I: Iterator<Item = TrackRef<'a>>,
    {
        subtitles
            .fold(SubtitleDedup::default(), |mut acc, subtitle| {
                let forced = Self::effective_forced(&subtitle, promoted);
                let seen = if forced {
                    &mut acc.forced_seen
                } else {
                    &mut acc.regular_seen
                };
                if !*seen {
                    *seen = true;
                    acc.kept.push(subtitle);
                }
                acc
            })
            .kept
    }
}

/// Fold accumulator for subtitle deduplication
#[derive(Default)]
struct SubtitleDedup<'a> {
    forced_seen: bool,
    regular_seen: bool,
    kept: Vec<TrackRef<'a>>,
}

#[cfg(test)]
mod tests;
