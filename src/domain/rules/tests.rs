// Unit tests for track selection rules

use super::*;

fn video(id: u32, codec: &str, dimensions: &str) -> Track {
    Track::new(id, TrackKind::Video, codec).with_dimensions(dimensions)
}

fn audio(id: u32, language: &str, codec_id: &str) -> Track {
    Track::new(id, TrackKind::Audio, codec_id)
        .with_codec_id(codec_id)
        .with_language(language)
}

fn subtitle(id: u32, language: &str) -> Track {
    Track::new(id, TrackKind::Subtitle, "SubRip/SRT").with_language(language)
}

/// One input per track, positions following the list order
fn one_track_per_input(tracks: Vec<Track>) -> Vec<Input> {
    tracks
        .into_iter()
        .enumerate()
        .map(|(position, track)| Input::new(format!("input{}.mkv", position), position).with_track(track))
        .collect()
}

fn langs(languages: &[&str]) -> Vec<String> {
    languages.iter().map(|l| l.to_string()).collect()
}

fn ids(tracks: &[TrackRef<'_>]) -> Vec<u32> {
    tracks.iter().map(|t| t.track.id).collect()
}

// Video

#[test]
fn test_best_video_returns_unique_hevc_source() {
    let inputs = one_track_per_input(vec![
        video(0, "AVC/H.264/MPEG-4p10", "3840x2160"),
        video(1, HEVC_CODEC, "640x480"),
    ]);
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_video(&sets.videos).unwrap();
    assert_eq!(best.track.id, 1);
}

#[test]
fn test_best_video_unique_hevc_without_dimensions() {
    let inputs = vec![Input::new("a.mkv", 0)
        .with_track(Track::new(0, TrackKind::Video, "Whatever other codec"))
        .with_track(Track::new(1, TrackKind::Video, HEVC_CODEC))];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_video(&sets.videos).unwrap();
    assert_eq!(best.track.id, 1);
}

#[test]
fn test_best_video_decides_between_hevc_sources_by_height() {
    let inputs = one_track_per_input(vec![
        video(0, HEVC_CODEC, "1920x1080"),
        video(1, HEVC_CODEC, "1280x720"),
        video(2, HEVC_CODEC, "640x480"),
    ]);
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_video(&sets.videos).unwrap();
    assert_eq!(best.track.id, 0);
}

#[test]
fn test_best_video_ignores_taller_non_hevc_when_several_hevc_exist() {
    let inputs = one_track_per_input(vec![
        video(0, "AVC/H.264/MPEG-4p10", "2160x3840"),
        video(1, HEVC_CODEC, "1280x720"),
        video(2, HEVC_CODEC, "1920x1080"),
    ]);
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_video(&sets.videos).unwrap();
    assert_eq!(best.track.id, 2);
}

#[test]
fn test_best_video_hevc_tie_goes_to_latest_input() {
    let inputs = one_track_per_input(vec![
        video(0, HEVC_CODEC, "1920x1080"),
        video(1, HEVC_CODEC, "1920x1080"),
        video(2, HEVC_CODEC, "1920x1080"),
    ]);
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_video(&sets.videos).unwrap();
    assert_eq!(best.position(), 2);
    assert_eq!(best.track.id, 2);
}

#[test]
fn test_best_video_non_hevc_tie_goes_to_latest_input() {
    let inputs = one_track_per_input(vec![
        video(0, "whatever", "1920x1080"),
        video(1, "whatever", "1920x1080"),
        video(2, "whatever", "1920x1080"),
    ]);
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_video(&sets.videos).unwrap();
    assert_eq!(best.position(), 2);
}

#[test]
fn test_best_video_unparsable_dimensions_rank_lowest() {
    let inputs = one_track_per_input(vec![
        video(0, "whatever", "640x480"),
        video(1, "whatever", "garbage"),
    ]);
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_video(&sets.videos).unwrap();
    assert_eq!(best.track.id, 0);
}

#[test]
fn test_best_video_fails_on_empty_set() {
    let err = TrackSelector::choose_best_video(&[]).unwrap_err();
    assert!(matches!(err, DomainError::SelectionFail(_)));
}

// Audio

#[test]
fn test_best_audio_returns_the_only_one_with_language() {
    let inputs = vec![Input::new("a.mkv", 0)
        .with_track(audio(0, "eng", "A_AAC"))
        .with_track(audio(1, "spa", "A_DTS"))];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_audio(&sets.audios, "spa").unwrap();
    assert_eq!(best.track.id, 1);
}

#[test]
fn test_best_audios_prefers_aac_between_same_language_tracks() {
    let inputs = vec![Input::new("a.mkv", 0)
        .with_track(audio(0, "eng", "A_VORBIS"))
        .with_track(audio(1, "eng", "A_AAC"))];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_audios(&sets.audios, &langs(&["eng"])).unwrap();
    assert_eq!(ids(&best), vec![1]);
}

#[test]
fn test_best_audios_prefers_vorbis_over_ac3() {
    let inputs = vec![Input::new("a.mkv", 0)
        .with_track(audio(0, "eng", "A_VORBIS"))
        .with_track(audio(1, "eng", "A_AC3"))];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_audios(&sets.audios, &langs(&["eng"])).unwrap();
    assert_eq!(ids(&best), vec![0]);
}

#[test]
fn test_best_audio_ladder_scans_the_full_audio_set() {
    let inputs = vec![
        Input::new("a.mkv", 0)
            .with_track(audio(0, "eng", "A_AC3"))
            .with_track(audio(1, "eng", "A_OPUS")),
        Input::new("b.mkv", 1).with_track(audio(7, "jpn", "A_AAC")),
    ];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_audio(&sets.audios, "eng").unwrap();
    assert_eq!(best.track.id, 7);
    assert_eq!(best.language(), "jpn");
}

#[test]
fn test_best_audio_single_match_beats_better_codec_elsewhere() {
    let inputs = vec![
        Input::new("a.mkv", 0).with_track(audio(0, "eng", "A_AAC")),
        Input::new("b.mkv", 1).with_track(audio(0, "spa", "A_AC3")),
    ];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_audio(&sets.audios, "spa").unwrap();
    assert_eq!(best.position(), 1);
    assert_eq!(best.codec_id(), "A_AC3");
}

#[test]
fn test_best_audio_unknown_codecs_fall_back_to_latest_input() {
    let inputs = vec![
        Input::new("a.mkv", 0).with_track(audio(1, "eng", "whatever")),
        Input::new("b.mkv", 1).with_track(audio(0, "eng", "whatever")),
    ];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_audios(&sets.audios, &langs(&["eng"])).unwrap();
    assert_eq!(ids(&best), vec![0]);
    assert_eq!(best[0].position(), 1);
}

#[test]
fn test_best_audio_missing_language_considers_every_track() {
    let inputs = vec![
        Input::new("a.mkv", 0).with_track(audio(0, "eng", "A_DTS")),
        Input::new("b.mkv", 1).with_track(audio(0, "spa", "A_OPUS")),
    ];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_audio(&sets.audios, "fre").unwrap();
    assert_eq!(best.language(), "spa");
}

#[test]
fn test_best_audio_missing_language_and_unknown_codecs_uses_position() {
    let inputs = vec![
        Input::new("a.mkv", 0).with_track(audio(0, "eng", "A_DTS")),
        Input::new("b.mkv", 1).with_track(audio(0, "spa", "A_TRUEHD")),
    ];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_audio(&sets.audios, "fre").unwrap();
    assert_eq!(best.position(), 1);
}

#[test]
fn test_best_audios_one_result_per_language_in_order() {
    let inputs = vec![
        Input::new("a.mkv", 0).with_track(audio(0, "eng", "A_AAC")),
        Input::new("b.mkv", 1).with_track(audio(1, "spa", "A_AC3")),
    ];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_audios(&sets.audios, &langs(&["spa", "eng"])).unwrap();
    let picked: Vec<&str> = best.iter().map(|a| a.language()).collect();
    assert_eq!(picked, vec!["spa", "eng"]);
}

#[test]
fn test_best_audios_without_languages_returns_everything() {
    let inputs = vec![Input::new("a.mkv", 0)
        .with_track(audio(0, "eng", "A_AC3"))
        .with_track(audio(1, "spa", "A_AAC"))];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_audios(&sets.audios, &[]).unwrap();
    assert_eq!(ids(&best), vec![0, 1]);
}

#[test]
fn test_best_audios_fail_on_empty_set() {
    let err = TrackSelector::choose_best_audios(&[], &langs(&["eng"])).unwrap_err();
    assert!(matches!(err, DomainError::SelectionFail(_)));
}

// Subtitles

#[test]
fn test_best_subtitles_keep_one_forced_and_one_regular() {
    let inputs = vec![Input::new("a.mkv", 0)
        .with_track(subtitle(0, "eng"))
        .with_track(subtitle(1, "eng").forced())
        .with_track(subtitle(2, "eng"))
        .with_track(subtitle(3, "eng").forced())
        .with_track(subtitle(4, "spa"))];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_subtitles(&sets.subtitles, &langs(&["eng"]));
    assert_eq!(ids(&best), vec![0, 1]);
}

#[test]
fn test_best_subtitles_preserve_relative_order_across_inputs() {
    let inputs = vec![
        Input::new("a.mkv", 0).with_track(subtitle(5, "eng").forced()),
        Input::new("b.mkv", 1)
            .with_track(subtitle(6, "eng").forced())
            .with_track(subtitle(7, "eng")),
    ];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_subtitles(&sets.subtitles, &langs(&["eng"]));
    assert_eq!(ids(&best), vec![5, 7]);
}

#[test]
fn test_best_subtitles_concatenate_languages_in_request_order() {
    let inputs = vec![Input::new("a.mkv", 0)
        .with_track(subtitle(0, "eng"))
        .with_track(subtitle(1, "spa"))
        .with_track(subtitle(2, "fre"))];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_subtitles(&sets.subtitles, &langs(&["spa", "eng", "ger"]));
    assert_eq!(ids(&best), vec![1, 0]);
}

#[test]
fn test_best_subtitles_promote_default_when_nothing_is_forced() {
    let inputs = vec![Input::new("a.mkv", 0)
        .with_track(subtitle(0, "eng"))
        .with_track(subtitle(1, "eng").default_track())
        .with_track(subtitle(2, "eng"))];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_subtitles(&sets.subtitles, &langs(&["eng"]));
    assert_eq!(ids(&best), vec![0, 1]);
    // The view is derived, the track itself stays unforced
    assert!(!best[1].track.properties.forced);
}

#[test]
fn test_best_subtitles_no_promotion_when_any_track_is_forced() {
    let inputs = vec![Input::new("a.mkv", 0)
        .with_track(subtitle(0, "spa").forced())
        .with_track(subtitle(1, "eng"))
        .with_track(subtitle(2, "eng").default_track())];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_subtitles(&sets.subtitles, &langs(&["eng"]));
    assert_eq!(ids(&best), vec![1]);
}

#[test]
fn test_best_subtitles_promotion_picks_first_default_across_all_languages() {
    let inputs = vec![
        Input::new("a.mkv", 0).with_track(subtitle(0, "spa").default_track()),
        Input::new("b.mkv", 1)
            .with_track(subtitle(1, "eng").default_track())
            .with_track(subtitle(2, "eng")),
    ];
    let sets = TrackSets::from_inputs(&inputs);

    // The spanish track holds the promotion, so both english tracks are regular
    let best = TrackSelector::choose_best_subtitles(&sets.subtitles, &langs(&["eng"]));
    assert_eq!(ids(&best), vec![1]);

    let both = TrackSelector::choose_best_subtitles(&sets.subtitles, &langs(&["spa", "eng"]));
    assert_eq!(ids(&both), vec![0, 1]);
}

#[test]
fn test_best_subtitles_only_first_default_is_promoted() {
    let inputs = vec![Input::new("a.mkv", 0)
        .with_track(subtitle(0, "eng").default_track())
        .with_track(subtitle(1, "eng").default_track())
        .with_track(subtitle(2, "eng"))];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_subtitles(&sets.subtitles, &langs(&["eng"]));
    assert_eq!(ids(&best), vec![0, 1]);
}

#[test]
fn test_best_subtitles_without_languages_returns_everything() {
    let inputs = vec![Input::new("a.mkv", 0)
        .with_track(subtitle(0, "eng").forced())
        .with_track(subtitle(1, "eng").forced())];
    let sets = TrackSets::from_inputs(&inputs);

    let best = TrackSelector::choose_best_subtitles(&sets.subtitles, &[]);
    assert_eq!(ids(&best), vec![0, 1]);
}
