// Remuxer argument building - maps a track selection to an mkvmerge command line

use crate::domain::model::TrackRef;

/// Build the mkvmerge argument list for the chosen tracks
///
/// Pure and deterministic: the same selection always yields the same
/// arguments, and nothing here touches the filesystem or spawns processes.
/// The first audio track is marked as the default one.
pub fn build_arguments(
    output: &str,
    video: TrackRef<'_>,
    audios: &[TrackRef<'_>],
    subtitles: &[TrackRef<'_>],
) -> Vec<String> {
    let mut args = vec!["-o".to_string(), output.to_string()];

    push_video(&mut args, video);
    for (index, audio) in audios.iter().enumerate() {
        push_audio(&mut args, audio, index == 0);
    }
    for subtitle in subtitles {
        push_subtitle(&mut args, subtitle);
    }

    args
}

fn push_video(args: &mut Vec<String>, video: TrackRef<'_>) {
    args.extend([
        // No audio, subtitles or track tags from the video source
        "-A".to_string(),
        "-S".to_string(),
        "-T".to_string(),
        "-d".to_string(),
        video.track.arg_id(),
        "--title".to_string(),
        String::new(),
        video.input.arg_path(),
    ]);
}

fn push_audio(args: &mut Vec<String>, audio: &TrackRef<'_>, is_default: bool) {
    args.extend(["-D".to_string(), "-S".to_string(), "-T".to_string()]);
    if is_default {
        args.extend(["--default-track".to_string(), audio.track.arg_id()]);
    }
    args.extend([
        "--language".to_string(),
        audio.track.arg_id_label(audio.language()),
        "--track-name".to_string(),
        audio.track.arg_id_label(""),
        "-a".to_string(),
        audio.track.arg_id(),
        audio.input.arg_path(),
    ]);
}

fn push_subtitle(args: &mut Vec<String>, subtitle: &TrackRef<'_>) {
    args.extend([
        "-D".to_string(),
        "-A".to_string(),
        "-T".to_string(),
        "-s".to_string(),
        subtitle.track.arg_id(),
        "--track-name".to_string(),
        subtitle.track.arg_id_label(""),
    ]);
    if subtitle.track.properties.forced {
        args.extend([
            "--forced-track".to_string(),
            subtitle.track.arg_id_label("true"),
        ]);
    }
    args.push(subtitle.input.arg_path());
}
