//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::Settings;
use crate::app::container::{AppContainer, DefaultAppContainer};
use crate::app::remux_interactor::{PlannedTrack, RemuxPlan, RemuxRequest, RemuxResponse};
use crate::cli::args::{RemuxArgs, ReportFormat};

/// Execute a remux run with already resolved settings
pub async fn remux(args: &RemuxArgs, settings: &Settings) -> Result<()> {
    info!("Starting remux operation");
    info!("Output: {}", args.output.display());
    info!("Languages: {}", settings.languages.join(","));

    let request = RemuxRequest::new(args.output.clone(), args.inputs.clone())
        .context("Invalid remux request")?
        .with_languages(settings.languages.clone())
        .with_dry_run(args.dry_run)
        .with_skip_unsupported(settings.skip_unsupported);

    let container = DefaultAppContainer::new(settings);
    let response = container
        .remux_interactor()
        .execute(request)
        .await
        .context("Remux failed")?;

    if args.report_plan() {
        print!("{}", render_report(&response, &settings.remuxer, args.format)?);
    }

    info!("Remux operation completed successfully");
    Ok(())
}

/// Render the run outcome for stdout
///
/// Structured formats serialize the whole response. The text format prints
/// the titled plan, then the command line on a dry run or the remuxer output
/// otherwise.
pub fn render_report(response: &RemuxResponse, remuxer: &str, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(response).context("Failed to serialize report")?;
            json.push('\n');
            Ok(json)
        }
        ReportFormat::Yaml => serde_yaml::to_string(response).context("Failed to serialize report"),
        ReportFormat::Text => {
            let mut text = render_plan(&response.plan);
            if response.dry_run {
                text.push_str(&title("Command"));
                text.push_str(&render_command(remuxer, &response.arguments));
                text.push('\n');
            } else if let Some(output) = &response.remux_output {
                text.push_str(&title("Remuxer output"));
                text.push_str(output);
                if !output.ends_with('\n') {
                    text.push('\n');
                }
            }
            Ok(text)
        }
    }
}

/// Titled "Video", "Audios" and "Subtitles" sections
pub fn render_plan(plan: &RemuxPlan) -> String {
    let mut text = String::new();
    push_tracks(&mut text, "Video", std::slice::from_ref(&plan.video));
    push_tracks(&mut text, "Audios", &plan.audios);
    push_tracks(&mut text, "Subtitles", &plan.subtitles);
    text
}

fn push_tracks(text: &mut String, heading: &str, tracks: &[PlannedTrack]) {
    text.push_str(&title(heading));
    for track in tracks {
        text.push_str(&format!("- {}\n", track));
    }
}

fn title(text: &str) -> String {
    let border = "#".repeat(text.len() + 4);
    format!("\n  {}\n  # {} #\n  {}\n\n", border, text, border)
}

/// One shell-pasteable line: the remuxer binary followed by its arguments
pub fn render_command(remuxer: &str, args: &[String]) -> String {
    std::iter::once(remuxer)
        .chain(args.iter().map(String::as_str))
        .map(shell_quote)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quote an argument for a POSIX shell, leaving plain words untouched
pub fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
