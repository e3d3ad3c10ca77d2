use tracing::debug;

use crate::context::AppContext;
use crate::domain::change::{ChangeRecord, ExclusionList};
use crate::domain::message::{CommitMessage, GenerationRequest};
use crate::error::AppResult;
use crate::services::{LanguageModelService, VersionControlService};

const PROMPT_PREAMBLE: &str =
    "Generate a concise and descriptive commit message based on the following code changes:";
const PROMPT_SUFFIX: &str = "Commit message:";

/// Diff every changed file that is not excluded, in summary order.
///
/// Any failing query aborts the whole collection.
pub async fn collect_changes(
    version_control: &dyn VersionControlService,
    exclusions: &ExclusionList,
) -> AppResult<Vec<ChangeRecord>> {
    let files = version_control.changed_files().await?;
    let mut records = Vec::with_capacity(files.len());

    for file in files {
        if exclusions.contains(&file) {
            debug!(%file, "skipping excluded path");
            continue;
        }
        let diff = version_control.file_diff(&file).await?;
        records.push(ChangeRecord::new(file, diff));
    }

    Ok(records)
}

/// Label each diff with its path and separate the blocks with a blank line.
pub fn render_changes(records: &[ChangeRecord]) -> String {
    records
        .iter()
        .map(|record| format!("File: {}\n{}", record.file, record.diff))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_prompt(records: &[ChangeRecord]) -> String {
    let blocks = render_changes(records);
    format!("{PROMPT_PREAMBLE}\n\n{blocks}\n\n{PROMPT_SUFFIX}")
}

/// Ask the language model for a commit message. Empty input never reaches the model.
pub async fn compose_commit_message(
    language_model: &dyn LanguageModelService,
    records: &[ChangeRecord],
    model: &str,
    temperature: f32,
) -> AppResult<CommitMessage> {
    if records.is_empty() {
        return Ok(CommitMessage::NoChanges);
    }

    let request = GenerationRequest {
        model: model.to_string(),
        prompt: build_prompt(records),
        temperature,
    };
    let text = language_model.generate_text(&request).await?;
    Ok(CommitMessage::Generated(text))
}

pub async fn suggest_commit_message(ctx: &AppContext) -> AppResult<CommitMessage> {
    let records = collect_changes(ctx.version_control.as_ref(), &ctx.config.exclusions).await?;
    debug!(files = records.len(), "collected changes");

    compose_commit_message(
        ctx.language_model.as_ref(),
        &records,
        &ctx.config.gemini_model,
        ctx.config.temperature,
    )
    .await
}
