//! Extracts the summary paragraph and action items from a call-summary completion.

use crate::call_summary::models::CallSummaryResponse;
use crate::call_summary::prompts::{ACTION_ITEMS_MARKER, SUMMARY_MARKER};
use crate::errors::FormatError;

/// Parses a completion in the `Summary:` / `Action Items:` format.
///
/// The summary is the trimmed text after the first `Summary:` up to the first
/// `Action Items:` that follows it. Action items are the non-empty lines after
/// the first `Action Items:` with any leading `-` / space run removed.
/// Both markers are required.
pub fn parse_call_summary(text: &str) -> Result<CallSummaryResponse, FormatError> {
    let (Some((_, after_summary)), Some((_, after_actions))) = (
        text.split_once(SUMMARY_MARKER),
        text.split_once(ACTION_ITEMS_MARKER),
    ) else {
        return Err(FormatError::MissingSummarySections);
    };

    let summary = after_summary
        .split_once(ACTION_ITEMS_MARKER)
        .map_or(after_summary, |(before, _)| before)
        .trim()
        .to_string();

    let action_items = after_actions
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim_start_matches(|c| c == '-' || c == ' ')
                .trim()
                .to_string()
        })
        .collect();

    Ok(CallSummaryResponse {
        summary,
        action_items,
    })
}
