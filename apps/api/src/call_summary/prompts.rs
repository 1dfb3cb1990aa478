// Prompt template for call summarization.
// The `Summary:` / `Action Items:` labels in the output block are the contract
// with `parser::parse_call_summary`; change them together.

use crate::call_summary::models::{CallMentions, CallSummaryRequest, TranscriptEntry};
use crate::llm_client::prompts::{block_or_none, fill_template, or_none};

pub const SUMMARY_MARKER: &str = "Summary:";
pub const ACTION_ITEMS_MARKER: &str = "Action Items:";

/// Call summary prompt template. Placeholders are filled by `build_call_summary_prompt`.
pub const CALL_SUMMARY_PROMPT_TEMPLATE: &str = r#"You are an expert in summarizing business calls. Use the format shown below.

Call:
Call ID: {call_id}
Call Type: {call_type}
Call Status: {call_status}
Call Duration: {call_duration}
Call Start Time: {call_start_time}
Call End Time: {call_end_time}
Caller Name: {caller_name}
Caller Title: {caller_title}
Caller Company: {caller_company}
Recipient Name: {recipient_name}
Is Call Recorded: {is_call_recorded}

Mentions:
{mentions}

Transcript:
{transcript}

Output format (follow exactly):
Summary:
<one concise paragraph>

Action Items:
- <first action>
- <second action>
"#;

/// Joins transcript entries one per line.
pub fn render_transcript(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(TranscriptEntry::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders present, non-empty mentions as `Label: value` lines in a fixed order.
pub fn render_mentions(mentions: Option<&CallMentions>) -> String {
    let Some(m) = mentions else {
        return String::new();
    };

    [
        ("Longest Monologue", &m.longest_monologue),
        ("Longest Customer Story", &m.longest_customer_story),
        ("Challenges", &m.challenges),
        ("Next Steps", &m.next_steps),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(|v| format!("{label}: {v}"))
    })
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn build_call_summary_prompt(request: &CallSummaryRequest) -> String {
    let mentions = render_mentions(request.mentions.as_ref());
    let transcript = render_transcript(&request.transcript);
    let is_call_recorded = request
        .is_call_recorded
        .map(|recorded| recorded.to_string());

    fill_template(
        CALL_SUMMARY_PROMPT_TEMPLATE,
        &[
            ("call_id", request.call_id.as_str()),
            ("call_type", request.call_type.as_str()),
            ("call_status", request.call_status.as_str()),
            ("call_duration", request.call_duration.as_str()),
            ("call_start_time", request.call_start_time.as_str()),
            ("call_end_time", request.call_end_time.as_str()),
            ("caller_name", or_none(request.caller_name.as_deref())),
            ("caller_title", or_none(request.caller_title.as_deref())),
            ("caller_company", or_none(request.caller_company.as_deref())),
            ("recipient_name", or_none(request.recipient_name.as_deref())),
            ("is_call_recorded", or_none(is_call_recorded.as_deref())),
            ("mentions", block_or_none(&mentions)),
            ("transcript", transcript.as_str()),
        ],
    )
}
