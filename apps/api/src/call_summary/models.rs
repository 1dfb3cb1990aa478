use serde::{Deserialize, Serialize};

/// One line of a call transcript: either pre-rendered text or a speaker turn.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TranscriptEntry {
    Line(String),
    Turn {
        timestamp: String,
        speaker: String,
        text: String,
    },
}

impl TranscriptEntry {
    pub fn render(&self) -> String {
        match self {
            TranscriptEntry::Line(line) => line.clone(),
            TranscriptEntry::Turn {
                timestamp,
                speaker,
                text,
            } => format!("{timestamp} - {speaker}: {text}"),
        }
    }
}

/// Conversation-intelligence highlights attached to a call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallMentions {
    pub longest_monologue: Option<String>,
    pub longest_customer_story: Option<String>,
    pub challenges: Option<String>,
    pub next_steps: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallSummaryRequest {
    pub call_id: String,
    pub call_type: String,
    pub call_status: String,
    pub call_duration: String,
    pub call_start_time: String,
    pub call_end_time: String,
    pub caller_number: Option<String>,
    pub caller_name: Option<String>,
    pub caller_title: Option<String>,
    pub caller_company: Option<String>,
    pub recipient_number: Option<String>,
    pub recipient_name: Option<String>,
    pub is_call_recorded: Option<bool>,
    pub transcript: Vec<TranscriptEntry>,
    pub mentions: Option<CallMentions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallSummaryResponse {
    pub summary: String,
    pub action_items: Vec<String>,
}
