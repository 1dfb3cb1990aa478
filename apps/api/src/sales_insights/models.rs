use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sales_insights::timestamp;

/// Free-text email snippet attached to a record.
#[derive(Debug, Clone, Deserialize)]
pub struct TextBody {
    pub textbody: String,
}

/// Free-text task or event note attached to a record.
#[derive(Debug, Clone, Deserialize)]
pub struct Description {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Opportunity {
    pub opportunity_id: String,
    pub opportunity_name: String,
    pub account_name: String,
    pub amount: f64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub close_date: DateTime<Utc>,
    pub description: String,
    pub forecast_category: Option<String>,
    pub lead_source: Option<String>,
    pub next_step: Option<String>,
    pub reason_lost: Option<String>,
    pub stage: Option<String>,
    pub annual_revenue: Option<f64>,
    #[serde(default)]
    pub email_text_body: Vec<TextBody>,
    #[serde(default)]
    pub task_description: Vec<Description>,
    #[serde(default)]
    pub event_description: Vec<Description>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub case_id: String,
    pub account_name: String,
    pub case_origin: Option<String>,
    pub case_reason: String,
    pub case_source: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub closed_date: Option<DateTime<Utc>>,
    pub close_summary: Option<String>,
    pub contact_reason: Option<String>,
    pub customer_type: Option<String>,
    /// Upper bound for the computed days-open value; "now" when absent.
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub date_closed: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_opened: DateTime<Utc>,
    pub description: String,
    pub duration: Option<f64>,
    pub escalated: Option<bool>,
    pub priority: Option<String>,
    pub quality_score: Option<f64>,
    pub status: String,
    pub subject: String,
    pub time_open: Option<f64>,
    #[serde(rename = "type")]
    pub case_type: Option<String>,
    #[serde(default)]
    pub email_text_body: Vec<TextBody>,
    #[serde(default)]
    pub task_description: Vec<Description>,
    #[serde(default)]
    pub event_description: Vec<Description>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpportunityInsight {
    pub opportunity_id: String,
    pub opportunity_name: String,
    pub summary: String,
    pub objection: String,
    pub next_best_action: String,
    pub amount: f64,
    pub close_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpportunityInsightsResponse {
    pub opportunities: Vec<OpportunityInsight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseInsight {
    pub case_id: String,
    #[serde(rename = "case")]
    pub subject: String,
    pub summary: String,
    pub intent: String,
    pub sentiment: String,
    pub days_open: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseInsightsResponse {
    // Established wire name, spelling included.
    #[serde(rename = "cases_reponses")]
    pub cases: Vec<CaseInsight>,
}
