//! Extracts numbered insight fields from opportunity and case completions.
//!
//! Unlike the call-summary and email parsers these never fail: every field
//! that cannot be matched (or matches empty) is replaced by a fixed fallback,
//! and a missing days-open count is computed from the case dates.

use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use tracing::warn;

use crate::sales_insights::models::{Case, CaseInsight, Opportunity, OpportunityInsight};
use crate::sales_insights::prompts::{CASE_LABELS, OPPORTUNITY_LABELS};

pub const SUMMARY_FALLBACK: &str = "Summary not provided";
pub const OBJECTION_FALLBACK: &str = "Objection not provided";
pub const NEXT_BEST_ACTION_FALLBACK: &str = "Next Best Action not provided";
pub const INTENT_FALLBACK: &str = "Intent not provided";
pub const SENTIMENT_FALLBACK: &str = "neutral";

/// Builds one pattern per label. Each captures lazily from `N. Label:` up to
/// the next numbered label of the same set, or the end of the text.
fn numbered_field_patterns<const N: usize>(labels: &[&str; N]) -> [Regex; N] {
    let next_label = labels
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|");

    std::array::from_fn(|i| {
        let pattern = format!(
            r"(?s){}\.\s*{}:\s*(.*?)\s*(?:\d+\.\s*(?:{next_label}):|\z)",
            i + 1,
            regex::escape(labels[i])
        );
        Regex::new(&pattern).expect("numbered field pattern must compile")
    })
}

fn opportunity_patterns() -> &'static [Regex; 3] {
    static OPPORTUNITY_RE: OnceLock<[Regex; 3]> = OnceLock::new();
    OPPORTUNITY_RE.get_or_init(|| numbered_field_patterns(&OPPORTUNITY_LABELS))
}

fn case_patterns() -> &'static [Regex; 4] {
    static CASE_RE: OnceLock<[Regex; 4]> = OnceLock::new();
    CASE_RE.get_or_init(|| numbered_field_patterns(&CASE_LABELS))
}

fn days_open_regex() -> &'static Regex {
    static DAYS_OPEN_RE: OnceLock<Regex> = OnceLock::new();
    DAYS_OPEN_RE.get_or_init(|| {
        Regex::new(r"(?s)4\.\s*Days Open:\s*(\d+)").expect("days open regex must compile")
    })
}

/// First capture group, trimmed; `None` when unmatched or empty.
fn capture_field(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn field_or_fallback(re: &Regex, text: &str, record_id: &str, fallback: &str) -> String {
    capture_field(re, text).unwrap_or_else(|| {
        warn!("Completion for {record_id} is missing a field, using '{fallback}'");
        fallback.to_string()
    })
}

/// Whole days from `opened` to `closed`, floored toward negative infinity.
///
/// A case closed 36 hours after opening is 1 day open; one whose close date
/// precedes its open date by 1 hour is -1 day open.
pub fn days_between(opened: DateTime<Utc>, closed: DateTime<Utc>) -> i64 {
    let elapsed = closed - opened;
    let days = elapsed.num_days();
    if elapsed < Duration::days(days) {
        days - 1
    } else {
        days
    }
}

pub fn parse_opportunity_insight(text: &str, opp: &Opportunity) -> OpportunityInsight {
    let [summary_re, objection_re, next_best_action_re] = opportunity_patterns();
    let id = opp.opportunity_id.as_str();

    OpportunityInsight {
        opportunity_id: opp.opportunity_id.clone(),
        opportunity_name: opp.opportunity_name.clone(),
        summary: field_or_fallback(summary_re, text, id, SUMMARY_FALLBACK),
        objection: field_or_fallback(objection_re, text, id, OBJECTION_FALLBACK),
        next_best_action: field_or_fallback(
            next_best_action_re,
            text,
            id,
            NEXT_BEST_ACTION_FALLBACK,
        ),
        amount: opp.amount,
        close_date: opp.close_date,
    }
}

/// Parses a case completion. `now` bounds the computed days-open value for
/// cases without a `date_closed`.
pub fn parse_case_insight(text: &str, case: &Case, now: DateTime<Utc>) -> CaseInsight {
    let [summary_re, intent_re, sentiment_re, _] = case_patterns();
    let id = case.case_id.as_str();

    let days_open = capture_field(days_open_regex(), text)
        .and_then(|days| days.parse::<i64>().ok())
        .unwrap_or_else(|| {
            let computed = days_between(case.date_opened, case.date_closed.unwrap_or(now));
            warn!("Completion for {id} has no usable Days Open, computed {computed}");
            computed
        });

    CaseInsight {
        case_id: case.case_id.clone(),
        subject: case.subject.clone(),
        summary: field_or_fallback(summary_re, text, id, SUMMARY_FALLBACK),
        intent: field_or_fallback(intent_re, text, id, INTENT_FALLBACK),
        sentiment: field_or_fallback(sentiment_re, text, id, SENTIMENT_FALLBACK).to_lowercase(),
        days_open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn opportunity() -> Opportunity {
        serde_json::from_value(serde_json::json!({
            "opportunity_id": "opp-1",
            "opportunity_name": "Globex renewal",
            "account_name": "Globex",
            "amount": 125000,
            "close_date": "2024-06-30T00:00:00Z",
            "description": "Annual renewal"
        }))
        .unwrap()
    }

    fn case(date_closed: Option<&str>) -> Case {
        serde_json::from_value(serde_json::json!({
            "case_id": "case-9",
            "account_name": "Initech",
            "case_reason": "Billing",
            "date_opened": "2024-01-10T08:00:00Z",
            "date_closed": date_closed,
            "description": "Double charged",
            "status": "Closed",
            "subject": "Invoice issue"
        }))
        .unwrap()
    }

    #[test]
    fn test_conformant_opportunity_completion() {
        let text = "1. Summary: Renewal at risk over pricing.\n2. Objection: Price increase.\n3. Next Best Action: Offer a two-year discount.";
        let insight = parse_opportunity_insight(text, &opportunity());
        assert_eq!(insight.summary, "Renewal at risk over pricing.");
        assert_eq!(insight.objection, "Price increase.");
        assert_eq!(insight.next_best_action, "Offer a two-year discount.");
        assert_eq!(insight.opportunity_id, "opp-1");
        assert_eq!(insight.amount, 125000.0);
    }

    #[test]
    fn test_missing_objection_falls_back_and_others_still_parse() {
        let text = "1. Summary: Renewal at risk.\n3. Next Best Action: Call the CFO.";
        let insight = parse_opportunity_insight(text, &opportunity());
        assert_eq!(insight.summary, "Renewal at risk.");
        assert_eq!(insight.objection, OBJECTION_FALLBACK);
        assert_eq!(insight.next_best_action, "Call the CFO.");
    }

    #[test]
    fn test_missing_summary_falls_back() {
        let text = "2. Objection: Budget.\n3. Next Best Action: Send ROI sheet.";
        let insight = parse_opportunity_insight(text, &opportunity());
        assert_eq!(insight.summary, SUMMARY_FALLBACK);
        assert_eq!(insight.objection, "Budget.");
        assert_eq!(insight.next_best_action, "Send ROI sheet.");
    }

    #[test]
    fn test_missing_next_best_action_falls_back() {
        let text = "1. Summary: Expansion deal.\n2. Objection: No objection";
        let insight = parse_opportunity_insight(text, &opportunity());
        assert_eq!(insight.objection, "No objection");
        assert_eq!(insight.next_best_action, NEXT_BEST_ACTION_FALLBACK);
    }

    #[test]
    fn test_unformatted_completion_uses_all_fallbacks() {
        let insight = parse_opportunity_insight("I cannot help with that.", &opportunity());
        assert_eq!(insight.summary, SUMMARY_FALLBACK);
        assert_eq!(insight.objection, OBJECTION_FALLBACK);
        assert_eq!(insight.next_best_action, NEXT_BEST_ACTION_FALLBACK);
    }

    #[test]
    fn test_empty_field_counts_as_missing() {
        let text = "1. Summary:\n2. Objection: Timing.\n3. Next Best Action: Wait for Q3.";
        let insight = parse_opportunity_insight(text, &opportunity());
        assert_eq!(insight.summary, SUMMARY_FALLBACK);
        assert_eq!(insight.objection, "Timing.");
    }

    #[test]
    fn test_multiline_field_and_numbers_inside_text() {
        let text = "1. Summary: Upgrade to v2.0 of the platform,\nworth 2.5x last year.\n2. Objection: None expected.\n3. Next Best Action: Demo 3.1 features.\n";
        let insight = parse_opportunity_insight(text, &opportunity());
        assert_eq!(
            insight.summary,
            "Upgrade to v2.0 of the platform,\nworth 2.5x last year."
        );
        assert_eq!(insight.next_best_action, "Demo 3.1 features.");
    }

    #[test]
    fn test_conformant_case_completion() {
        let text = "1. Summary: Customer was double charged.\n2. Intent: Get a refund.\n3. Sentiment: Negative\n4. Days Open: 12";
        let insight = parse_case_insight(text, &case(None), at(2024, 3, 1, 0));
        assert_eq!(insight.summary, "Customer was double charged.");
        assert_eq!(insight.intent, "Get a refund.");
        assert_eq!(insight.sentiment, "negative");
        assert_eq!(insight.days_open, 12);
        assert_eq!(insight.subject, "Invoice issue");
    }

    #[test]
    fn test_case_fallbacks() {
        let insight = parse_case_insight("no structure here", &case(None), at(2024, 1, 20, 8));
        assert_eq!(insight.summary, SUMMARY_FALLBACK);
        assert_eq!(insight.intent, INTENT_FALLBACK);
        assert_eq!(insight.sentiment, SENTIMENT_FALLBACK);
        assert_eq!(insight.days_open, 10);
    }

    #[test]
    fn test_days_open_computed_from_close_date_when_missing() {
        let text = "1. Summary: s\n2. Intent: i\n3. Sentiment: positive\n";
        let insight = parse_case_insight(
            text,
            &case(Some("2024-01-15T07:59:59Z")),
            at(2030, 1, 1, 0),
        );
        // 4 days 23:59:59 floors to 4
        assert_eq!(insight.days_open, 4);
        assert_eq!(insight.sentiment, "positive");
    }

    #[test]
    fn test_non_numeric_days_open_is_computed() {
        let text = "1. Summary: s\n2. Intent: i\n3. Sentiment: neutral\n4. Days Open: about a week";
        let insight = parse_case_insight(text, &case(Some("2024-01-17T08:00:00Z")), at(2030, 1, 1, 0));
        assert_eq!(insight.days_open, 7);
    }

    #[test]
    fn test_days_between_floors_toward_negative_infinity() {
        assert_eq!(days_between(at(2024, 1, 1, 0), at(2024, 1, 2, 12)), 1);
        assert_eq!(days_between(at(2024, 1, 1, 0), at(2024, 1, 1, 23)), 0);
        assert_eq!(days_between(at(2024, 1, 1, 0), at(2024, 1, 3, 0)), 2);
        assert_eq!(days_between(at(2024, 1, 2, 0), at(2024, 1, 1, 23)), -1);
        assert_eq!(days_between(at(2024, 1, 3, 0), at(2024, 1, 1, 0)), -2);
        assert_eq!(days_between(at(2024, 1, 3, 0), at(2024, 1, 1, 1)), -2);
    }

    #[test]
    fn test_days_between_spans_month_and_leap_day() {
        assert_eq!(days_between(at(2024, 2, 28, 0), at(2024, 3, 1, 0)), 2);
    }
}
