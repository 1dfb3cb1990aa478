// Prompt templates for opportunity and case insights.
// The numbered labels in each output block are the contract with `parser`.

use crate::llm_client::prompts::{fill_template, or_none};
use crate::sales_insights::models::{Case, Description, Opportunity, TextBody};

/// Output labels for opportunities, in numbering order.
pub const OPPORTUNITY_LABELS: [&str; 3] = ["Summary", "Objection", "Next Best Action"];

/// Output labels for cases, in numbering order.
pub const CASE_LABELS: [&str; 4] = ["Summary", "Intent", "Sentiment", "Days Open"];

pub const OPPORTUNITY_PROMPT_TEMPLATE: &str = r#"You are a professional sales agent. Respond with three single-line items:

1. Summary: a concise one-line summary of the opportunity.
2. Objection: a likely customer objection, or write "No objection".
3. Next Best Action: the one best next step.

Context:
Opportunity ID: {opportunity_id}
Name: {opportunity_name}
Account: {account_name}
Amount: {amount}
Close Date: {close_date}
Description: {description}
Emails: {emails}
Tasks: {tasks}
Events: {events}

Output format:
1. Summary: <text>
2. Objection: <text>
3. Next Best Action: <text>
"#;

pub const CASE_PROMPT_TEMPLATE: &str = r#"You are a professional case manager. Respond with four items:

1. Summary: one concise line summarizing the case.
2. Intent: one concise line describing customer intent.
3. Sentiment: one word: positive, negative, or neutral.
4. Days Open: numeric value only, no words.

Context:
Case ID: {case_id}
Account: {account_name}
Reason: {case_reason}
Status: {status}
Subject: {subject}
Description: {description}
Date Opened: {date_opened}
Date Closed: {date_closed}

Output format:
1. Summary: <text>
2. Intent: <text>
3. Sentiment: <positive|negative|neutral>
4. Days Open: <number>
"#;

fn join_emails(emails: &[TextBody]) -> String {
    emails
        .iter()
        .map(|e| e.textbody.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_descriptions(items: &[Description]) -> String {
    items
        .iter()
        .map(|d| d.description.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn build_opportunity_prompt(opp: &Opportunity) -> String {
    let amount = opp.amount.to_string();
    let close_date = opp.close_date.to_string();
    let emails = join_emails(&opp.email_text_body);
    let tasks = join_descriptions(&opp.task_description);
    let events = join_descriptions(&opp.event_description);

    fill_template(
        OPPORTUNITY_PROMPT_TEMPLATE,
        &[
            ("opportunity_id", opp.opportunity_id.as_str()),
            ("opportunity_name", opp.opportunity_name.as_str()),
            ("account_name", opp.account_name.as_str()),
            ("amount", amount.as_str()),
            ("close_date", close_date.as_str()),
            ("description", opp.description.as_str()),
            ("emails", emails.as_str()),
            ("tasks", tasks.as_str()),
            ("events", events.as_str()),
        ],
    )
}

pub fn build_case_prompt(case: &Case) -> String {
    let date_opened = case.date_opened.to_string();
    let date_closed = case.date_closed.map(|d| d.to_string());

    fill_template(
        CASE_PROMPT_TEMPLATE,
        &[
            ("case_id", case.case_id.as_str()),
            ("account_name", case.account_name.as_str()),
            ("case_reason", case.case_reason.as_str()),
            ("status", case.status.as_str()),
            ("subject", case.subject.as_str()),
            ("description", case.description.as_str()),
            ("date_opened", date_opened.as_str()),
            ("date_closed", or_none(date_closed.as_deref())),
        ],
    )
}
