// Prompt template for email composition.
// `Subject:` / `Body:` in the output block are the contract with `parser::parse_email`.

use crate::email::models::{EmailRequest, PreviousEmail};
use crate::llm_client::prompts::{block_or_none, fill_template};

pub const SUBJECT_MARKER: &str = "Subject:";
pub const BODY_MARKER: &str = "Body:";

/// Description used for template types not in `TEMPLATE_DESCRIPTIONS`.
pub const GENERAL_DESCRIPTION: &str = "General professional email.";

/// Known template types and the intent each one asks the model for.
pub const TEMPLATE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("introduce", "Introduce the company and its offerings."),
    (
        "nudge",
        "Follow up on the previous email and offer more details.",
    ),
    (
        "checkin",
        "Check if the client is still interested and address challenges.",
    ),
    (
        "reignite",
        "Thank the recipient and reignite the conversation.",
    ),
    (
        "invite",
        "Invite the recipient to a meeting for opportunities or collaboration.",
    ),
    (
        "prompt",
        "Write the email exactly per the user's purpose described above.",
    ),
];

pub const EMAIL_PROMPT_TEMPLATE: &str = r#"You are a professional email assistant. Generate a professional email.

Template Type: {template_type}
Description: {description}

Recipient:
First Name: {recipient_first_name}
Last Name: {recipient_last_name}
Email: {recipient_email}
Company: {recipient_company}
Industry: {recipient_industry}
Title: {recipient_title}
Address: {recipient_address}
Phone: {recipient_phone}

Sender:
First Name: {sender_first_name}
Last Name: {sender_last_name}
Email: {sender_email}
Company: {sender_company}
Industry: {sender_industry}
Title: {sender_title}
Address: {sender_address}
Phone: {sender_phone}

Previous Emails Context:
{previous_emails}

Output format:
Subject: <one line subject>
Body:
<email body with paragraphs>
"#;

pub fn template_description(template_type: &str) -> &'static str {
    TEMPLATE_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == template_type)
        .map_or(GENERAL_DESCRIPTION, |&(_, description)| description)
}

/// Renders earlier emails as numbered blocks separated by a blank line.
pub fn render_previous_emails(emails: &[PreviousEmail]) -> String {
    emails
        .iter()
        .enumerate()
        .map(|(i, e)| {
            format!(
                "Previous Email {}:\nSubject: {}\nBody: {}",
                i + 1,
                e.subject,
                e.body
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_email_prompt(request: &EmailRequest) -> String {
    let previous_emails = render_previous_emails(&request.previous_emails);

    fill_template(
        EMAIL_PROMPT_TEMPLATE,
        &[
            ("template_type", request.template_type.as_str()),
            ("description", template_description(&request.template_type)),
            ("recipient_first_name", request.recipient_first_name.as_str()),
            ("recipient_last_name", request.recipient_last_name.as_str()),
            ("recipient_email", request.recipient_email.as_str()),
            ("recipient_company", request.recipient_company.as_str()),
            ("recipient_industry", request.recipient_industry.as_str()),
            ("recipient_title", request.recipient_title.as_str()),
            ("recipient_address", request.recipient_address.as_str()),
            ("recipient_phone", request.recipient_phone.as_str()),
            ("sender_first_name", request.sender_first_name.as_str()),
            ("sender_last_name", request.sender_last_name.as_str()),
            ("sender_email", request.sender_email.as_str()),
            ("sender_company", request.sender_company.as_str()),
            ("sender_industry", request.sender_industry.as_str()),
            ("sender_title", request.sender_title.as_str()),
            ("sender_address", request.sender_address.as_str()),
            ("sender_phone", request.sender_phone.as_str()),
            ("previous_emails", block_or_none(&previous_emails)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(template_type: &str, previous_emails: Vec<PreviousEmail>) -> EmailRequest {
        EmailRequest {
            recipient_first_name: "Lee".to_string(),
            recipient_last_name: "Park".to_string(),
            recipient_email: "lee@example.com".to_string(),
            template_type: template_type.to_string(),
            recipient_id: "r-1".to_string(),
            recipient_phone: "555-0100".to_string(),
            recipient_company: "Globex".to_string(),
            recipient_industry: "Logistics".to_string(),
            recipient_title: "COO".to_string(),
            recipient_address: "1 Main St".to_string(),
            sender_id: "s-1".to_string(),
            sender_email: "dana@acme.test".to_string(),
            sender_first_name: "Dana".to_string(),
            sender_last_name: "Reyes".to_string(),
            sender_phone: "555-0199".to_string(),
            sender_company: "Acme".to_string(),
            sender_industry: "Software".to_string(),
            sender_title: "AE".to_string(),
            sender_address: "2 Side St".to_string(),
            previous_emails,
        }
    }

    #[test]
    fn test_known_template_types_have_descriptions() {
        assert_eq!(
            template_description("introduce"),
            "Introduce the company and its offerings."
        );
        assert_eq!(
            template_description("invite"),
            "Invite the recipient to a meeting for opportunities or collaboration."
        );
    }

    #[test]
    fn test_unknown_template_type_falls_back_to_general() {
        assert_eq!(template_description("holiday-card"), GENERAL_DESCRIPTION);
        // lookup is case-sensitive
        assert_eq!(template_description("Nudge"), GENERAL_DESCRIPTION);
    }

    #[test]
    fn test_prompt_separates_recipient_and_sender() {
        let prompt = build_email_prompt(&request("nudge", vec![]));
        let (recipient, sender) = prompt.split_once("Sender:").unwrap();
        assert!(recipient.contains("Company: Globex\n"));
        assert!(sender.contains("Company: Acme\n"));
        assert!(prompt.contains(
            "Template Type: nudge\nDescription: Follow up on the previous email and offer more details.\n"
        ));
    }

    #[test]
    fn test_no_previous_emails_renders_none() {
        let prompt = build_email_prompt(&request("introduce", vec![]));
        assert!(prompt.contains("Previous Emails Context:\nNone\n"));
    }

    #[test]
    fn test_previous_emails_are_numbered_from_one() {
        let emails = vec![
            PreviousEmail {
                subject: "Intro".to_string(),
                body: "Hello".to_string(),
            },
            PreviousEmail {
                subject: "Re: Intro".to_string(),
                body: "Any thoughts?".to_string(),
            },
        ];
        assert_eq!(
            render_previous_emails(&emails),
            "Previous Email 1:\nSubject: Intro\nBody: Hello\n\nPrevious Email 2:\nSubject: Re: Intro\nBody: Any thoughts?"
        );
    }

    #[test]
    fn test_output_format_names_both_markers() {
        let prompt = build_email_prompt(&request("checkin", vec![]));
        let format_block = prompt.split("Output format:").nth(1).unwrap();
        assert!(format_block.contains(SUBJECT_MARKER));
        assert!(format_block.contains(BODY_MARKER));
    }
}
