//! Extracts subject and body from an email completion.

use crate::email::models::EmailResponse;
use crate::email::prompts::{BODY_MARKER, SUBJECT_MARKER};
use crate::errors::FormatError;

/// Parses a completion in the `Subject:` / `Body:` format.
///
/// The subject is the rest of the line holding the first `Subject:`; the body
/// is everything after the first `Body:`, trimmed. Both markers are required.
pub fn parse_email(text: &str) -> Result<EmailResponse, FormatError> {
    let (Some((_, after_subject)), Some((_, after_body))) =
        (text.split_once(SUBJECT_MARKER), text.split_once(BODY_MARKER))
    else {
        return Err(FormatError::MissingEmailSections);
    };

    let subject = after_subject
        .split_once('\n')
        .map_or(after_subject, |(line, _)| line)
        .trim()
        .to_string();

    Ok(EmailResponse {
        subject,
        body: after_body.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_completion() {
        let text = "Subject: Quick follow-up on pricing\nBody:\nHi Lee,\n\nJust checking in.\n\nBest,\nDana\n";
        let parsed = parse_email(text).unwrap();
        assert_eq!(parsed.subject, "Quick follow-up on pricing");
        assert_eq!(parsed.body, "Hi Lee,\n\nJust checking in.\n\nBest,\nDana");
    }

    #[test]
    fn test_subject_is_first_line_only() {
        let text = "Subject:   Next steps  \nsecond line not part of subject\nBody: Hello";
        let parsed = parse_email(text).unwrap();
        assert_eq!(parsed.subject, "Next steps");
        assert_eq!(parsed.body, "Hello");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "Subject: Meeting invite\r\nBody:\r\nHi,\r\nLet's meet.\r\n";
        let parsed = parse_email(text).unwrap();
        assert_eq!(parsed.subject, "Meeting invite");
        assert_eq!(parsed.body, "Hi,\r\nLet's meet.");
    }

    #[test]
    fn test_subject_at_end_of_text_without_newline() {
        let text = "Body: Short note.\nSubject: Late subject";
        let parsed = parse_email(text).unwrap();
        assert_eq!(parsed.subject, "Late subject");
        assert_eq!(parsed.body, "Short note.\nSubject: Late subject");
    }

    #[test]
    fn test_missing_body_marker_fails() {
        let err = parse_email("Subject: Hello\nThanks for your time.").unwrap_err();
        assert_eq!(err, FormatError::MissingEmailSections);
    }

    #[test]
    fn test_missing_subject_marker_fails() {
        assert!(parse_email("Body: Hi there").is_err());
    }
}
