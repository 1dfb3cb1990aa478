use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PreviousEmail {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailRequest {
    pub recipient_first_name: String,
    pub recipient_last_name: String,
    pub recipient_email: String,
    pub template_type: String,
    pub recipient_id: String,
    pub recipient_phone: String,
    pub recipient_company: String,
    pub recipient_industry: String,
    pub recipient_title: String,
    pub recipient_address: String,
    pub sender_id: String,
    pub sender_email: String,
    pub sender_first_name: String,
    pub sender_last_name: String,
    pub sender_phone: String,
    pub sender_company: String,
    pub sender_industry: String,
    pub sender_title: String,
    pub sender_address: String,
    /// Earlier emails in the thread, oldest first. `null` is treated as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub previous_emails: Vec<PreviousEmail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailResponse {
    pub subject: String,
    pub body: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<PreviousEmail>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<PreviousEmail>>::deserialize(deserializer)?.unwrap_or_default())
}
