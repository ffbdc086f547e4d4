use doh_relay_domain::{DnsQuestion, DnsRecord};
use serde::{Deserialize, Serialize};

/// DoH-JSON status codes (mirrors DNS RCODEs).
const STATUS_NOERROR: u8 = 0;
const STATUS_NXDOMAIN: u8 = 3;

#[derive(Debug, Deserialize)]
pub struct DnsQueryParams {
    pub name: String,

    #[serde(rename = "type", default = "default_record_type")]
    pub record_type: String,
}

fn default_record_type() -> String {
    "A".to_string()
}

#[derive(Debug, Serialize)]
pub struct QuestionDto {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: u16,
}

#[derive(Debug, Serialize)]
pub struct AnswerDto {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: u16,

    #[serde(rename = "TTL")]
    pub ttl: u32,

    pub data: String,
}

/// Response body following the de-facto DoH-JSON convention.
///
/// The NXDOMAIN/NODATA shape carries only `Status` and `Question`; the
/// header flags and `Answer` array appear on successful answers only.
#[derive(Debug, Serialize)]
pub struct DnsJsonResponse {
    #[serde(rename = "Status")]
    pub status: u8,

    #[serde(rename = "TC", skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,

    #[serde(rename = "RD", skip_serializing_if = "Option::is_none")]
    pub recursion_desired: Option<bool>,

    #[serde(rename = "RA", skip_serializing_if = "Option::is_none")]
    pub recursion_available: Option<bool>,

    #[serde(rename = "AD", skip_serializing_if = "Option::is_none")]
    pub authentic_data: Option<bool>,

    #[serde(rename = "CD", skip_serializing_if = "Option::is_none")]
    pub checking_disabled: Option<bool>,

    #[serde(rename = "Question")]
    pub question: Vec<QuestionDto>,

    #[serde(rename = "Answer", skip_serializing_if = "Option::is_none")]
    pub answer: Option<Vec<AnswerDto>>,
}

impl DnsJsonResponse {
    pub fn answered(question: &DnsQuestion, records: &[DnsRecord]) -> Self {
        Self {
            status: STATUS_NOERROR,
            truncated: Some(false),
            recursion_desired: Some(true),
            recursion_available: Some(true),
            authentic_data: Some(false),
            checking_disabled: Some(false),
            question: vec![QuestionDto::from(question)],
            answer: Some(records.iter().map(AnswerDto::from).collect()),
        }
    }

    pub fn no_records(question: &DnsQuestion) -> Self {
        Self {
            status: STATUS_NXDOMAIN,
            truncated: None,
            recursion_desired: None,
            recursion_available: None,
            authentic_data: None,
            checking_disabled: None,
            question: vec![QuestionDto::from(question)],
            answer: None,
        }
    }
}

impl From<&DnsQuestion> for QuestionDto {
    fn from(question: &DnsQuestion) -> Self {
        Self {
            name: question.name.to_string(),
            record_type: question.record_type.to_u16(),
        }
    }
}

impl From<&DnsRecord> for AnswerDto {
    fn from(record: &DnsRecord) -> Self {
        Self {
            name: record.name.clone(),
            record_type: record.record_type.to_u16(),
            ttl: record.ttl,
            data: record.data.clone(),
        }
    }
}
