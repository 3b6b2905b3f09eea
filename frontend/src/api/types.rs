use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

use crate::utils::time::parse_timestamp;

/// Page size value meaning "no limit"; the `limit` parameter is omitted.
pub const NO_LIMIT: u32 = 0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "DECODE_ERROR".to_string(),
            details: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    InReview,
    Interview,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Pending,
        ApplicationStatus::InReview,
        ApplicationStatus::Interview,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    /// Value used by the filter select for "no status filter".
    pub const FILTER_ALL: &'static str = "all";

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::InReview => "IN_REVIEW",
            ApplicationStatus::Interview => "INTERVIEW",
            ApplicationStatus::Accepted => "ACCEPTED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pendente",
            ApplicationStatus::InReview => "Em Análise",
            ApplicationStatus::Interview => "Entrevista",
            ApplicationStatus::Accepted => "Aprovado",
            ApplicationStatus::Rejected => "Rejeitado",
        }
    }

    /// Translates a filter select value; `all`, empty and unknown values mean no filter.
    pub fn from_filter_value(value: &str) -> Option<Self> {
        if value == Self::FILTER_ALL {
            return None;
        }
        value.parse().ok()
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ApiError::decode(format!("Unknown application status: {}", s)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedPlace {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationLocation {
    #[serde(default)]
    pub city: Option<NamedPlace>,
    #[serde(default)]
    pub district: Option<NamedPlace>,
}

impl ApplicationLocation {
    pub fn city_name(&self) -> Option<&str> {
        self.city.as_ref().and_then(|c| c.name.as_deref())
    }

    pub fn district_name(&self) -> Option<&str> {
        self.district.as_ref().and_then(|d| d.name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    #[serde(deserialize_with = "deserialize_record_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub location: Option<ApplicationLocation>,
    pub desired_position: String,
    pub status: ApplicationStatus,
    #[serde(deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,
}

fn deserialize_record_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid createdAt timestamp: {}", raw)))
}

/// Wire envelope of the list endpoint. Records stay raw so that each one is
/// decoded on its own.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationListEnvelope {
    pub data: Vec<Value>,
    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationPage {
    pub records: Vec<ApplicationRecord>,
    pub total_pages: u32,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationQuery {
    pub page: u32,
    pub limit: Option<u32>,
    pub status: Option<ApplicationStatus>,
    pub created_at: Option<NaiveDate>,
}

impl ApplicationQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            limit: (page_size != NO_LIMIT).then_some(page_size),
            status: None,
            created_at: None,
        }
    }

    pub fn with_status(mut self, status: Option<ApplicationStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_created_at(mut self, created_at: Option<NaiveDate>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string())];
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(date) = self.created_at {
            params.push(("createdAt", date.format("%Y-%m-%d").to_string()));
        }
        params
    }
}
