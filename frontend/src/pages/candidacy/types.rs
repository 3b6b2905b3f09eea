use chrono_tz::Tz;

use crate::api::{ApplicationLocation, ApplicationRecord, ApplicationStatus};
use crate::utils::time::format_pt_date;

pub const PHONE_PLACEHOLDER: &str = "-";

/// Flattened application, ready for the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationRow {
    pub id: String,
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub position: String,
    pub status: ApplicationStatus,
    pub applied_at: String,
}

impl ApplicationRow {
    pub fn from_record(record: &ApplicationRecord, tz: Tz) -> Self {
        Self {
            id: record.id.clone(),
            candidate_name: record.full_name.clone(),
            email: record.email.clone(),
            phone: phone_or_placeholder(record.phone_number.as_deref()),
            location: format_location(record.location.as_ref()),
            position: record.desired_position.clone(),
            status: record.status,
            applied_at: format_pt_date(&record.created_at, tz),
        }
    }
}

pub fn phone_or_placeholder(phone: Option<&str>) -> String {
    match phone.map(str::trim) {
        Some(phone) if !phone.is_empty() => phone.to_string(),
        _ => PHONE_PLACEHOLDER.to_string(),
    }
}

pub fn format_location(location: Option<&ApplicationLocation>) -> String {
    let city = location.and_then(|l| l.city_name()).unwrap_or_default();
    let district = location.and_then(|l| l.district_name()).unwrap_or_default();
    format!("{} - {}", city, district)
}

pub fn map_records(records: &[ApplicationRecord], tz: Tz) -> Vec<ApplicationRow> {
    records
        .iter()
        .map(|record| ApplicationRow::from_record(record, tz))
        .collect()
}

/// Case-insensitive substring match on the email column.
pub fn filter_rows_by_email(rows: &[ApplicationRow], needle: &str) -> Vec<ApplicationRow> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.email.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
