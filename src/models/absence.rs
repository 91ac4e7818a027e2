use crate::errors::AppError;
use crate::models::AbsenceType;
use crate::utils::date;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A single leave entry, immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceRecord {
    pub id: i64,
    #[serde(deserialize_with = "deserialize_start_date")]
    pub start_date: DateTime<FixedOffset>,
    pub days: u32,
    pub absence_type: AbsenceType,
    pub employee: Employee,
    pub approved: bool,
}

impl AbsenceRecord {
    pub fn end_date(&self) -> DateTime<FixedOffset> {
        date::add_days(self.start_date, self.days)
    }
}

fn deserialize_start_date<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    date::parse_start_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(AppError::InvalidDate(raw)))
}
