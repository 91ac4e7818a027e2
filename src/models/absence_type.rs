use serde::Deserialize;

/// Kind of leave, as sent by the absences endpoint.
///
/// Values outside the known set are kept verbatim so they still sort by
/// their raw string, but render with an empty icon and label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum AbsenceType {
    Sickness,
    AnnualLeave,
    Medical,
    Unsupported(String),
}

impl AbsenceType {
    /// Convert enum → wire string
    pub fn as_str(&self) -> &str {
        match self {
            AbsenceType::Sickness => "SICKNESS",
            AbsenceType::AnnualLeave => "ANNUAL_LEAVE",
            AbsenceType::Medical => "MEDICAL",
            AbsenceType::Unsupported(raw) => raw,
        }
    }

    /// Convert wire string → enum
    pub fn from_wire(s: &str) -> Self {
        match s {
            "SICKNESS" => AbsenceType::Sickness,
            "ANNUAL_LEAVE" => AbsenceType::AnnualLeave,
            "MEDICAL" => AbsenceType::Medical,
            other => AbsenceType::Unsupported(other.to_string()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AbsenceType::Sickness => "Sickness",
            AbsenceType::AnnualLeave => "Annual Leave",
            AbsenceType::Medical => "Medical",
            AbsenceType::Unsupported(_) => "",
        }
    }

    /// Emoji plus its accessible description.
    pub fn icon(&self) -> Option<(&'static str, &'static str)> {
        match self {
            AbsenceType::Sickness => Some(("🤒", "ill person")),
            AbsenceType::AnnualLeave => Some(("🏖️", "beach")),
            AbsenceType::Medical => Some(("🏥", "hospital")),
            AbsenceType::Unsupported(_) => None,
        }
    }
}

impl From<String> for AbsenceType {
    fn from(s: String) -> Self {
        AbsenceType::from_wire(&s)
    }
}
