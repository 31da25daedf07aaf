use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AbsenceStatus {
    Approved,
    Pending,
    Cancelled,
}

impl AbsenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbsenceStatus::Approved => "approved",
            AbsenceStatus::Pending => "pending",
            AbsenceStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceRequest {
    pub start_date: String,
    /// Vacío para ausencias por horas
    pub end_date: String,
    pub status: AbsenceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_document: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceSection {
    pub id: String,
    pub title: String,
    pub color: String,
    pub available: String,
    pub requests: Vec<AbsenceRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_hours: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_justifications: Option<bool>,
}

impl AbsenceSection {
    pub fn shows_hours(&self) -> bool {
        self.has_hours.unwrap_or(false)
    }

    pub fn shows_justifications(&self) -> bool {
        self.has_justifications.unwrap_or(false)
    }
}
