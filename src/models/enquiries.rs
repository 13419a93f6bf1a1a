use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{clearable, non_blank};
use crate::error::ApiError;

/// SeaORM entity for the `enquiries` table (contact form submissions).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enquiries")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    /// Free text: whichever service the visitor picked or typed.
    pub service: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: EnquiryStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

/// Follow-up state of an enquiry. Admins may move it in any direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EnquiryStatus {
    #[sea_orm(string_value = "New")]
    New,
    #[sea_orm(string_value = "Contacted")]
    Contacted,
    #[sea_orm(string_value = "Closed")]
    Closed,
}

impl EnquiryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnquiryStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Contacted" => Ok(Self::Contacted),
            "Closed" => Ok(Self::Closed),
            other => Err(ApiError::validation(format!(
                "Unknown enquiry status: {other}"
            ))),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnquiry {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewEnquiry {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: String,
    pub message: String,
}

impl CreateEnquiry {
    pub fn validate(self) -> Result<NewEnquiry, ApiError> {
        match (
            non_blank(self.name),
            non_blank(self.phone),
            non_blank(self.service),
            non_blank(self.message),
        ) {
            (Some(name), Some(phone), Some(service), Some(message)) => Ok(NewEnquiry {
                name,
                phone,
                email: non_blank(self.email),
                service,
                message,
            }),
            _ => Err(ApiError::validation(
                "Name, phone, service, and message are required",
            )),
        }
    }
}

/// Admins only triage enquiries; the visitor's own fields are never edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnquiry {
    pub status: Option<EnquiryStatus>,
    pub notes: Option<String>,
}

impl UpdateEnquiry {
    pub(crate) fn apply(self, active: &mut ActiveModel) {
        use sea_orm::Set;

        if let Some(status) = self.status {
            active.status = Set(status);
        }
        if let Some(notes) = self.notes {
            active.notes = Set(clearable(notes));
        }
    }
}

/// Body of `DELETE /api/enquiries/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteEnquiry {
    #[serde(default)]
    pub password: String,
}
