use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{clearable, non_blank, reject_blank};
use crate::error::ApiError;

/// SeaORM entity for the `packages` table (offers shown on the storefront).
///
/// Purely descriptive: `discount` is a display string and nothing is computed from it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "packages")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub discount: Option<String>,
    pub valid_until: Option<Date>,
    pub image_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackage {
    pub title: Option<String>,
    pub description: Option<String>,
    pub discount: Option<String>,
    /// `YYYY-MM-DD`; empty means no expiry.
    pub valid_until: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPackage {
    pub title: String,
    pub description: String,
    pub discount: Option<String>,
    pub valid_until: Option<NaiveDate>,
    pub image_url: Option<String>,
}

impl CreatePackage {
    pub fn validate(self) -> Result<NewPackage, ApiError> {
        let (Some(title), Some(description)) = (non_blank(self.title), non_blank(self.description))
        else {
            return Err(ApiError::validation("Title and description are required"));
        };

        Ok(NewPackage {
            title,
            description,
            discount: non_blank(self.discount),
            valid_until: self.valid_until.map(parse_valid_until).transpose()?.flatten(),
            image_url: non_blank(self.image_url),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackage {
    pub title: Option<String>,
    pub description: Option<String>,
    pub discount: Option<String>,
    pub valid_until: Option<String>,
    pub image_url: Option<String>,
}

/// An [`UpdatePackage`] whose date has been parsed.
#[derive(Debug, Clone)]
pub struct PackagePatch {
    title: Option<String>,
    description: Option<String>,
    discount: Option<String>,
    valid_until: Option<Option<NaiveDate>>,
    image_url: Option<String>,
}

impl UpdatePackage {
    pub fn validate(self) -> Result<PackagePatch, ApiError> {
        reject_blank("title", &self.title)?;
        reject_blank("description", &self.description)?;

        Ok(PackagePatch {
            title: self.title,
            description: self.description,
            discount: self.discount,
            valid_until: self.valid_until.map(parse_valid_until).transpose()?,
            image_url: self.image_url,
        })
    }
}

impl PackagePatch {
    pub(crate) fn apply(self, active: &mut ActiveModel) {
        use sea_orm::Set;

        if let Some(title) = self.title {
            active.title = Set(title);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
        if let Some(discount) = self.discount {
            active.discount = Set(clearable(discount));
        }
        if let Some(valid_until) = self.valid_until {
            active.valid_until = Set(valid_until);
        }
        if let Some(image_url) = self.image_url {
            active.image_url = Set(clearable(image_url));
        }
    }
}

fn parse_valid_until(raw: String) -> Result<Option<NaiveDate>, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    // Admin form sends a bare date; tolerate a full timestamp too.
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ApiError::validation(format!("validUntil must be a YYYY-MM-DD date, got {raw}")))
}
