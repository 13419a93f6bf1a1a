use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{non_blank, reject_blank};
use crate::error::ApiError;

/// Used when an item is created before its image has been uploaded.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1560066984-138dadb4c035?w=400";

/// SeaORM entity for the `gallery_items` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gallery_items")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image_url: String,
    pub caption: String,
    pub category: GalleryCategory,
    pub created_at: DateTimeUtc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum GalleryCategory {
    #[sea_orm(string_value = "Hair")]
    Hair,
    #[sea_orm(string_value = "Facial")]
    Facial,
    #[sea_orm(string_value = "Bridal")]
    Bridal,
    #[sea_orm(string_value = "Other")]
    Other,
}

impl GalleryCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hair => "Hair",
            Self::Facial => "Facial",
            Self::Bridal => "Bridal",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalleryCategory {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hair" => Ok(Self::Hair),
            "Facial" => Ok(Self::Facial),
            "Bridal" => Ok(Self::Bridal),
            "Other" => Ok(Self::Other),
            other => Err(ApiError::validation(format!(
                "Unknown gallery category: {other}"
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
pub struct CreateGalleryItem {
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub category: Option<GalleryCategory>,
}

#[derive(Debug, Clone)]
pub struct NewGalleryItem {
    pub image_url: String,
    pub caption: String,
    pub category: GalleryCategory,
}

impl CreateGalleryItem {
    pub fn validate(self) -> Result<NewGalleryItem, ApiError> {
        let (Some(caption), Some(category)) = (non_blank(self.caption), self.category) else {
            return Err(ApiError::validation("Caption and category are required"));
        };

        Ok(NewGalleryItem {
            image_url: non_blank(self.image_url)
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            caption,
            category,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGalleryItem {
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub category: Option<GalleryCategory>,
}

impl UpdateGalleryItem {
    pub fn validate(self) -> Result<Self, ApiError> {
        reject_blank("imageUrl", &self.image_url)?;
        reject_blank("caption", &self.caption)?;
        Ok(self)
    }

    pub(crate) fn apply(self, active: &mut ActiveModel) {
        use sea_orm::Set;

        if let Some(image_url) = self.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(caption) = self.caption {
            active.caption = Set(caption);
        }
        if let Some(category) = self.category {
            active.category = Set(category);
        }
    }
}
