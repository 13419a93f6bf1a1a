use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{clearable, non_blank, reject_blank};
use crate::error::ApiError;

pub const DEFAULT_ROLE: &str = "Client";
pub const DEFAULT_RATING: i32 = 5;

/// SeaORM entity for the `testimonials` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonials")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[serde(alias = "clientName")]
    pub name: String,
    pub role: String,
    #[sea_orm(column_type = "Text")]
    #[serde(alias = "quote")]
    pub testimonial: String,
    /// 1..=5 stars.
    pub rating: i32,
    pub image_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn check_rating(rating: i32) -> Result<i32, ApiError> {
    if (1..=5).contains(&rating) {
        Ok(rating)
    } else {
        Err(ApiError::validation("Rating must be between 1 and 5"))
    }
}

// ── DTOs ──
// The storefront historically called these fields `clientName` and `quote`;
// both spellings are accepted on the way in.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    #[serde(alias = "clientName")]
    pub name: Option<String>,
    pub role: Option<String>,
    #[serde(alias = "quote")]
    pub testimonial: Option<String>,
    pub rating: Option<i32>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub testimonial: String,
    pub rating: i32,
    pub image_url: Option<String>,
}

impl CreateTestimonial {
    pub fn validate(self) -> Result<NewTestimonial, ApiError> {
        let (Some(name), Some(testimonial)) = (non_blank(self.name), non_blank(self.testimonial))
        else {
            return Err(ApiError::validation("Name and testimonial are required"));
        };

        Ok(NewTestimonial {
            name,
            role: non_blank(self.role).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            testimonial,
            rating: check_rating(self.rating.unwrap_or(DEFAULT_RATING))?,
            image_url: non_blank(self.image_url),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonial {
    #[serde(alias = "clientName")]
    pub name: Option<String>,
    pub role: Option<String>,
    #[serde(alias = "quote")]
    pub testimonial: Option<String>,
    pub rating: Option<i32>,
    pub image_url: Option<String>,
}

impl UpdateTestimonial {
    pub fn validate(self) -> Result<Self, ApiError> {
        reject_blank("name", &self.name)?;
        reject_blank("role", &self.role)?;
        reject_blank("testimonial", &self.testimonial)?;
        if let Some(rating) = self.rating {
            check_rating(rating)?;
        }
        Ok(self)
    }

    pub(crate) fn apply(self, active: &mut ActiveModel) {
        use sea_orm::Set;

        if let Some(name) = self.name {
            active.name = Set(name);
        }
        if let Some(role) = self.role {
            active.role = Set(role);
        }
        if let Some(testimonial) = self.testimonial {
            active.testimonial = Set(testimonial);
        }
        if let Some(rating) = self.rating {
            active.rating = Set(rating);
        }
        if let Some(image_url) = self.image_url {
            active.image_url = Set(clearable(image_url));
        }
    }
}
