use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{clearable, non_blank, reject_blank};
use crate::error::ApiError;

pub const DEFAULT_ICON: &str = "✨";

/// SeaORM entity for the `services` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Display string, e.g. "Starting from ₹500".
    pub price: String,
    pub category: String,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateService {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
}

/// A create request that passed validation.
#[derive(Debug, Clone)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub icon: String,
    pub image_url: Option<String>,
}

impl CreateService {
    pub fn validate(self) -> Result<NewService, ApiError> {
        match (
            non_blank(self.title),
            non_blank(self.description),
            non_blank(self.price),
            non_blank(self.category),
        ) {
            (Some(title), Some(description), Some(price), Some(category)) => Ok(NewService {
                title,
                description,
                price,
                category,
                icon: non_blank(self.icon).unwrap_or_else(|| DEFAULT_ICON.to_string()),
                image_url: non_blank(self.image_url),
            }),
            _ => Err(ApiError::validation(
                "Title, description, price, and category are required",
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateService {
    pub fn validate(self) -> Result<Self, ApiError> {
        reject_blank("title", &self.title)?;
        reject_blank("description", &self.description)?;
        reject_blank("price", &self.price)?;
        reject_blank("category", &self.category)?;
        Ok(self)
    }

    pub(crate) fn apply(self, active: &mut ActiveModel) {
        use sea_orm::Set;

        if let Some(title) = self.title {
            active.title = Set(title);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
        if let Some(price) = self.price {
            active.price = Set(price);
        }
        if let Some(category) = self.category {
            active.category = Set(category);
        }
        if let Some(icon) = self.icon {
            active.icon = Set(clearable(icon));
        }
        if let Some(image_url) = self.image_url {
            active.image_url = Set(clearable(image_url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_all_display_fields() {
        let input = CreateService {
            title: Some("Hair Care".to_string()),
            description: Some("Organic treatments".to_string()),
            price: Some("   ".to_string()),
            category: Some("Hair".to_string()),
            ..Default::default()
        };
        assert!(matches!(input.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn create_defaults_icon() {
        let input = CreateService {
            title: Some("Waxing".to_string()),
            description: Some("Gentle herbal waxing".to_string()),
            price: Some("Starting from ₹200".to_string()),
            category: Some("Waxing".to_string()),
            ..Default::default()
        };
        assert_eq!(input.validate().unwrap().icon, DEFAULT_ICON);
    }

    #[test]
    fn wire_fields_are_camel_case() {
        let model = Model {
            id: Uuid::nil(),
            title: "Hair Care".to_string(),
            description: "d".to_string(),
            price: "₹300".to_string(),
            category: "Hair".to_string(),
            icon: None,
            image_url: Some("https://cdn/x.jpg".to_string()),
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["imageUrl"], "https://cdn/x.jpg");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("image_url").is_none());
    }
}
