use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{clearable, reject_blank};
use crate::error::ApiError;

/// Primary key of the one and only settings row.
pub const SETTINGS_ROW_ID: i32 = 1;

/// SeaORM entity for the singleton `site_settings` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub business_name: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub working_hours: String,
    pub hero_tagline: String,
    #[sea_orm(column_type = "Text")]
    pub about_text: String,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Wire shape of the settings record. Social links are nested on the wire
/// but stored as two flat columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub business_name: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub address: String,
    pub working_hours: String,
    pub hero_tagline: String,
    pub about_text: String,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Default for SiteSettings {
    /// What the storefront shows before an admin has saved anything.
    fn default() -> Self {
        Self {
            business_name: "Honey Herbal Beauty Parlor".to_string(),
            phone: "+91 98765 43210".to_string(),
            whatsapp: "+91 98765 43210".to_string(),
            email: "hello@honeyherbal.com".to_string(),
            address: "123 Green Lane, Botanical Garden Road, Mumbai - 400001".to_string(),
            working_hours: "Mon-Sat: 10AM - 8PM | Sun: 10AM - 6PM".to_string(),
            hero_tagline: "Experience the Power of Nature for Your Beauty".to_string(),
            about_text: "At Honey Herbal Beauty Parlor, we believe that true beauty comes from \
                nature. Our salon combines centuries-old herbal traditions with modern beauty \
                techniques to give you a radiant, natural glow."
                .to_string(),
            social_links: SocialLinks {
                facebook: Some("https://facebook.com/honeyherbal".to_string()),
                instagram: Some("https://instagram.com/honeyherbal".to_string()),
            },
        }
    }
}

impl From<Model> for SiteSettings {
    fn from(m: Model) -> Self {
        Self {
            business_name: m.business_name,
            phone: m.phone,
            whatsapp: m.whatsapp,
            email: m.email,
            address: m.address,
            working_hours: m.working_hours,
            hero_tagline: m.hero_tagline,
            about_text: m.about_text,
            social_links: SocialLinks {
                facebook: m.facebook_url,
                instagram: m.instagram_url,
            },
        }
    }
}

impl SiteSettings {
    pub(crate) fn into_active_model(self) -> ActiveModel {
        use sea_orm::Set;

        ActiveModel {
            id: Set(SETTINGS_ROW_ID),
            business_name: Set(self.business_name),
            phone: Set(self.phone),
            whatsapp: Set(self.whatsapp),
            email: Set(self.email),
            address: Set(self.address),
            working_hours: Set(self.working_hours),
            hero_tagline: Set(self.hero_tagline),
            about_text: Set(self.about_text),
            facebook_url: Set(self.social_links.facebook),
            instagram_url: Set(self.social_links.instagram),
            updated_at: Set(chrono::Utc::now()),
        }
    }
}

// ── DTOs ──

/// Partial settings update. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub business_name: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub working_hours: Option<String>,
    pub hero_tagline: Option<String>,
    pub about_text: Option<String>,
    pub social_links: Option<SocialLinks>,
}

impl SettingsPatch {
    pub fn validate(self) -> Result<Self, ApiError> {
        reject_blank("businessName", &self.business_name)?;
        Ok(self)
    }

    /// Merge onto `base`, returning the new full record.
    pub fn merge_into(self, mut base: SiteSettings) -> SiteSettings {
        if let Some(v) = self.business_name {
            base.business_name = v;
        }
        if let Some(v) = self.phone {
            base.phone = v;
        }
        if let Some(v) = self.whatsapp {
            base.whatsapp = v;
        }
        if let Some(v) = self.email {
            base.email = v;
        }
        if let Some(v) = self.address {
            base.address = v;
        }
        if let Some(v) = self.working_hours {
            base.working_hours = v;
        }
        if let Some(v) = self.hero_tagline {
            base.hero_tagline = v;
        }
        if let Some(v) = self.about_text {
            base.about_text = v;
        }
        if let Some(links) = self.social_links {
            base.social_links = SocialLinks {
                facebook: links.facebook.and_then(clearable),
                instagram: links.instagram.and_then(clearable),
            };
        }
        base
    }
}
