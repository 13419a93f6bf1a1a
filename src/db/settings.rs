use sea_orm::*;

use crate::models::settings::{self, SETTINGS_ROW_ID, SettingsPatch, SiteSettings};

/// Fetch the stored settings row, if an admin has ever saved one.
pub async fn get_settings(db: &DatabaseConnection) -> Result<Option<SiteSettings>, DbErr> {
    Ok(settings::Entity::find_by_id(SETTINGS_ROW_ID)
        .one(db)
        .await?
        .map(SiteSettings::from))
}

/// Merge a patch onto the stored settings (or the defaults) and upsert the row.
pub async fn upsert_settings(
    db: &DatabaseConnection,
    patch: SettingsPatch,
) -> Result<SiteSettings, DbErr> {
    let existing = settings::Entity::find_by_id(SETTINGS_ROW_ID).one(db).await?;
    let is_new = existing.is_none();

    let merged = patch.merge_into(existing.map(SiteSettings::from).unwrap_or_default());
    let active = merged.clone().into_active_model();

    if is_new {
        active.insert(db).await?;
    } else {
        active.update(db).await?;
    }

    Ok(merged)
}
