use super::{ApiClient, ClientError};
use crate::models::settings::{SettingsPatch, SiteSettings};

/// Cached site settings. Starts from the built-in defaults so the storefront
/// can render before (or without) a successful fetch.
#[derive(Debug, Clone)]
pub struct SettingsCache {
    pub settings: SiteSettings,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for SettingsCache {
    fn default() -> Self {
        Self {
            settings: SiteSettings::default(),
            loading: false,
            error: None,
        }
    }
}

impl SettingsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.loading = true;
        match api.settings().await {
            Ok(settings) => {
                self.settings = settings;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch settings: {e}");
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    pub async fn update(
        &mut self,
        api: &ApiClient,
        patch: &SettingsPatch,
    ) -> Result<&SiteSettings, ClientError> {
        let saved = api.update_settings(patch).await.inspect_err(|e| {
            tracing::warn!("Failed to update settings: {e}");
        })?;
        self.settings = saved;
        Ok(&self.settings)
    }
}
