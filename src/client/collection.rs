use chrono::Utc;
use uuid::Uuid;

use super::export::{self, CsvExport};
use super::{ApiClient, ClientError, ListParams, Resource};
use crate::models::{SortOrder, enquiries};

/// Client-side cache of one REST collection.
///
/// Reads never fail outward: on error the cache keeps what it has, or seeds
/// itself from [`Resource::fallback`] when it has nothing. Writes go to the
/// server first and only then patch the local list.
#[derive(Debug, Clone)]
pub struct Collection<R: Resource> {
    pub items: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
    params: ListParams,
}

impl<R: Resource> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> Collection<R> {
    pub fn new() -> Self {
        Self::with_params(ListParams::default())
    }

    /// A cache that lists with the given filters, e.g. `?category=Hair`.
    pub fn with_params(params: ListParams) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            params,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Fallback items narrowed and ordered by this cache's own list params.
    fn seed(&self) -> Vec<R> {
        let default = if R::INSERT_AT_FRONT {
            SortOrder::Newest
        } else {
            SortOrder::Oldest
        };

        let mut items: Vec<R> = R::fallback()
            .into_iter()
            .filter(|item| item.matches(&self.params))
            .collect();
        match self.params.sort_or(default) {
            SortOrder::Newest => items.sort_by_key(|item| std::cmp::Reverse(item.created_at())),
            SortOrder::Oldest => items.sort_by_key(|item| item.created_at()),
        }
        items
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.loading = true;

        match api.list::<R>(&self.params).await {
            Ok(items) if items.is_empty() && R::SEED_WHEN_EMPTY => {
                tracing::debug!(resource = R::PATH, "empty list, showing seed data");
                self.items = self.seed();
                self.error = None;
            }
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(resource = R::PATH, "Failed to fetch {}: {e}", R::PATH);
                if self.items.is_empty() {
                    self.items = self.seed();
                }
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    pub async fn refresh(&mut self, api: &ApiClient) {
        self.load(api).await;
    }

    pub async fn add(&mut self, api: &ApiClient, input: &R::Create) -> Result<R, ClientError> {
        let created = api.create::<R>(input).await.inspect_err(|e| {
            tracing::warn!(resource = R::PATH, "Failed to create: {e}");
        })?;

        if R::INSERT_AT_FRONT {
            self.items.insert(0, created.clone());
        } else {
            self.items.push(created.clone());
        }
        Ok(created)
    }

    pub async fn update(
        &mut self,
        api: &ApiClient,
        id: Uuid,
        patch: &R::Patch,
    ) -> Result<R, ClientError> {
        let updated = api.update::<R>(id, patch).await.inspect_err(|e| {
            tracing::warn!(resource = R::PATH, %id, "Failed to update: {e}");
        })?;

        if let Some(slot) = self.items.iter_mut().find(|item| item.id() == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    pub async fn remove(&mut self, api: &ApiClient, id: Uuid) -> Result<(), ClientError> {
        api.delete::<R>(id).await.inspect_err(|e| {
            tracing::warn!(resource = R::PATH, %id, "Failed to delete: {e}");
        })?;

        self.items.retain(|item| item.id() != id);
        Ok(())
    }
}

impl Collection<enquiries::Model> {
    /// Delete an enquiry; the server re-checks the admin password.
    pub async fn remove_with_password(
        &mut self,
        api: &ApiClient,
        id: Uuid,
        password: &str,
    ) -> Result<(), ClientError> {
        api.delete_enquiry(id, password).await.inspect_err(|e| {
            tracing::warn!(%id, "Failed to delete enquiry: {e}");
        })?;

        self.items.retain(|e| e.id != id);
        Ok(())
    }

    /// Current inbox as a CSV download named for today's date.
    pub fn export_csv(&self) -> CsvExport {
        CsvExport {
            file_name: export::file_name(Utc::now().date_naive()),
            content: export::enquiries_csv(&self.items),
        }
    }
}
