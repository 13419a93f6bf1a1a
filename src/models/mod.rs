pub mod enquiries;
pub mod gallery;
pub mod packages;
pub mod services;
pub mod settings;
pub mod testimonials;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Query string accepted by every list endpoint: `?category=&status=&sort=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    Oldest,
}

impl ListQuery {
    /// Category filter; `All` and blank mean "no filter".
    pub fn category(&self) -> Option<&str> {
        filter_value(self.category.as_deref())
    }

    /// Status filter; `All` and blank mean "no filter".
    pub fn status(&self) -> Option<&str> {
        filter_value(self.status.as_deref())
    }

    pub fn sort_or(&self, default: SortOrder) -> SortOrder {
        match self.sort.as_deref() {
            Some("oldest") => SortOrder::Oldest,
            Some("newest") => SortOrder::Newest,
            _ => default,
        }
    }
}

fn filter_value(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// `Some(value)` only when the value has visible content.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Patches may omit a required field but may not blank it out.
pub(crate) fn reject_blank(field: &str, value: &Option<String>) -> Result<(), ApiError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ApiError::validation(format!(
            "{field} cannot be empty"
        ))),
        _ => Ok(()),
    }
}

/// Optional text columns are cleared by sending an empty string.
pub(crate) fn clearable(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_means_no_filter() {
        let query = ListQuery {
            category: Some("All".to_string()),
            status: Some("  ".to_string()),
            sort: None,
        };
        assert_eq!(query.category(), None);
        assert_eq!(query.status(), None);
    }

    #[test]
    fn sort_falls_back_to_entity_default() {
        let mut query = ListQuery::default();
        assert_eq!(query.sort_or(SortOrder::Oldest), SortOrder::Oldest);

        query.sort = Some("sideways".to_string());
        assert_eq!(query.sort_or(SortOrder::Newest), SortOrder::Newest);

        query.sort = Some("oldest".to_string());
        assert_eq!(query.sort_or(SortOrder::Newest), SortOrder::Oldest);
    }

    #[test]
    fn blank_patch_values_are_rejected() {
        assert!(reject_blank("title", &Some(" ".to_string())).is_err());
        assert!(reject_blank("title", &None).is_ok());
        assert_eq!(clearable(String::new()), None);
    }
}
