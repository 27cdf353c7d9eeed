use config::Config;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RestResult<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T> RestResult<T> {
    pub fn success(data: T) -> RestResult<T> {
        RestResult::<T> {
            code: crate::error::SUCCESS.code,
            message: crate::error::SUCCESS.message.to_string(),
            data,
        }
    }

    pub fn error(code: i32, message: String, data: T) -> RestResult<T> {
        RestResult::<T> {
            code,
            message,
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total_count: u64,
    pub page_number: u64,
    pub pages_available: u64,
    pub page_items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total_count: 0,
            page_number: 1,
            pages_available: 0,
            page_items: vec![],
        }
    }
}

impl<T> Page<T> {
    pub fn new(total_count: u64, page_number: u64, page_size: u64, page_items: Vec<T>) -> Self {
        Self {
            total_count,
            page_number,
            pages_available: (total_count as f64 / page_size as f64).ceil() as u64,
            page_items,
        }
    }

    /// Re-wrap the items of a page while keeping its counters.
    pub fn map_items<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            total_count: self.total_count,
            page_number: self.page_number,
            pages_available: self.pages_available,
            page_items: self.page_items.into_iter().map(f).collect(),
        }
    }
}

/// A single field-level validation failure surfaced to the submitting user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub app_config: Config,
    pub database_connection: DatabaseConnection,
    pub context_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(25, 2, 10, vec![1, 2, 3]);
        assert_eq!(page.total_count, 25);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.pages_available, 3);
        assert_eq!(page.page_items, vec![1, 2, 3]);
    }

    #[test]
    fn test_page_default() {
        let page = Page::<String>::default();
        assert_eq!(page.total_count, 0);
        assert_eq!(page.page_number, 1);
        assert!(page.page_items.is_empty());
    }

    #[test]
    fn test_page_map_items() {
        let page = Page::new(2, 1, 10, vec![1, 2]).map_items(|n| n * 10);
        assert_eq!(page.page_items, vec![10, 20]);
        assert_eq!(page.total_count, 2);
        assert_eq!(page.pages_available, 1);
    }

    #[test]
    fn test_rest_result_success() {
        let result = RestResult::success("ok");
        assert_eq!(result.code, 0);
        assert_eq!(result.message, "success");
        assert_eq!(result.data, "ok");
    }

    #[test]
    fn test_field_error_serialization() {
        let err = FieldError::new("name", "name_required", "name is required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "name");
        assert_eq!(json["code"], "name_required");
    }
}
