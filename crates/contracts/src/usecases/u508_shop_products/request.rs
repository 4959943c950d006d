use serde::{Deserialize, Serialize};

/// Query string of `GET /app`
///
/// Курсоры непрозрачны: они только пересылаются обратно в Admin API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListQuery {
    #[serde(default)]
    pub after: Option<String>,

    #[serde(default)]
    pub before: Option<String>,
}

/// Направление запроса страницы. Вперёд и назад никогда не смешиваются.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// `first/after`; без курсора это первая страница
    Forward { after: Option<String> },
    /// `last/before`
    Backward { before: String },
}

impl ProductListQuery {
    pub fn new(after: Option<&str>, before: Option<&str>) -> Self {
        Self {
            after: after.map(str::to_string),
            before: before.map(str::to_string),
        }
    }

    /// `before` wins over `after`; empty strings count as absent.
    pub fn page_request(&self) -> PageRequest {
        match non_empty(&self.before) {
            Some(before) => PageRequest::Backward {
                before: before.to_string(),
            },
            None => PageRequest::Forward {
                after: non_empty(&self.after).map(str::to_string),
            },
        }
    }

    /// Был ли в запросе хотя бы один курсор
    pub fn has_cursor(&self) -> bool {
        non_empty(&self.after).is_some() || non_empty(&self.before).is_some()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Form body of `POST /app` (application/x-www-form-urlencoded)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProductForm {
    #[serde(default)]
    pub title: Option<String>,

    /// Код статуса: ACTIVE, DRAFT или ARCHIVED
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub sku: Option<String>,
}
