//! Pagination envelope
//!
//! Backends return their own `links` block whose hrefs point at backend
//! URLs. The gateway never relays those: it rebuilds `self`/`next`/`prev`
//! against its own public paths, using the backend block only to learn
//! whether a neighbouring page exists.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default page number for every paginated endpoint
pub const DEFAULT_PAGE: u32 = 1;

/// A single navigation link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Link {
    pub href: String,
}

/// Navigation links of a paginated collection
///
/// `self` is always present; `next`/`prev` only when such a page exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PaginationLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
}

/// Links block as returned by a backend; only presence of each entry matters
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct UpstreamLinks {
    #[serde(default, rename = "self")]
    pub self_link: Option<serde_json::Value>,
    #[serde(default)]
    pub next: Option<serde_json::Value>,
    #[serde(default)]
    pub prev: Option<serde_json::Value>,
}

/// Page position plus the optional filters a caller supplied
///
/// The same pairs are forwarded to the backend and used to build the
/// public links, so what the caller sent is what both sides see.
#[derive(Debug, Clone, PartialEq)]
pub struct PageParams {
    pub page: u32,
    pub page_size: u32,
    filters: Vec<Filter>,
}

/// A supplied filter under its public name and the name its backend reads
#[derive(Debug, Clone, PartialEq)]
struct Filter {
    public: &'static str,
    upstream: &'static str,
    value: String,
}

impl PageParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            filters: Vec::new(),
        }
    }

    /// Add a filter, skipping it when the caller did not supply a value
    pub fn filter(self, key: &'static str, value: Option<&str>) -> Self {
        self.filter_as(key, key, value)
    }

    /// Add a filter the backend knows under a different name
    pub fn filter_as(
        mut self,
        public: &'static str,
        upstream: &'static str,
        value: Option<&str>,
    ) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.filters.push(Filter {
                public,
                upstream,
                value: value.to_string(),
            });
        }
        self
    }

    /// Backend query pairs for this page: `page`, `page_size`, then filters in insertion order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.position(self.page);
        pairs.extend(self.filters.iter().map(|f| (f.upstream, f.value.clone())));
        pairs
    }

    /// Public href of `path` at the given page, carrying the same size and filters
    pub fn href(&self, path: &str, page: u32) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.position(page) {
            query.append_pair(key, &value);
        }
        for filter in &self.filters {
            query.append_pair(filter.public, &filter.value);
        }
        format!("{}?{}", path, query.finish())
    }

    /// Build the public links block for `path` from the backend's links
    pub fn links(&self, path: &str, upstream: &UpstreamLinks) -> PaginationLinks {
        PaginationLinks {
            self_link: Link {
                href: self.href(path, self.page),
            },
            next: upstream.next.as_ref().map(|_| Link {
                href: self.href(path, self.page.saturating_add(1)),
            }),
            prev: upstream
                .prev
                .as_ref()
                .filter(|_| self.page > 1)
                .map(|_| Link {
                    href: self.href(path, self.page - 1),
                }),
        }
    }

    fn position(&self, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("page", page.to_string()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}
