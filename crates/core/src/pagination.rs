//! Fixed-size page numbering for the listing collection.
//!
//! Pages are 1-based and hold [`PAGE_SIZE`] items. The envelope reports the
//! total item and page counts plus absolute links to the neighbouring pages,
//! built by replacing only the `page` query parameter of the current URL.

use serde::Serialize;

/// Number of items per page.
pub const PAGE_SIZE: i64 = 8;

/// Name of the query parameter carrying the page number.
pub const PAGE_PARAM: &str = "page";

/// A requested page number, always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: i64,
}

impl PageRequest {
    /// Build a request for `number`, flooring at page 1.
    pub fn new(number: i64) -> Self {
        Self {
            number: number.max(1),
        }
    }

    /// Interpret a raw `page` parameter. Missing, non-numeric, or
    /// non-positive values select the first page.
    pub fn from_param(raw: Option<&str>) -> Self {
        let number = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(number)
    }

    pub fn number(self) -> i64 {
        self.number
    }

    /// Row offset of the first item on this page.
    pub fn offset(self) -> i64 {
        (self.number - 1).saturating_mul(PAGE_SIZE)
    }

    pub fn limit(self) -> i64 {
        PAGE_SIZE
    }
}

/// `ceil(total_items / PAGE_SIZE)`; zero items means zero pages.
pub fn total_pages(total_items: i64) -> i64 {
    if total_items <= 0 {
        return 0;
    }
    (total_items + PAGE_SIZE - 1) / PAGE_SIZE
}

/// The URL a page of results was requested from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    base: String,
    query: Option<String>,
}

impl PageUrl {
    /// `host` is the request's `Host` header. Without it links are
    /// relative to the server root.
    pub fn new(host: Option<&str>, path: &str, query: Option<&str>) -> Self {
        let base = match host {
            Some(host) => format!("http://{host}{path}"),
            None => path.to_string(),
        };
        Self {
            base,
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
        }
    }

    /// Link to `page`, keeping every other query parameter in order.
    /// Page 1 is addressed without a `page` parameter.
    pub fn page_link(&self, page: i64) -> String {
        let mut pairs: Vec<String> = self
            .query
            .as_deref()
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| pair.split('=').next() != Some(PAGE_PARAM))
            .map(str::to_string)
            .collect();

        if page > 1 {
            pairs.push(format!("{PAGE_PARAM}={page}"));
        }

        if pairs.is_empty() {
            self.base.clone()
        } else {
            format!("{}?{}", self.base, pairs.join("&"))
        }
    }
}

/// Paginated response envelope.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T: Serialize> Page<T> {
    /// Assemble the envelope for one page of `results` out of
    /// `total_items` matching rows.
    pub fn new(request: PageRequest, total_items: i64, results: Vec<T>, url: &PageUrl) -> Self {
        let total_pages = total_pages(total_items);
        let current = request.number();

        let next = (current < total_pages).then(|| url.page_link(current + 1));
        // Past the end, point back at the last real page.
        let previous = (current > 1).then(|| url.page_link((current - 1).min(total_pages.max(1))));

        Self {
            total_items,
            total_pages,
            current_page: current,
            next,
            previous,
            results,
        }
    }
}
