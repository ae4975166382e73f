// src/domain/article/listing.rs
//
// The listing planner: turns a page request plus filter keywords into a
// single visibility predicate, a storage window (offset + probe row) and the
// derived next-page signal.
use crate::domain::article::entity::Article;
use chrono::{DateTime, Duration, Utc};

pub const PAGE_SIZE: u32 = 20;

/// Window for the `current` keyword, in hours.
const RECENCY_WINDOW_HOURS: i64 = 24;

/// What the caller's `category` parameter means for the listing. `all`,
/// `local` and `current` are reserved keywords; anything else is a literal
/// category filter. Unknown names simply match nothing, they are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    /// `local`: local scope is disabled, leaving international matches only.
    InternationalOnly,
    /// `current`: only articles published within the last 24 hours, one
    /// shared window for the local and international scopes.
    Current,
    Named(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "all" => CategoryFilter::All,
            "local" => CategoryFilter::InternationalOnly,
            "current" => CategoryFilter::Current,
            other => CategoryFilter::Named(other.to_owned()),
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListingRequest {
    /// Attribute of the requesting context, not a caller-chosen filter.
    pub location: Option<String>,
    pub category: CategoryFilter,
    /// 1-indexed; zero is coerced up to 1.
    pub page: u32,
}

/// A fully resolved plan: one predicate evaluated in a single pass, plus the
/// paging window. Repositories translate the predicate to their own query
/// language; `matches` is the reference evaluation.
#[derive(Debug, Clone)]
pub struct ListingPlan {
    pub location: Option<String>,
    pub local_scope: bool,
    pub category: Option<String>,
    pub published_since: Option<DateTime<Utc>>,
    pub page: u32,
    /// Wider than `page` so the multiply cannot overflow on large page
    /// numbers; storage layers bind it as a 64-bit integer anyway.
    pub offset: u64,
    pub fetch_limit: u32,
}

impl ListingPlan {
    pub fn build(request: ListingRequest, now: DateTime<Utc>) -> Self {
        let page = request.page.max(1);
        let (local_scope, category, published_since) = match request.category {
            CategoryFilter::All => (true, None, None),
            CategoryFilter::InternationalOnly => (false, None, None),
            CategoryFilter::Current => {
                (true, None, Some(now - Duration::hours(RECENCY_WINDOW_HOURS)))
            }
            CategoryFilter::Named(name) => (true, Some(name), None),
        };

        Self {
            location: request.location,
            local_scope,
            category,
            published_since,
            page,
            offset: (u64::from(page) - 1) * u64::from(PAGE_SIZE),
            fetch_limit: PAGE_SIZE + 1,
        }
    }

    /// `visible = published AND (international OR location matches) AND filters`.
    ///
    /// Location comparison treats two absent locations as equal, so callers
    /// without a location still see articles that are not location-scoped.
    pub fn matches(&self, article: &Article) -> bool {
        if !article.published {
            return false;
        }

        let local_match = self.local_scope && article.location == self.location;
        if !article.international && !local_match {
            return false;
        }

        if let Some(category) = self.category.as_deref() {
            if article.category.as_str() != category {
                return false;
            }
        }

        if let Some(since) = self.published_since {
            match article.published_at {
                Some(at) if at >= since => {}
                _ => return false,
            }
        }

        true
    }

    /// Trim a fetched window (up to `fetch_limit` rows, already ordered) down
    /// to one page. The probe row only proves a next page exists and is
    /// discarded.
    pub fn paginate(&self, mut rows: Vec<Article>) -> ListingPage {
        let next_page = (rows.len() > PAGE_SIZE as usize).then(|| self.page + 1);
        rows.truncate(PAGE_SIZE as usize);
        ListingPage {
            page: self.page,
            next_page,
            articles: rows,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListingPage {
    pub page: u32,
    pub next_page: Option<u32>,
    pub articles: Vec<Article>,
}
