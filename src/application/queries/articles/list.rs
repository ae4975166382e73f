use super::ArticleQueryService;
use crate::{
    application::{dto::ListingPageDto, error::ApplicationResult},
    domain::article::{CategoryFilter, ListingPlan, ListingRequest},
};

/// Raw listing parameters as they arrive from the caller. Parsing here is
/// forgiving on purpose: a missing category means `all`, an unparsable page
/// falls back to the first page. Absence of results is never an error.
pub struct ListArticlesQuery {
    pub location: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
}

impl ListArticlesQuery {
    fn into_request(self) -> ListingRequest {
        let category = self
            .category
            .as_deref()
            .map_or(CategoryFilter::All, CategoryFilter::parse);
        let page = self
            .page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);

        ListingRequest {
            location: self.location,
            category,
            page,
        }
    }
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ListingPageDto> {
        let plan = ListingPlan::build(query.into_request(), self.clock.now());
        let rows = self.read_repo.list_window(&plan).await?;
        Ok(plan.paginate(rows).into())
    }
}
