// tests/listing_query.rs
//
// Listing behaviour against a seeded corpus:
//   - 4 published international articles per category (6 categories, 24 total)
//   - 7 Sweden-scoped, non-international sport articles
//   - 9 Sweden-scoped international sport articles, published 5 days ago
//   - 11 unscoped international sport articles
//   - 3 unpublished drafts
mod support;

use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use std::sync::Arc;

use newsdesk::application::dto::ListingPageDto;
use newsdesk::application::queries::articles::{ArticleQueryService, ListArticlesQuery};
use newsdesk::domain::article::{Article, Category};
use support::builders::ArticleBuilder;
use support::mocks::{FixedClock, InMemoryArticleRepository};

fn seed_corpus(now: DateTime<Utc>) -> Vec<Article> {
    let mut articles = Vec::new();
    let mut id = 0_i64;
    let mut next_id = || {
        id += 1;
        id
    };

    for category in Category::ALL {
        for n in 0..4 {
            articles.push(
                ArticleBuilder::new(next_id())
                    .category(category)
                    .international()
                    .published_at(now - Duration::minutes(n))
                    .build(),
            );
        }
    }
    for n in 0..7 {
        articles.push(
            ArticleBuilder::new(next_id())
                .location("Sweden")
                .published_at(now - Duration::minutes(100 + n))
                .build(),
        );
    }
    for n in 0..9 {
        articles.push(
            ArticleBuilder::new(next_id())
                .location("Sweden")
                .international()
                .published_at(now - Duration::days(5) - Duration::minutes(n))
                .build(),
        );
    }
    for n in 0..11 {
        articles.push(
            ArticleBuilder::new(next_id())
                .international()
                .published_at(now - Duration::minutes(200 + n))
                .build(),
        );
    }
    for _ in 0..3 {
        articles.push(ArticleBuilder::new(next_id()).build());
    }

    articles
}

fn service(now: DateTime<Utc>) -> ArticleQueryService {
    let repo = Arc::new(InMemoryArticleRepository::seeded(seed_corpus(now)));
    ArticleQueryService::new(repo, Arc::new(FixedClock(now)))
}

async fn list(
    service: &ArticleQueryService,
    location: Option<&str>,
    category: Option<&str>,
    page: Option<&str>,
) -> ListingPageDto {
    service
        .list_articles(ListArticlesQuery {
            location: location.map(str::to_owned),
            category: category.map(str::to_owned),
            page: page.map(str::to_owned),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn first_page_without_params_is_all_international() {
    let now = Utc::now();
    let service = service(now);
    let page = list(&service, None, None, None).await;

    assert_eq!(page.page, 1);
    assert_eq!(page.next_page, Some(2));
    assert_eq!(page.articles.len(), 20);
    for article in &page.articles {
        assert!(article.international);
        assert!(article.published_at.is_some());
    }
}

#[tokio::test]
async fn responses_are_sorted_and_deduplicated() {
    let now = Utc::now();
    let service = service(now);
    let page = list(&service, Some("Sweden"), None, None).await;

    let ids: HashSet<i64> = page.articles.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), page.articles.len());

    let stamps: Vec<_> = page
        .articles
        .iter()
        .map(|a| a.published_at.unwrap())
        .collect();
    for pair in stamps.windows(2) {
        assert!(pair[0] >= pair[1], "not sorted by published_at descending");
    }
}

#[tokio::test]
async fn location_widens_visibility_to_51_articles() {
    let now = Utc::now();
    let service = service(now);

    // 24 international defaults + 7 local + 9 aged international + 11 unscoped
    let third = list(&service, Some("Sweden"), None, Some("3")).await;
    assert_eq!(third.articles.len(), 11);
    assert_eq!(third.next_page, None);
}

#[tokio::test]
async fn category_filter_applies_to_both_scopes() {
    let now = Utc::now();
    let service = service(now);

    // sport without location: 4 defaults + 9 + 11 = 24
    let second = list(&service, None, Some("sport"), Some("2")).await;
    assert_eq!(second.articles.len(), 4);
    assert_eq!(second.next_page, None);
    for article in &second.articles {
        assert_eq!(article.category, "sport");
    }

    // sport with location: the 7 local ones join in, 31 total
    let second = list(&service, Some("Sweden"), Some("sport"), Some("2")).await;
    assert_eq!(second.articles.len(), 11);
    assert_eq!(second.next_page, None);
}

#[tokio::test]
async fn current_keyword_keeps_only_last_24_hours() {
    let now = Utc::now();
    let service = service(now);

    // without location: 24 defaults + 11 unscoped are recent; the 9 aged
    // internationals fall outside the window
    let first = list(&service, None, Some("current"), None).await;
    assert_eq!(first.articles.len(), 20);
    assert_eq!(first.next_page, Some(2));

    let second = list(&service, None, Some("current"), Some("2")).await;
    assert_eq!(second.articles.len(), 15);
    assert_eq!(second.next_page, None);

    let window = now - Duration::hours(24);
    for article in first.articles.iter().chain(&second.articles) {
        assert!(article.published_at.unwrap() >= window);
    }
}

#[tokio::test]
async fn local_keyword_returns_international_matches_only() {
    let now = Utc::now();
    let service = service(now);

    let page = list(&service, Some("Sweden"), Some("local"), None).await;
    assert_eq!(page.articles.len(), 20);
    assert_eq!(page.next_page, Some(2));
    for article in &page.articles {
        assert!(article.international);
    }

    // 44 international in total: 24 defaults + 9 aged + 11 unscoped
    let third = list(&service, Some("Sweden"), Some("local"), Some("3")).await;
    assert_eq!(third.articles.len(), 4);
    assert_eq!(third.next_page, None);
}

#[tokio::test]
async fn unknown_category_is_empty_not_an_error() {
    let now = Utc::now();
    let service = service(now);

    let page = list(&service, Some("Sweden"), Some("weather"), None).await;
    assert_eq!(page.page, 1);
    assert!(page.articles.is_empty());
    assert_eq!(page.next_page, None);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let now = Utc::now();
    let service = service(now);

    let page = list(&service, None, None, Some("9")).await;
    assert_eq!(page.page, 9);
    assert!(page.articles.is_empty());
    assert_eq!(page.next_page, None);
}

#[tokio::test]
async fn huge_page_number_is_empty_not_a_wrapped_window() {
    let now = Utc::now();
    let service = service(now);

    let page = list(&service, Some("Sweden"), None, Some("4294967295")).await;
    assert_eq!(page.page, u32::MAX);
    assert!(page.articles.is_empty());
    assert_eq!(page.next_page, None);
}

#[tokio::test]
async fn malformed_page_falls_back_to_first() {
    let now = Utc::now();
    let service = service(now);

    let page = list(&service, None, None, Some("not-a-number")).await;
    assert_eq!(page.page, 1);
    assert_eq!(page.articles.len(), 20);
}

#[tokio::test]
async fn drafts_never_appear_in_the_listing() {
    let now = Utc::now();
    let service = service(now);

    let mut seen = 0;
    let mut page_no = 1_u32;
    loop {
        let page = list(&service, Some("Sweden"), None, Some(&page_no.to_string())).await;
        for article in &page.articles {
            assert!(article.published_at.is_some());
        }
        seen += page.articles.len();
        match page.next_page {
            Some(next) => page_no = next,
            None => break,
        }
    }
    // all 51 visible articles, none of the 3 drafts
    assert_eq!(seen, 51);
}
