// marque-core-client/marque-core-integration-tests
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use marque_core_client::app::services::BookmarksService;
use marque_core_client::dtos::{CreateBookmarkRequest, SyncState};
use marque_core_client::test::{mock_bookmark, MockAppDependencies};

#[tokio::test]
async fn test_search_matches_title_and_url_case_insensitively() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let mut rust_blog = mock_bookmark(1);
    rust_blog.title = "Rust Blog".to_string();
    rust_blog.url = "https://blog.rust-lang.org/".parse()?;

    let mut cooking = mock_bookmark(2);
    cooking.title = "Cooking Weekly".to_string();
    cooking.url = "https://example.org/recipes".parse()?;

    let bookmarks = vec![rust_blog.clone(), cooking.clone()];
    deps.bookmarks_repo
        .expect_get_all()
        .returning(move || bookmarks.clone());

    let service = BookmarksService::from(&deps.into_deps());

    assert_eq!(service.search_bookmarks("RUST"), vec![rust_blog.clone()]);
    assert_eq!(service.search_bookmarks("recipes"), vec![cooking.clone()]);
    assert_eq!(service.search_bookmarks("bagpipes"), vec![]);
    assert_eq!(
        service.search_bookmarks("  "),
        vec![rust_blog.clone(), cooking.clone()]
    );

    Ok(())
}

#[tokio::test]
async fn test_create_bookmark_forwards_validated_request() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let bookmark = mock_bookmark(1);

    {
        let bookmark = bookmark.clone();
        deps.bookmarks_domain_service
            .expect_create_bookmark()
            .once()
            .withf(|title, url| title == "Rust Blog" && url.as_str() == "https://blog.rust-lang.org/")
            .return_once(move |_, _| Box::pin(async move { Ok(bookmark) }));
    }

    let service = BookmarksService::from(&deps.into_deps());
    let request = CreateBookmarkRequest::new(" Rust Blog ", "https://blog.rust-lang.org/")?;

    assert_eq!(service.create_bookmark(request).await?, bookmark);

    Ok(())
}

#[tokio::test]
async fn test_delete_bookmark_forwards_id() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let bookmark = mock_bookmark(1);

    deps.bookmarks_domain_service
        .expect_delete_bookmark()
        .once()
        .with(predicate::eq(bookmark.id.clone()))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let service = BookmarksService::from(&deps.into_deps());
    service.delete_bookmark(&bookmark.id).await?;

    Ok(())
}

#[tokio::test]
async fn test_exposes_sync_state() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let state = SyncState {
        is_loading: false,
        is_creating: true,
        deleting_id: None,
    };

    {
        let state = state.clone();
        deps.bookmarks_domain_service
            .expect_sync_state()
            .once()
            .return_once(move || state);
    }

    let service = BookmarksService::from(&deps.into_deps());
    assert_eq!(service.sync_state(), state);

    Ok(())
}
