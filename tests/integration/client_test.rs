//! Integration tests for the story client against the fake backend
//!
//! Each test logs in, then issues individual calls and checks the statuses
//! and literal messages the suite relies on.

use actix_web::http::StatusCode;
use story_spoiler::requests::StoryInput;
use story_spoiler::scenarios::messages;
use story_spoiler::testing::{FakeBackend, setup};
use story_spoiler::{StoryClient, login};

async fn connect(backend: &FakeBackend) -> StoryClient {
    let config = setup::config(backend);
    let session = login(&config.backend, &config.credentials).await.unwrap();

    StoryClient::new(session)
}

// =============================================================================
// LOGIN
// =============================================================================

#[actix_web::test]
async fn test_login_returns_session_with_token() {
    let backend = setup::backend();
    let config = setup::config(&backend);

    let session = login(&config.backend, &config.credentials).await.unwrap();

    assert!(!session.token().is_empty());
    assert_eq!(session.base_url(), backend.url());

    let debug = format!("{:?}", session);
    assert!(!debug.contains(session.token()), "Token must not leak into logs");

    backend.stop().await;
}

/// Each login issues a different token
#[actix_web::test]
async fn test_login_tokens_are_unique() {
    let backend = setup::backend();
    let config = setup::config(&backend);

    let first = login(&config.backend, &config.credentials).await.unwrap();
    let second = login(&config.backend, &config.credentials).await.unwrap();

    assert_ne!(first.token(), second.token());

    backend.stop().await;
}

/// Requests without the bearer header are rejected
#[actix_web::test]
async fn test_story_endpoints_require_bearer_token() {
    let backend = setup::backend();

    let response = awc::Client::default()
        .get(format!("{}/api/Story/All", backend.url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    backend.stop().await;
}

// =============================================================================
// CREATE
// =============================================================================

/// Every create yields a non-empty id never issued before
#[actix_web::test]
async fn test_create_issues_distinct_ids() {
    let backend = setup::backend();
    let client = connect(&backend).await;
    let input = StoryInput::new("New Story Spoiler", "New Spoiler");

    let mut ids = Vec::new();
    for _ in 0..3 {
        let response = client.create(&input).await.unwrap();
        assert_eq!(response.status, StatusCode::CREATED);

        let id = response.story_id().unwrap().to_string();
        assert!(!ids.contains(&id), "Id {} was issued twice", id);
        ids.push(id);
    }

    assert_eq!(backend.stories().await.len(), 3);

    backend.stop().await;
}

/// Empty title and description with no Url key is a bad request, never a creation
#[actix_web::test]
async fn test_create_without_required_fields_is_bad_request() {
    let backend = setup::backend();
    let client = connect(&backend).await;

    let response = client
        .create(&StoryInput::new("", "").without_url())
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(backend.stories().await.is_empty());

    backend.stop().await;
}

/// The Url key may be an empty string
#[actix_web::test]
async fn test_create_stores_empty_url() {
    let backend = setup::backend();
    let client = connect(&backend).await;

    client
        .create(&StoryInput::new("Title", "Description"))
        .await
        .unwrap()
        .expect_status(StatusCode::CREATED)
        .unwrap();

    let stories = backend.stories().await;
    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].url.as_deref(), Some(""));

    backend.stop().await;
}

// =============================================================================
// EDIT / LIST / DELETE
// =============================================================================

#[actix_web::test]
async fn test_edit_existing_story() {
    let backend = setup::backend();
    let client = connect(&backend).await;

    let created = client
        .create(&StoryInput::new("New Story Spoiler", "New Spoiler"))
        .await
        .unwrap();
    let id = created.story_id().unwrap().to_string();

    let edited = client
        .edit(&id, &StoryInput::new("Edit Title", "Edit Description"))
        .await
        .unwrap();

    assert_eq!(edited.status, StatusCode::OK);
    assert_eq!(edited.msg().unwrap(), messages::EDITED);

    let stories = backend.stories().await;
    assert_eq!(stories[0].title, "Edit Title");
    assert_eq!(stories[0].description, "Edit Description");

    backend.stop().await;
}

#[actix_web::test]
async fn test_edit_nonexistent_story_is_not_found() {
    let backend = setup::backend();
    let client = connect(&backend).await;

    let response = client
        .edit("4312", &StoryInput::new("Edit Title", "Edit Description"))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.msg().unwrap(), messages::NO_SPOILERS);

    backend.stop().await;
}

#[actix_web::test]
async fn test_list_after_create_is_not_empty() {
    let backend = setup::backend();
    let client = connect(&backend).await;

    let empty = client.all().await.unwrap();
    assert_eq!(empty.status, StatusCode::OK);
    assert!(empty.items().unwrap().is_empty());

    client
        .create(&StoryInput::new("Listed", "Shows up in the list"))
        .await
        .unwrap();

    let listed = client.all().await.unwrap();
    let items = listed.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Listed");

    backend.stop().await;
}

/// Deleting a just-created story succeeds once; the same id then behaves as
/// nonexistent
#[actix_web::test]
async fn test_delete_twice_hits_nonexistent_path() {
    let backend = setup::backend();
    let client = connect(&backend).await;

    let created = client
        .create(&StoryInput::new("Doomed", "Deleted twice"))
        .await
        .unwrap();
    let id = created.story_id().unwrap().to_string();

    let first = client.delete(&id).await.unwrap();
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.msg().unwrap(), messages::DELETED);

    let second = client.delete(&id).await.unwrap();
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.msg().unwrap(), messages::UNABLE_TO_DELETE);

    backend.stop().await;
}

#[actix_web::test]
async fn test_delete_nonexistent_story_is_bad_request() {
    let backend = setup::backend();
    let client = connect(&backend).await;

    let response = client.delete("4312").await.unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.msg().unwrap(), messages::UNABLE_TO_DELETE);

    backend.stop().await;
}
