//! API Integration Tests
//!
//! These tests spin up the full router over the in-memory store and
//! drive it over HTTP. No external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use quill_core::TargetKind;
use reqwest::StatusCode;

/// Start a server with one article and one comment owned by AUTHOR_ID
async fn seeded_server() -> (TestServer, i64, i64) {
    let server = TestServer::start().await.expect("Failed to start server");
    let article = unique_id();
    let comment = unique_id();
    server.add_target(TargetKind::Article, article, AUTHOR_ID);
    server.add_target(TargetKind::Comment, comment, AUTHOR_ID);
    (server, article, comment)
}

async fn article_counts(server: &TestServer, article: i64) -> CountsResponse {
    let response = server
        .get(&format!("/api/v1/articles/{article}/reactions"))
        .await
        .expect("Request failed");
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let health: Health = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_health_ready_without_database() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let ready: Readiness = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ready.status, "ready");
    assert_eq!(ready.checks.database, "not_configured");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Toggle Tests
// ============================================================================

#[tokio::test]
async fn test_like_fresh_article() {
    let (server, article, _) = seeded_server().await;
    let token = server.token_for(READER_ID).unwrap();

    let response = server
        .post_auth(&format!("/api/v1/articles/{article}/like"), &token)
        .await
        .unwrap();
    let body: ToggleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.message, "You liked this article");
    assert_eq!(body.likes, 1);
    assert_eq!(body.dislikes, 0);
}

#[tokio::test]
async fn test_like_twice_reverts() {
    let (server, article, _) = seeded_server().await;
    let token = server.token_for(READER_ID).unwrap();
    let path = format!("/api/v1/articles/{article}/like");

    let response = server.post_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_auth(&path, &token).await.unwrap();
    let body: ToggleResponse = assert_json(response, StatusCode::ACCEPTED).await.unwrap();

    assert_eq!(body.message, "You removed your like from this article");
    assert_eq!(body.likes, 0);
    assert_eq!(body.dislikes, 0);
}

#[tokio::test]
async fn test_dislike_after_like_flips() {
    let (server, article, _) = seeded_server().await;
    let token = server.token_for(READER_ID).unwrap();

    let response = server
        .post_auth(&format!("/api/v1/articles/{article}/like"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(&format!("/api/v1/articles/{article}/dislike"), &token)
        .await
        .unwrap();
    let body: ToggleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.message, "You disliked this article");
    assert_eq!(body.likes, 0);
    assert_eq!(body.dislikes, 1);
}

#[tokio::test]
async fn test_dislike_twice_reverts() {
    let (server, article, _) = seeded_server().await;
    let token = server.token_for(READER_ID).unwrap();
    let path = format!("/api/v1/articles/{article}/dislike");

    server.post_auth(&path, &token).await.unwrap();
    let response = server.post_auth(&path, &token).await.unwrap();
    let body: ToggleResponse = assert_json(response, StatusCode::ACCEPTED).await.unwrap();

    assert_eq!(body.message, "You removed your dislike from this article");
    assert_eq!(body.dislikes, 0);
}

#[tokio::test]
async fn test_counts_reflect_multiple_users() {
    let (server, article, _) = seeded_server().await;
    let path = format!("/api/v1/articles/{article}/like");

    for user in 10..13 {
        let token = server.token_for(user).unwrap();
        let response = server.post_auth(&path, &token).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }
    let token = server.token_for(20).unwrap();
    server
        .post_auth(&format!("/api/v1/articles/{article}/dislike"), &token)
        .await
        .unwrap();

    assert_eq!(
        article_counts(&server, article).await,
        CountsResponse { likes: 3, dislikes: 1 }
    );
}

#[tokio::test]
async fn test_concurrent_likes_from_distinct_users() {
    let (server, article, _) = seeded_server().await;
    let path = format!("/api/v1/articles/{article}/like");

    let tokens: Vec<String> = (100..120).map(|u| server.token_for(u).unwrap()).collect();
    let requests = tokens.iter().map(|t| server.post_auth(&path, t));
    for response in futures::future::join_all(requests).await {
        assert_status(response.unwrap(), StatusCode::CREATED).await.unwrap();
    }

    assert_eq!(
        article_counts(&server, article).await,
        CountsResponse { likes: 20, dislikes: 0 }
    );
}

#[tokio::test]
async fn test_article_and_comment_are_independent() {
    let (server, article, comment) = seeded_server().await;
    let token = server.token_for(READER_ID).unwrap();

    let response = server
        .post_auth(&format!("/api/v1/comments/{comment}/like"), &token)
        .await
        .unwrap();
    let body: ToggleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "You liked this comment");

    assert_eq!(
        article_counts(&server, article).await,
        CountsResponse { likes: 0, dislikes: 0 }
    );
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
async fn test_like_missing_article() {
    let (server, _, _) = seeded_server().await;
    let token = server.token_for(READER_ID).unwrap();

    let response = server
        .post_auth(&format!("/api/v1/articles/{}/like", unique_id()), &token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.code, "UNKNOWN_ARTICLE");
    assert_eq!(body.message, "Article requested does not exist");
}

#[tokio::test]
async fn test_dislike_missing_comment() {
    let (server, _, _) = seeded_server().await;
    let token = server.token_for(READER_ID).unwrap();

    let response = server
        .post_auth(&format!("/api/v1/comments/{}/dislike", unique_id()), &token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.message, "Comment requested does not exist");
}

#[tokio::test]
async fn test_counts_for_removed_target() {
    let (server, article, _) = seeded_server().await;
    server.remove_target(TargetKind::Article, article);

    let response = server
        .get(&format!("/api/v1/articles/{article}/reactions"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_removed_target_takes_its_reactions() {
    let (server, article, _) = seeded_server().await;
    let token = server.token_for(READER_ID).unwrap();
    let path = format!("/api/v1/articles/{article}/like");

    let response = server.post_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    assert!(server.remove_target(TargetKind::Article, article));

    let response = server.get("/api/v1/articles/top-liked").await.unwrap();
    let top: Vec<TopTarget> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(top.iter().all(|t| t.target_id != article.to_string()));

    // A target registered again under the same id starts without reactions
    server.add_target(TargetKind::Article, article, AUTHOR_ID);
    let response = server.post_auth(&path, &token).await.unwrap();
    let body: ToggleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "You liked this article");
    assert_eq!(body.likes, 1);
}

#[tokio::test]
async fn test_toggle_requires_auth() {
    let (server, article, _) = seeded_server().await;

    let response = server
        .post(&format!("/api/v1/articles/{article}/like"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(
        article_counts(&server, article).await,
        CountsResponse { likes: 0, dislikes: 0 }
    );
}

#[tokio::test]
async fn test_toggle_rejects_invalid_token() {
    let (server, article, _) = seeded_server().await;

    let response = server
        .post_auth(&format!("/api/v1/articles/{article}/like"), "not-a-jwt")
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_invalid_target_id() {
    let (server, _, _) = seeded_server().await;
    let token = server.token_for(READER_ID).unwrap();

    let response = server
        .post_auth("/api/v1/articles/abc/like", &token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Query Tests
// ============================================================================

#[tokio::test]
async fn test_my_reaction() {
    let (server, article, _) = seeded_server().await;
    let token = server.token_for(READER_ID).unwrap();
    let path = format!("/api/v1/articles/{article}/reactions/@me");

    let response = server.get_auth(&path, &token).await.unwrap();
    let mine: MyReaction = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!mine.reacted);
    assert!(mine.value.is_none());

    server
        .post_auth(&format!("/api/v1/articles/{article}/dislike"), &token)
        .await
        .unwrap();

    let response = server.get_auth(&path, &token).await.unwrap();
    let mine: MyReaction = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(mine.reacted);
    assert_eq!(mine.value.as_deref(), Some("dislike"));
}

#[tokio::test]
async fn test_my_reaction_requires_auth() {
    let (server, article, _) = seeded_server().await;

    let response = server
        .get(&format!("/api/v1/articles/{article}/reactions/@me"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_top_liked_comments() {
    let server = TestServer::start().await.expect("Failed to start server");
    let popular = unique_id();
    let quiet = unique_id();
    let disliked = unique_id();
    for id in [popular, quiet, disliked] {
        server.add_target(TargetKind::Comment, id, AUTHOR_ID);
    }

    for user in 1..=3 {
        let token = server.token_for(user).unwrap();
        server
            .post_auth(&format!("/api/v1/comments/{popular}/like"), &token)
            .await
            .unwrap();
    }
    let token = server.token_for(READER_ID).unwrap();
    server
        .post_auth(&format!("/api/v1/comments/{quiet}/like"), &token)
        .await
        .unwrap();
    server
        .post_auth(&format!("/api/v1/comments/{disliked}/dislike"), &token)
        .await
        .unwrap();

    let response = server.get("/api/v1/comments/top-liked").await.unwrap();
    let top: Vec<TopTarget> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].target_id, popular.to_string());
    assert_eq!(top[0].likes, 3);
    assert_eq!(top[1].target_id, quiet.to_string());
    assert_eq!(top[1].likes, 1);

    let response = server.get("/api/v1/comments/top-liked?limit=1").await.unwrap();
    let top: Vec<TopTarget> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(top.len(), 1);
}

#[tokio::test]
async fn test_top_liked_rejects_bad_limit() {
    let server = TestServer::start().await.expect("Failed to start server");

    for query in ["limit=0", "limit=101", "limit=abc"] {
        let response = server
            .get(&format!("/api/v1/articles/top-liked?{query}"))
            .await
            .unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }
}
