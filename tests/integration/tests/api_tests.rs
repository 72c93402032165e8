//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use std::sync::Arc;

// ============================================================================
// Setup helpers
// ============================================================================

async fn create_category(server: &TestServer) -> CategoryResponse {
    let request = CreateCategoryRequest::unique();
    let response = server
        .post("/api/v1/admin/categories", &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_thread(server: &TestServer, category_id: i64) -> ThreadResponse {
    let request = CreateThreadRequest::in_category(category_id);
    let response = server.post("/api/v1/admin/threads", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_user(server: &TestServer) -> UserResponse {
    let request = CreateUserRequest::unique();
    let response = server.post("/api/v1/admin/users", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_post(server: &TestServer, thread_id: i64, content: &str) -> PostResponse {
    let request = CreatePostRequest::simple(content);
    let response = server
        .post(&format!("/api/v1/admin/threads/{thread_id}/posts"), &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Summary Tests
// ============================================================================

#[tokio::test]
async fn test_summary() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    create_thread(&server, category.id).await;

    let response = server.get("/api/v1/summary").await.unwrap();
    let summary: ForumSummaryResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(summary.category_count >= 1);
    assert!(summary.thread_count >= 1);
    assert!(!summary.recent_threads.is_empty());
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_create_category() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateCategoryRequest::unique();

    let response = server
        .post("/api/v1/admin/categories", &request)
        .await
        .unwrap();
    let category: CategoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(category.name, request.name);
    assert_eq!(category.description, request.description);
}

#[tokio::test]
async fn test_duplicate_category_name_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateCategoryRequest::unique();
    server
        .post("/api/v1/admin/categories", &request)
        .await
        .unwrap();

    // Same name in a different case must still collide
    let duplicate = CreateCategoryRequest {
        name: request.name.to_uppercase(),
        description: "different description".to_string(),
    };
    let response = server
        .post("/api/v1/admin/categories", &duplicate)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.code, "DUPLICATE_CATEGORY_NAME");
}

#[tokio::test]
async fn test_category_thread_count_is_fresh() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;

    let response = server
        .get(&format!("/api/v1/categories/{}", category.id))
        .await
        .unwrap();
    let before: CategoryDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(before.thread_count, 0);

    create_thread(&server, category.id).await;

    let response = server
        .get(&format!("/api/v1/categories/{}", category.id))
        .await
        .unwrap();
    let after: CategoryDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(after.thread_count, 1);
}

#[tokio::test]
async fn test_update_category() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;

    let update = UpdateCategoryRequest {
        description: Some("updated description".to_string()),
        ..Default::default()
    };
    let response = server
        .patch(&format!("/api/v1/admin/categories/{}", category.id), &update)
        .await
        .unwrap();
    let updated: CategoryResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.name, category.name);
    assert_eq!(updated.description, "updated description");
}

#[tokio::test]
async fn test_category_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/categories/999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_category_cascades() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let thread = create_thread(&server, category.id).await;
    let post = create_post(&server, thread.id, "soon to be gone").await;

    let response = server
        .delete(&format!("/api/v1/admin/categories/{}", category.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/admin/threads/{}", thread.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_category_list_pagination() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    create_category(&server).await;

    let response = server.get("/api/v1/categories?per_page=5").await.unwrap();
    let page: Paginated<CategoryDetailResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.per_page, 5);
    assert!(page.pagination.total >= 1);
    assert!(page.data.len() <= 5);
}

// ============================================================================
// Thread Tests
// ============================================================================

#[tokio::test]
async fn test_create_thread_with_author() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let user = create_user(&server).await;

    let request = CreateThreadRequest::in_category(category.id);
    let response = server
        .post_as("/api/v1/admin/threads", user.id, &request)
        .await
        .unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(thread.author_id, Some(user.id));
    assert_eq!(thread.category_id, category.id);
    assert_eq!(thread.views, 0);
    assert!(!thread.is_pinned);
    assert!(!thread.is_locked);
}

#[tokio::test]
async fn test_create_thread_unknown_category() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateThreadRequest::in_category(999_999_999);

    let response = server.post("/api/v1/admin/threads", &request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.code, "REFERENTIAL_INTEGRITY");
}

#[tokio::test]
async fn test_thread_detail_counts_concurrent_views() {
    if !check_test_env() {
        return;
    }

    let server = Arc::new(TestServer::start().await.expect("Failed to start server"));
    let category = create_category(&server).await;
    let thread = create_thread(&server, category.id).await;

    // Three visitors hit the detail page at the same time
    let mut handles = Vec::new();
    for _ in 0..3 {
        let server = Arc::clone(&server);
        let path = format!("/api/v1/threads/{}", thread.id);
        handles.push(tokio::spawn(async move {
            let response = server.get(&path).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Every visit must be counted; the admin read does not add one
    let response = server
        .get(&format!("/api/v1/admin/threads/{}", thread.id))
        .await
        .unwrap();
    let detail: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.thread.views, 3);

    let response = server
        .get(&format!("/api/v1/admin/threads/{}", thread.id))
        .await
        .unwrap();
    let again: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(again.thread.views, 3);
}

#[tokio::test]
async fn test_view_count_leaves_updated_date_alone() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let thread = create_thread(&server, category.id).await;

    let response = server
        .get(&format!("/api/v1/threads/{}", thread.id))
        .await
        .unwrap();
    let detail: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.thread.views, 1);
    assert_eq!(detail.thread.updated_date, thread.updated_date);
}

#[tokio::test]
async fn test_thread_view_missing_thread() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/threads/999999999").await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_THREAD");
}

#[tokio::test]
async fn test_update_thread_moderation_flags() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let thread = create_thread(&server, category.id).await;

    let update = UpdateThreadRequest {
        is_pinned: Some(true),
        is_locked: Some(true),
        ..Default::default()
    };
    let response = server
        .patch(&format!("/api/v1/admin/threads/{}", thread.id), &update)
        .await
        .unwrap();
    let updated: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(updated.is_pinned);
    assert!(updated.is_locked);
}

#[tokio::test]
async fn test_pinned_threads_listed_first() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let _plain = create_thread(&server, category.id).await;
    let pinned = create_thread(&server, category.id).await;

    let update = UpdateThreadRequest {
        is_pinned: Some(true),
        ..Default::default()
    };
    server
        .patch(&format!("/api/v1/admin/threads/{}", pinned.id), &update)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/categories/{}/threads", category.id))
        .await
        .unwrap();
    let page: Paginated<ThreadResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].id, pinned.id);
    assert!(page.data[0].is_pinned);
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_posts_listed_in_chronological_order() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let thread = create_thread(&server, category.id).await;

    let first = create_post(&server, thread.id, "first reply").await;
    let second = create_post(&server, thread.id, "second reply").await;

    let response = server
        .get(&format!("/api/v1/threads/{}/posts", thread.id))
        .await
        .unwrap();
    let page: Paginated<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].id, first.id);
    assert_eq!(page.data[1].id, second.id);

    // Thread detail surfaces the newest post
    let response = server
        .get(&format!("/api/v1/admin/threads/{}", thread.id))
        .await
        .unwrap();
    let detail: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.post_count, 2);
    assert_eq!(detail.last_post.unwrap().id, second.id);
}

#[tokio::test]
async fn test_locked_thread_rejects_posts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let thread = create_thread(&server, category.id).await;

    let update = UpdateThreadRequest {
        is_locked: Some(true),
        ..Default::default()
    };
    server
        .patch(&format!("/api/v1/admin/threads/{}", thread.id), &update)
        .await
        .unwrap();

    let request = CreatePostRequest::simple("too late");
    let response = server
        .post(&format!("/api/v1/admin/threads/{}/posts", thread.id), &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_edit_post_sets_edited_flag() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let thread = create_thread(&server, category.id).await;
    let post = create_post(&server, thread.id, "original wording").await;
    assert!(!post.is_edited);

    let update = UpdatePostRequest {
        content: "better wording".to_string(),
    };
    let response = server
        .patch(&format!("/api/v1/admin/posts/{}", post.id), &update)
        .await
        .unwrap();
    let edited: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(edited.content, "better wording");
    assert!(edited.is_edited);
}

#[tokio::test]
async fn test_create_post_unknown_thread() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreatePostRequest::simple("shouting into the void");

    let response = server
        .post("/api/v1/admin/threads/999999999/posts", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// User and Profile Tests
// ============================================================================

#[tokio::test]
async fn test_user_delete_anonymizes_content() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let user = create_user(&server).await;

    let request = CreateThreadRequest::in_category(category.id);
    let response = server
        .post_as("/api/v1/admin/threads", user.id, &request)
        .await
        .unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(thread.author_id, Some(user.id));

    let response = server
        .delete(&format!("/api/v1/admin/users/{}", user.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The thread survives without an author
    let response = server
        .get(&format!("/api/v1/admin/threads/{}", thread.id))
        .await
        .unwrap();
    let detail: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.thread.author_id, None);
}

#[tokio::test]
async fn test_profile_upsert_and_detail() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let user = create_user(&server).await;

    let request = UpsertProfileRequest {
        bio: Some("forum regular".to_string()),
        location: Some("Seoul".to_string()),
        ..Default::default()
    };
    let response = server
        .put(&format!("/api/v1/admin/profiles/{}", user.id), &request)
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.bio.as_deref(), Some("forum regular"));

    // Participation counts come from live data
    let thread_req = CreateThreadRequest::in_category(category.id);
    let response = server
        .post_as("/api/v1/admin/threads", user.id, &thread_req)
        .await
        .unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let post_req = CreatePostRequest::simple("checking in");
    server
        .post_as(
            &format!("/api/v1/admin/threads/{}/posts", thread.id),
            user.id,
            &post_req,
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/profiles/{}", user.id))
        .await
        .unwrap();
    let detail: ProfileDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.username, user.username);
    assert_eq!(detail.thread_count, 1);
    assert_eq!(detail.post_count, 1);
}

#[tokio::test]
async fn test_profile_unknown_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/profiles/999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_invalid_identity_header() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let request = CreateThreadRequest::in_category(category.id);

    let url = format!("{}/api/v1/admin/threads", server.base_url());
    let response = server
        .client
        .post(&url)
        .header("x-forum-user-id", "not-a-number")
        .json(&request)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.code, "INVALID_IDENTITY_HEADER");
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_empty_category_name_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateCategoryRequest {
        name: String::new(),
        description: "no name".to_string(),
    };

    let response = server
        .post("/api/v1/admin/categories", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Admin Schema Tests
// ============================================================================

#[tokio::test]
async fn test_admin_schema_declarations() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/admin/schema").await.unwrap();
    let entities: Vec<AdminEntityResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let names: Vec<_> = entities.iter().map(|e| e.entity.as_str()).collect();
    assert_eq!(names, vec!["category", "thread", "post", "user_profile"]);

    let response = server.get("/api/v1/admin/schema/thread").await.unwrap();
    let thread: AdminEntityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(thread.search_fields.contains(&"title".to_string()));
    assert!(thread.filter_fields.contains(&"is_pinned".to_string()));

    let response = server.get("/api/v1/admin/schema/guild").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Admin Search Tests
// ============================================================================

#[tokio::test]
async fn test_admin_thread_search() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let thread = create_thread(&server, category.id).await;
    create_thread(&server, category.id).await;

    // Title search narrows to the one thread
    let response = server
        .get(&format!(
            "/api/v1/admin/threads?q={}&category_id={}",
            thread.title.replace(' ', "%20"),
            category.id
        ))
        .await
        .unwrap();
    let page: Paginated<ThreadResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, thread.id);

    // Category filter alone returns both
    let response = server
        .get(&format!("/api/v1/admin/threads?category_id={}", category.id))
        .await
        .unwrap();
    let page: Paginated<ThreadResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 2);
}

#[tokio::test]
async fn test_admin_post_search_by_author_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = create_category(&server).await;
    let thread = create_thread(&server, category.id).await;
    let user = create_user(&server).await;

    let request = CreatePostRequest::simple("search me by author");
    server
        .post_as(
            &format!("/api/v1/admin/threads/{}/posts", thread.id),
            user.id,
            &request,
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/admin/posts?q={}", user.username))
        .await
        .unwrap();
    let page: Paginated<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].author_id, Some(user.id));
}

// ============================================================================
// End-to-End Scenario
// ============================================================================

#[tokio::test]
async fn test_forum_scenario() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // A category, a thread, a reply
    let category = create_category(&server).await;
    let user = create_user(&server).await;

    let thread_req = CreateThreadRequest {
        title: "Hello".to_string(),
        category_id: category.id,
    };
    let response = server
        .post_as("/api/v1/admin/threads", user.id, &thread_req)
        .await
        .unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let post_req = CreatePostRequest::simple("hi");
    let response = server
        .post_as(
            &format!("/api/v1/admin/threads/{}/posts", thread.id),
            user.id,
            &post_req,
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The category counts one thread
    let response = server
        .get(&format!("/api/v1/categories/{}", category.id))
        .await
        .unwrap();
    let detail: CategoryDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.thread_count, 1);

    // The thread counts one post and surfaces it as the newest
    let response = server
        .get(&format!("/api/v1/threads/{}", thread.id))
        .await
        .unwrap();
    let detail: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.thread.title, "Hello");
    assert_eq!(detail.post_count, 1);
    let last = detail.last_post.unwrap();
    assert_eq!(last.id, post.id);
    assert_eq!(last.content, "hi");
}
