//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1. The public
//! surface is read-only; every write goes through the /api/v1/admin tree.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{admin, categories, health, posts, profiles, summary, threads};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately so they sit outside the API tree)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .nest("/admin", admin_routes())
}

/// Public read-only forum routes
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(summary::get_summary))
        // Categories
        .route("/categories", get(categories::list_categories))
        .route("/categories/:category_id", get(categories::get_category))
        .route(
            "/categories/:category_id/threads",
            get(categories::list_category_threads),
        )
        // Threads
        .route("/threads", get(threads::list_threads))
        .route("/threads/:thread_id", get(threads::get_thread))
        .route("/threads/:thread_id/posts", get(threads::list_thread_posts))
        // Posts
        .route("/posts/:post_id", get(posts::get_post))
        // Profiles
        .route("/profiles/:user_id", get(profiles::get_profile))
}

/// Administrative management routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Schema declarations
        .route("/schema", get(admin::get_schema))
        .route("/schema/:entity", get(admin::get_schema_entity))
        // Categories
        .route("/categories", get(admin::list_categories))
        .route("/categories", post(admin::create_category))
        .route("/categories/:category_id", get(admin::get_category))
        .route("/categories/:category_id", patch(admin::update_category))
        .route("/categories/:category_id", delete(admin::delete_category))
        // Threads
        .route("/threads", get(admin::list_threads))
        .route("/threads", post(admin::create_thread))
        .route("/threads/:thread_id", get(admin::get_thread))
        .route("/threads/:thread_id", patch(admin::update_thread))
        .route("/threads/:thread_id", delete(admin::delete_thread))
        // Posts
        .route("/posts", get(admin::list_posts))
        .route("/threads/:thread_id/posts", post(admin::create_post))
        .route("/posts/:post_id", patch(admin::update_post))
        .route("/posts/:post_id", delete(admin::delete_post))
        // Profiles
        .route("/profiles", get(admin::list_profiles))
        .route("/profiles/:user_id", put(admin::upsert_profile))
        .route("/profiles/:user_id", delete(admin::delete_profile))
        // Users
        .route("/users", post(admin::create_user))
        .route("/users/:user_id", get(admin::get_user))
        .route("/users/:user_id", delete(admin::delete_user))
}
