//! In-memory REST backend for integration tests.
//!
//! Speaks the same `{success, data, error}` envelope as the real API and
//! listens on a random local port.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Default)]
struct Db {
    next_id: i64,
    posts: Vec<Value>,
}

type Shared = Arc<RwLock<Db>>;
type Reply = (StatusCode, Json<Value>);

#[derive(Debug, Deserialize)]
struct ListQuery {
    page: Option<u32>,
    limit: Option<u32>,
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateBody {
    title: Option<String>,
    body: Option<String>,
    user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct UpdateBody {
    title: Option<String>,
    body: Option<String>,
}

fn ok(status: StatusCode, data: Value) -> Reply {
    (status, Json(json!({"success": true, "data": data, "error": null})))
}

fn fail(status: StatusCode, error: &str) -> Reply {
    (status, Json(json!({"success": false, "data": null, "error": error})))
}

pub fn app() -> Router {
    let db: Shared = Arc::default();
    Router::new()
        .route("/api/health", get(health))
        .route("/api/posts", get(list_posts).post(create_post))
        .route(
            "/api/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .with_state(db)
}

/// Backend whose list endpoint always answers 404.
pub fn not_found_app() -> Router {
    Router::new().route(
        "/api/posts",
        get(|| async { fail(StatusCode::NOT_FOUND, "not found") }),
    )
}

/// Backend whose health endpoint answers only after `delay`.
pub fn slow_app(delay: Duration) -> Router {
    Router::new().route(
        "/api/health",
        get(move || async move {
            tokio::time::sleep(delay).await;
            ok(StatusCode::OK, json!({"status": "ok"}))
        }),
    )
}

/// Starts `router` on a random port and returns the API base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{addr}/api")
}

/// Base URL of a port nobody listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}/api")
}

async fn health() -> Reply {
    ok(StatusCode::OK, json!({"status": "ok"}))
}

async fn list_posts(State(db): State<Shared>, Query(query): Query<ListQuery>) -> Reply {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(6).clamp(1, 100);
    let search = query.search.unwrap_or_default().to_lowercase();

    let db = db.read().await;
    let matching: Vec<&Value> = db
        .posts
        .iter()
        .rev()
        .filter(|post| {
            search.is_empty()
                || ["title", "body"].iter().any(|field| {
                    post[*field]
                        .as_str()
                        .is_some_and(|text| text.to_lowercase().contains(&search))
                })
        })
        .collect();

    let total_items = matching.len();
    let total_pages = total_items.div_ceil(limit as usize);
    let posts: Vec<Value> = matching
        .into_iter()
        .skip((page as usize - 1) * limit as usize)
        .take(limit as usize)
        .cloned()
        .collect();

    ok(
        StatusCode::OK,
        json!({
            "posts": posts,
            "pagination": {
                "currentPage": page,
                "totalPages": total_pages,
                "totalItems": total_items,
                "hasNextPage": (page as usize) < total_pages,
                "hasPrevPage": page > 1,
            }
        }),
    )
}

async fn create_post(State(db): State<Shared>, Json(input): Json<CreateBody>) -> Reply {
    let (Some(title), Some(body), Some(user_id)) = (input.title, input.body, input.user_id) else {
        return fail(StatusCode::BAD_REQUEST, "Title, body, and user_id are required");
    };
    if title.trim().is_empty() || body.trim().is_empty() || user_id < 1 {
        return fail(StatusCode::BAD_REQUEST, "Title, body, and user_id are required");
    }

    let mut db = db.write().await;
    db.next_id += 1;
    let post = json!({
        "id": db.next_id,
        "title": title.trim(),
        "body": body.trim(),
        "user_id": user_id,
        "created_at": "2026-01-01T00:00:00Z",
    });
    db.posts.push(post.clone());
    ok(StatusCode::CREATED, post)
}

async fn get_post(State(db): State<Shared>, Path(id): Path<i64>) -> Reply {
    let db = db.read().await;
    match db.posts.iter().find(|post| post["id"] == id) {
        Some(post) => ok(StatusCode::OK, post.clone()),
        None => fail(StatusCode::NOT_FOUND, "Post not found"),
    }
}

async fn update_post(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateBody>,
) -> Reply {
    let (Some(title), Some(body)) = (input.title, input.body) else {
        return fail(StatusCode::BAD_REQUEST, "Title and body are required");
    };

    let mut db = db.write().await;
    let Some(post) = db.posts.iter_mut().find(|post| post["id"] == id) else {
        return fail(StatusCode::NOT_FOUND, "Post not found");
    };
    post["title"] = json!(title);
    post["body"] = json!(body);
    ok(StatusCode::OK, post.clone())
}

async fn delete_post(State(db): State<Shared>, Path(id): Path<i64>) -> Reply {
    let mut db = db.write().await;
    let before = db.posts.len();
    db.posts.retain(|post| post["id"] != id);
    if db.posts.len() == before {
        return fail(StatusCode::NOT_FOUND, "Post not found");
    }
    ok(StatusCode::OK, json!({"id": id}))
}
