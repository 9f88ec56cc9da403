mod support;

use std::time::Duration;

use posts_client::{ApiError, ClientConfig, HttpClient, ListParams, NewPost, PostUpdate, PostsApi};

fn client(base_url: &str) -> HttpClient {
    HttpClient::new(ClientConfig::new(base_url)).expect("client must build")
}

fn new_post(title: &str, body: &str) -> NewPost {
    NewPost {
        title: title.to_string(),
        body: body.to_string(),
        user_id: 1,
    }
}

#[tokio::test]
async fn crud_lifecycle_over_http() {
    let base_url = support::spawn(support::app()).await;
    let client = client(&base_url);

    let health = client.check_health().await.expect("health must succeed");
    assert!(health.success);

    let created = client
        .create(&new_post("First", "Hello"))
        .await
        .expect("create must succeed")
        .into_data()
        .expect("created post in envelope");
    assert!(created.id > 0);
    assert_eq!(created.title, "First");

    let fetched = client
        .get_by_id(created.id)
        .await
        .expect("get must succeed")
        .into_data()
        .expect("post in envelope");
    assert_eq!(fetched, created);

    let updated = client
        .update(
            created.id,
            &PostUpdate {
                title: "First (edited)".to_string(),
                body: "Hello again".to_string(),
            },
        )
        .await
        .expect("update must succeed")
        .into_data()
        .expect("updated post in envelope");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "First (edited)");

    let deleted = client.delete(created.id).await.expect("delete must succeed");
    assert!(deleted.success);

    let err = client
        .get_by_id(created.id)
        .await
        .expect_err("deleted post must be gone");
    assert_eq!(err.status(), 404);
    assert_eq!(err.message(), "Post not found");
}

#[tokio::test]
async fn get_all_passes_pagination_and_search() {
    let base_url = support::spawn(support::app()).await;
    let client = client(&base_url);

    for i in 1..=7 {
        client
            .create(&new_post(&format!("post {i}"), "text"))
            .await
            .expect("create must succeed");
    }
    client
        .create(&new_post("Rust tips", "ownership"))
        .await
        .expect("create must succeed");

    let page = client
        .get_all(&ListParams::page(2, 3))
        .await
        .expect("list must succeed")
        .into_data()
        .expect("page in envelope");
    assert_eq!(page.posts.len(), 3);
    assert_eq!(page.pagination.current_page, 2);
    assert_eq!(page.pagination.total_items, 8);
    assert_eq!(page.pagination.total_pages, 3);
    assert!(page.pagination.has_next_page);
    assert!(page.pagination.has_prev_page);

    let found = client
        .get_all(&ListParams::page(1, 6).with_search("rust"))
        .await
        .expect("search must succeed")
        .into_data()
        .expect("page in envelope");
    assert_eq!(found.posts.len(), 1);
    assert_eq!(found.posts[0].title, "Rust tips");

    let defaults = client
        .get_all(&ListParams::default())
        .await
        .expect("list without params must succeed")
        .into_data()
        .expect("page in envelope");
    assert_eq!(defaults.posts.len(), 6);
}

#[tokio::test]
async fn http_404_surfaces_server_message_and_status() {
    let base_url = support::spawn(support::not_found_app()).await;
    let err = client(&base_url)
        .get_all(&ListParams::default())
        .await
        .expect_err("404 must be an error");

    assert_eq!(err.status(), 404);
    assert_eq!(err.message(), "not found");
    assert!(matches!(err, ApiError::Http { .. }));
    assert_eq!(
        err.response().and_then(|body| body.get("success")),
        Some(&serde_json::Value::Bool(false))
    );
}

#[tokio::test]
async fn server_side_validation_errors_keep_status() {
    let base_url = support::spawn(support::app()).await;
    let err = client(&base_url)
        .create(&new_post("   ", "body"))
        .await
        .expect_err("server must reject blank title");

    assert_eq!(err.status(), 400);
    assert_eq!(err.message(), "Title, body, and user_id are required");
}

#[tokio::test]
async fn connection_failure_is_network_error() {
    let base_url = support::unreachable_base_url().await;
    let err = client(&base_url)
        .get_all(&ListParams::default())
        .await
        .expect_err("nobody listens there");

    assert!(err.is_network_error());
    assert_eq!(err.status(), 0);
    assert!(err.response().is_none());
}

#[tokio::test]
async fn slow_response_times_out_as_network_error() {
    let base_url = support::spawn(support::slow_app(Duration::from_secs(5))).await;
    let client = HttpClient::new(
        ClientConfig::new(base_url).with_timeout(Duration::from_millis(100)),
    )
    .expect("client must build");

    let err = client
        .check_health()
        .await
        .expect_err("request must time out");

    assert!(err.is_network_error());
    assert_eq!(err.status(), 0);
    assert!(err.message().starts_with("request timed out"));
}

#[tokio::test]
async fn preflight_checks_do_not_hit_the_network() {
    // Сервер недоступен: если бы запрос ушёл, получили бы статус 0.
    let base_url = support::unreachable_base_url().await;
    let client = client(&base_url);

    let err = client.get_by_id(0).await.expect_err("must fail");
    assert_eq!(err.status(), 400);

    let err = client
        .update(
            5,
            &PostUpdate {
                title: "t".to_string(),
                body: String::new(),
            },
        )
        .await
        .expect_err("must fail");
    assert_eq!(err.status(), 400);
}
