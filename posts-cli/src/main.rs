use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use posts_client::constants::limits::MIN_USER_ID;
use posts_client::validation::{
    sanitize_input, validate_pagination_params, validate_post_data, validate_search_term,
};
use posts_client::{
    ApiError, ClientConfig, HttpClient, ListParams, NewPost, Pagination, Post, PostUpdate,
    PostsApi, PostsStore, describe_error,
};
use tracing::debug;

mod logging;

use logging::{init_logging, log_level_from_env};

#[derive(Debug, Parser)]
#[command(name = "posts-cli", version, about = "CLI клиент для REST API постов")]
struct Cli {
    /// Базовый URL API (по умолчанию POSTS_API_BASE_URL или http://localhost:3001/api).
    /// Если указан только хост, дописывается `/api`.
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Список постов с пагинацией и поиском.
    List {
        #[arg(long)]
        page: Option<String>,
        #[arg(long)]
        limit: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Получение поста по id.
    Get {
        #[arg(long)]
        id: i64,
    },
    /// Создание поста.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        user_id: Option<i64>,
    },
    /// Обновление заголовка и текста поста.
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    /// Удаление поста.
    Delete {
        #[arg(long)]
        id: i64,
    },
    /// Проверка доступности API.
    Health,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging(&log_level_from_env())?;

    let cli = Cli::parse();
    let config = resolve_config(cli.server).context("не удалось прочитать конфигурацию")?;
    debug!(base_url = %config.base_url, "using API");
    let client = HttpClient::new(config).map_err(map_api_error)?;

    match cli.command {
        Command::List {
            page,
            limit,
            search,
        } => {
            let params = validate_pagination_params(page.as_deref(), limit.as_deref());
            let params = ListParams::page(params.page, params.limit)
                .with_search(validate_search_term(search.as_deref()));

            let store = PostsStore::new(client);
            store.fetch_posts(params).await.map_err(map_api_error)?;
            let snapshot = store.snapshot();
            print_list(&snapshot.posts, snapshot.pagination.as_ref());
        }
        Command::Get { id } => {
            let post = client
                .get_by_id(id)
                .await
                .and_then(|resp| resp.into_data())
                .map_err(map_api_error)?;
            print_post("Пост", &post);
        }
        Command::Create {
            title,
            body,
            user_id,
        } => {
            let validation = validate_post_data(Some(&title), Some(&body), user_id);
            if !validation.is_valid {
                bail!("некорректные данные: {}", validation.errors.join("; "));
            }

            let payload = NewPost {
                title: sanitize_input(Some(&title)),
                body: sanitize_input(Some(&body)),
                user_id: user_id.unwrap_or_default(),
            };
            let post = client
                .create(&payload)
                .await
                .and_then(|resp| resp.into_data())
                .map_err(map_api_error)?;
            print_post("Пост создан", &post);
        }
        Command::Update { id, title, body } => {
            // user_id при обновлении не меняется, проверяются только тексты.
            let validation = validate_post_data(Some(&title), Some(&body), Some(MIN_USER_ID));
            if !validation.is_valid {
                bail!("некорректные данные: {}", validation.errors.join("; "));
            }

            let update = PostUpdate {
                title: sanitize_input(Some(&title)),
                body: sanitize_input(Some(&body)),
            };
            let post = client
                .update(id, &update)
                .await
                .and_then(|resp| resp.into_data())
                .map_err(map_api_error)?;
            print_post("Пост обновлён", &post);
        }
        Command::Delete { id } => {
            client
                .delete(id)
                .await
                .and_then(|resp| resp.into_result())
                .map_err(map_api_error)?;
            println!("Пост удалён: id={id}");
        }
        Command::Health => {
            let health = client
                .check_health()
                .await
                .and_then(|resp| resp.into_result())
                .map_err(map_api_error)?;
            let details = health
                .map(|value| value.to_string())
                .unwrap_or_else(|| "ok".to_string());
            println!("API доступен: {details}");
        }
    }

    Ok(())
}

fn resolve_config(server: Option<String>) -> Result<ClientConfig> {
    let config = ClientConfig::from_env()?;
    Ok(match server {
        Some(server) => ClientConfig {
            base_url: normalize_server(&server),
            ..config
        },
        None => config,
    })
}

/// Префикс API, если в `--server` указан только хост.
const API_PATH: &str = "/api";

/// Приводит `--server` к базовому URL: добавляет схему `http://`, убирает
/// завершающий `/` и дописывает `/api`, если путь не указан.
fn normalize_server(server: &str) -> String {
    let server = server.trim().trim_end_matches('/');
    let (scheme, rest) = match server.split_once("://") {
        Some((scheme, rest)) => (scheme, rest),
        None => ("http", server),
    };

    if rest.contains('/') {
        format!("{scheme}://{rest}")
    } else {
        format!("{scheme}://{rest}{API_PATH}")
    }
}

fn map_api_error(err: ApiError) -> anyhow::Error {
    let report = describe_error(&err);
    if report.is_network_error {
        return anyhow::anyhow!("{} ({})", report.message, err.message());
    }
    anyhow::anyhow!("{} (status {})", report.message, err.status())
}

fn print_post(title: &str, post: &Post) {
    println!("{title}");
    println!("id: {}", post.id);
    println!("title: {}", post.title);
    println!("body: {}", post.body);
    println!("user_id: {}", post.user_id);
    if let Some(created_at) = &post.created_at {
        println!("created_at: {created_at}");
    }
    if let Some(updated_at) = &post.updated_at {
        println!("updated_at: {updated_at}");
    }
}

fn print_list(posts: &[Post], pagination: Option<&Pagination>) {
    match pagination {
        Some(p) => println!(
            "Постов: {} (страница {}/{}, всего {})",
            posts.len(),
            p.current_page,
            p.total_pages,
            p.total_items
        ),
        None => println!("Постов: {}", posts.len()),
    }

    for post in posts {
        println!("- [{}] {} (user_id={})", post.id, post.title, post.user_id);
    }
}
