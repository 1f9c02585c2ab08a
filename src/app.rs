/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → 依存生成 (PgPool, SessionStore, AuthStrategy) → Router 組み立て
 * - Middleware の適用 (認証判定 / request id / trace など)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::Config,
    middleware,
    repos::user_repo::PgUserResolver,
    services::auth::{ExcludedPaths, SessionStore, UserResolver, build_auth_strategy},
    state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,hello_session_auth=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr can be hidden depending on how the process is launched
        tracing::error!(?info, "panic");

        // development: crash the whole process so we notice immediately
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        auth_type = ?config.auth_type,
        session_cookie = %config.session_cookie_name,
        session_duration = config.session_duration,
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let db = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    let users: Arc<dyn UserResolver> = Arc::new(PgUserResolver::new(db));
    // one store per process, shared by every request through the strategy
    let store = Arc::new(SessionStore::new());
    let auth = build_auth_strategy(config, store, Arc::clone(&users));

    Ok(AppState::new(
        auth,
        users,
        ExcludedPaths::new(&config.excluded_paths),
        config.app_env,
    ))
}

fn build_router(state: AppState) -> Router {
    let router = Router::new().nest("/api/v1", api::v1::routes());
    let router = middleware::auth::session::apply(router, state.clone()).with_state(state);

    middleware::http::apply(router)
}
