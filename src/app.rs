/*
 * Responsibility
 * - Config 読み込み → backend クライアント生成 → Router 組み立て
 * - Middleware の適用 (HTTP / CORS / security headers)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    backend::{BlogBackend, HttpBlogBackend, InMemoryBackend},
    config::{BackendTarget, Config},
    middleware,
    state::AppState,
};

fn init_tracing() {
    // RUST_LOG=info,wmi_blog=debug,tower_http=debug cargo run
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
        tracing::error!(?info, "panic");

        // Development: crash loudly. Production: default hook, keep serving.
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

    let backend = build_backend(&config)?;
    tracing::info!(
        "starting blog front in {:?} mode on {} (backend: {})",
        config.app_env,
        config.addr,
        backend.backend_name()
    );

    let state = AppState::new(backend, config.related_pool_limit);
    let app = build_app(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_backend(config: &Config) -> Result<Arc<dyn BlogBackend>> {
    let backend: Arc<dyn BlogBackend> = match &config.backend {
        BackendTarget::Http(url) => Arc::new(
            HttpBlogBackend::new(url, config.backend_timeout)
                .context("building blog backend client")?,
        ),
        BackendTarget::Memory => {
            tracing::warn!("using in-memory blog backend; data is lost on restart");
            Arc::new(InMemoryBackend::new())
        }
    };
    Ok(backend)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api::v1::routes())
        .with_state(state)
}

pub fn build_app(state: AppState, config: &Config) -> Router {
    let router = build_router(state);
    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(
        router,
        middleware::http::request_timeout(config.backend_timeout),
    )
}
