use dotenvy::dotenv;
use axum::{
    routing::{any, get, post, MethodRouter},
    Router,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod mail;
mod handlers {
    pub mod contact;
    pub mod site;
    pub mod work;
}

use config::Config;
use error::ApiError;
use handlers::{contact, site, work};
use mail::{ContactDelivery, DeliveryError};

pub struct AppState {
    config: Config,
    contact_limiter: DefaultKeyedRateLimiter<IpAddr>,
    delivery: ContactDelivery,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, DeliveryError> {
        let delivery = ContactDelivery::from_settings(config.mail.as_ref())?;
        let contact_limiter = RateLimiter::keyed(Quota::per_minute(config.contact_rate_per_minute));
        Ok(Self {
            config,
            contact_limiter,
            delivery,
        })
    }

    /// Drops limiter entries for clients whose quota has fully replenished.
    pub fn prune_contact_limiter(&self) {
        self.contact_limiter.retain_recent();
        self.contact_limiter.shrink_to_fit();
    }
}

const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

fn spawn_limiter_pruning(state: Arc<AppState>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            state.prune_contact_limiter();
            tracing::debug!("Contact rate limiter tracks {} clients", state.contact_limiter.len());
        }
    });
}

async fn health_check() -> &'static str {
    "OK"
}

async fn api_not_found() -> ApiError {
    ApiError::NotFound("Endpoint")
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = match &config.frontend_url {
        Some(url) => AllowOrigin::exact(url.clone()),
        None => AllowOrigin::from(Any),
    };
    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_origin(origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE])
}

pub fn app(state: Arc<AppState>) -> Router {
    let index: MethodRouter = get(site::spa_index).with_state(state.clone());
    let frontend = ServeDir::new(&state.config.frontend_dist).fallback(index);

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/work", get(work::list_work))
        .route("/api/work/slugs", get(work::list_slugs))
        .route("/api/work/{slug}", get(work::get_case_study))
        .route("/api/{*rest}", any(api_not_found))
        .fallback_service(frontend)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(&state.config))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let bind_addr = config.bind_addr;
    if config.mail.is_none() {
        tracing::warn!("CONTACT_INBOX not set, contact submissions will only be logged");
    }
    let state = Arc::new(AppState::new(config)?);
    spawn_limiter_pruning(state.clone());

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Listening on http://{}", bind_addr);
    axum::serve(listener, app(state).into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
