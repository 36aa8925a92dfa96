use pinyin_press::application::{
    ports::{ClockPort, SlugGeneratorPort},
    services::ApplicationServices,
};
use pinyin_press::config::AppConfig;
use pinyin_press::domain::post::{PostReadRepository, PostWriteRepository};
use pinyin_press::infrastructure::{
    database,
    repositories::{PostgresPostReadRepository, PostgresPostWriteRepository},
    slug::TransliteratingSlugGenerator,
    time::SystemClock,
};
use pinyin_press::presentation::http::{routes::build_router_with_origins, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("connected to database and applied migrations");

    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool));

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(TransliteratingSlugGenerator);

    let policy = config.slug_policy();
    tracing::debug!(?policy, "slug policy");

    let services = Arc::new(ApplicationServices::new(
        post_write_repo,
        post_read_repo,
        clock,
        slugger,
        policy,
    ));

    let state = HttpState { services };
    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
