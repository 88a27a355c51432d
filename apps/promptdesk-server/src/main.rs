use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use promptdesk_api::{build_router, AppState};
use promptdesk_infrastructure::{
    create_bootstrap_pool, create_pool, run_migrations, seed_defaults, PgHealthRepository,
    PgIdentityRepository, PgPromptRepository, PgTenantRepository,
};
use promptdesk_security::TokenCodec;
use promptdesk_shared::config::AppConfig;
use promptdesk_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env is read inside)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes file output on drop
    let _log_guard = init_telemetry(&config.logging);

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Migrations and seed data run without the per-statement deadline
    if config.database.run_migrations || config.seed.enabled {
        let bootstrap = create_bootstrap_pool(&config.database)
            .await
            .context("failed to connect to database for bootstrap")?;

        if config.database.run_migrations {
            run_migrations(&bootstrap).await?;
        }

        if config.seed.enabled {
            let identities = Arc::new(PgIdentityRepository::new(bootstrap.clone()));
            let tenants = Arc::new(PgTenantRepository::new(bootstrap.clone()));
            let report = seed_defaults(identities, tenants, &config.seed)
                .await
                .context("failed to seed default data")?;
            info!(
                "Seed finished: tenant_created={}, identities_created={}",
                report.tenant_created, report.identities_created
            );
        }

        bootstrap.close().await;
    }

    // Connect to Database
    let deadline = config.retrieval.deadline();
    let pool = create_pool(&config.database, deadline)
        .await
        .context("failed to connect to database")?;
    info!("Database connection established.");

    let identities = Arc::new(PgIdentityRepository::new(pool.clone()));
    let tenants = Arc::new(PgTenantRepository::new(pool.clone()));
    let prompts = Arc::new(PgPromptRepository::new(pool.clone()));
    let health = Arc::new(PgHealthRepository::new(pool));

    let codec = Arc::new(TokenCodec::new(
        &config.jwt.secret,
        config.jwt.access_token_ttl(),
    ));

    let state = AppState::new(identities, tenants, prompts, health, codec, deadline);
    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
