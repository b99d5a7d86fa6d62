//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::security::{AuthenticationTokenManager, PasswordHash};
use crate::application::UseCases;
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::postgres_repositories;
use crate::infrastructure::security::{Argon2PasswordHash, JwtTokenManager};
use crate::presentation::http::{create_router, handlers::health};
use crate::presentation::middleware::{cors, logging};
use crate::shared::id_generator::RandomIdGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub use_cases: Arc<UseCases>,
    pub token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl AppState {
    /// Wire Postgres repositories and the security adapters into use cases.
    pub fn new(db: PgPool, settings: &Settings) -> Self {
        let repositories = postgres_repositories(db.clone(), Arc::new(RandomIdGenerator::default()));
        let password_hash: Arc<dyn PasswordHash> = Arc::new(Argon2PasswordHash::new());
        let token_manager: Arc<dyn AuthenticationTokenManager> =
            Arc::new(JwtTokenManager::new(&settings.jwt));

        Self {
            db,
            use_cases: Arc::new(UseCases::new(
                repositories,
                password_hash,
                token_manager.clone(),
            )),
            token_manager,
        }
    }
}

/// Router with the trace and CORS layers applied.
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(&settings.cors))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        let state = AppState::new(db, &settings);
        let router = build_router(state, &settings);

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
