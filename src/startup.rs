//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::domain::ApplicationRepository;
use crate::infrastructure::database;
use crate::infrastructure::email::{MailSender, NoopMailer, SmtpMailer};
use crate::infrastructure::repositories::PgApplicationRepository;
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
///
/// The repository and mailer are constructed once here and injected as
/// trait objects; handlers never reach for process-wide clients.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ApplicationRepository>,
    pub mailer: Arc<dyn MailSender>,
    pub settings: Arc<Settings>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        // Apply pending migrations
        database::run_migrations(&db).await?;
        tracing::info!("Database migrations applied");

        let repo: Arc<dyn ApplicationRepository> = Arc::new(PgApplicationRepository::new(db));

        let mailer: Arc<dyn MailSender> = match settings.mail.clone() {
            Some(mail) => Arc::new(SmtpMailer::new(mail)),
            None => {
                tracing::info!("No mail settings found; candidate notifications disabled");
                Arc::new(NoopMailer)
            }
        };

        // Create app state
        let state = AppState {
            repo,
            mailer,
            settings: Arc::new(settings.clone()),
        };

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(create_trace_layer())
            .layer(create_cors_layer(&settings.cors));

        // Bind to address
        let addr = settings.server.socket_addr();
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

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
