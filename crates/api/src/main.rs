use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use api::routes;
use api::state::AppState;
use common::{init_logging, settings::Settings};
use repos::Repo;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[arg(short = 'C', long, default_value = "config")]
    config_dir: String,
}

struct CredmanApp {
    settings: Arc<Settings>,
}

impl CredmanApp {
    fn new(config_dir: &str) -> Self {
        Self {
            settings: Arc::new(
                Settings::with_config_dir(config_dir).expect("Failed to load settings"),
            ),
        }
    }

    async fn run(&self) {
        let _guard = init_logging(&self.settings.logger);

        info!("Starting server on port {}", self.settings.server.port);

        let db = self.init_db().await.expect("Failed to connect to database");
        let repo = Repo::new(db);

        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

        let state = AppState {
            repo,
            settings: self.settings.clone(),
        };

        let routes_all = Router::new()
            .nest("/api", routes::routes())
            .layer(DefaultBodyLimit::max(1024 * 1024))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let port = self.settings.server.port;
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        if self.settings.server.public_key.is_some() && self.settings.server.private_key.is_some() {
            let config = RustlsConfig::from_pem(
                self.settings
                    .server
                    .public_key
                    .clone()
                    .unwrap_or_default()
                    .into_bytes(),
                self.settings
                    .server
                    .private_key
                    .clone()
                    .unwrap_or_default()
                    .into_bytes(),
            )
            .await
            .expect("Invalid TLS configuration");

            axum_server::bind_rustls(addr, config)
                .serve(routes_all.into_make_service())
                .await
                .expect("Server failed");
        } else {
            axum_server::bind(addr)
                .serve(routes_all.into_make_service())
                .await
                .expect("Server failed");
        }
    }

    async fn init_db(&self) -> Result<PgPool, sqlx::Error> {
        let database_url = &self.settings.database.uri;
        let mut opts: PgConnectOptions = database_url.parse()?;
        opts = opts.log_statements(log::LevelFilter::Debug);

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        Ok(pool)
    }
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    let app = CredmanApp::new(&args.config_dir);
    app.run().await;
}
