pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::career;

use crate::api::openapi::ApiDoc;
use crate::career::adapter::outgoing::CareerRepositoryPostgres;
use crate::career::application::ports::incoming::use_cases::{
    CreateCareerUseCase, DeleteCareerUseCase, ListCareersUseCase, UpdateCareerUseCase,
};
use crate::career::application::ports::outgoing::CareerRepository;
use crate::career::application::services::{
    CreateCareerService, DeleteCareerService, ListCareersService, UpdateCareerService,
};
use crate::shared::config::{load_env_files, AppConfig};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub list_careers_use_case: Arc<dyn ListCareersUseCase + Send + Sync>,
    pub create_career_use_case: Arc<dyn CreateCareerUseCase + Send + Sync>,
    pub update_career_use_case: Arc<dyn UpdateCareerUseCase + Send + Sync>,
    pub delete_career_use_case: Arc<dyn DeleteCareerUseCase + Send + Sync>,
}

impl AppState {
    /// Wires every career use case to the same repository.
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: CareerRepository + Clone + Send + Sync + 'static,
    {
        Self {
            list_careers_use_case: Arc::new(ListCareersService::new(repository.clone())),
            create_career_use_case: Arc::new(CreateCareerService::new(repository.clone())),
            update_career_use_case: Arc::new(UpdateCareerService::new(repository.clone())),
            delete_career_use_case: Arc::new(DeleteCareerService::new(repository)),
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_files();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .connect_timeout(config.db_connect_timeout)
        .acquire_timeout(config.db_connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let career_repo = CareerRepositoryPostgres::new(Arc::clone(&db_arc));
    let state = AppState::from_repository(career_repo);

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server terminated with an error")
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Careers
    cfg.service(crate::career::adapter::incoming::web::routes::list_careers_handler);
    cfg.service(crate::career::adapter::incoming::web::routes::create_career_handler);
    cfg.service(crate::career::adapter::incoming::web::routes::update_career_handler);
    cfg.service(crate::career::adapter::incoming::web::routes::delete_career_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!("Error starting app: {e:#}");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
