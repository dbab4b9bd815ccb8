pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, contact, email, portfolio};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{AdminQueryPostgres, AdminRepositoryPostgres};
use crate::auth::application::{
    auth_use_cases::AuthUseCases,
    ports::{
        incoming::use_cases::SeedAdminsUseCase,
        outgoing::{PasswordHasher, TokenProvider},
    },
    services::{
        load_seed_admins, AddAdminService, DeleteAdminService, ListAdminsService,
        LoginAdminService, SeedAdminsService,
    },
};
use crate::config::{AppConfig, SmtpConfig};
use crate::contact::adapter::outgoing::{ContactMessageRepositoryPostgres, EmailContactNotifier};
use crate::contact::application::{
    ports::incoming::use_cases::SubmitContactUseCase, services::SubmitContactService,
};
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::EmailSender;
use crate::portfolio::adapter::outgoing::{PortfolioQueryPostgres, PortfolioRepositoryPostgres};
use crate::portfolio::application::{
    domain::policies::UploadPolicy,
    portfolio_use_cases::PortfolioUseCases,
    seed::load_seed_content,
    services::{
        FetchAssetService, GetFullPortfolioService, GetPortfolioService, UploadAssetService,
        UpsertPortfolioService,
    },
};
use crate::shared::{api::custom_json_config, db::close_pool};

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub auth: AuthUseCases,
    pub submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub upload_policy: UploadPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{env}")).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = %env, "Starting application...");

    let config = AppConfig::from_env()?;

    // Database
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    Migrator::up(&conn, None).await?;
    let db_arc = Arc::new(conn);

    // Bundled seed data
    let seed_content =
        Arc::new(load_seed_content().expect("seed/content.json must match the portfolio schema"));
    let seed_admins = load_seed_admins().expect("seed/admins.json must be a list of admins");

    let argon2 =
        Argon2Hasher::from_env().map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {e}"))?;
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(argon2);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(JwtConfig::from_env()?));

    let email_sender: Arc<dyn EmailSender + Send + Sync> = match &config.smtp {
        SmtpConfig::Local { host, port } => {
            Arc::new(SmtpEmailSender::new_local(host, *port, &config.email_from))
        }
        SmtpConfig::Relay {
            server,
            username,
            password,
        } => Arc::new(SmtpEmailSender::new(
            server,
            username,
            password,
            &config.email_from,
        )?),
    };

    // Wiring locals drop with this block; only the server keeps pool handles.
    let state = {
        // Portfolio
        let portfolio_query = PortfolioQueryPostgres::new(Arc::clone(&db_arc));
        let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));

        let portfolio = PortfolioUseCases {
            get: Arc::new(GetPortfolioService::new(
                portfolio_query.clone(),
                portfolio_repo.clone(),
                Arc::clone(&seed_content),
            )),
            get_full: Arc::new(GetFullPortfolioService::new(
                portfolio_query.clone(),
                portfolio_repo.clone(),
                Arc::clone(&seed_content),
            )),
            upsert: Arc::new(UpsertPortfolioService::new(
                portfolio_repo.clone(),
                Arc::clone(&seed_content),
            )),
            upload_asset: Arc::new(UploadAssetService::new(
                portfolio_repo,
                Arc::clone(&seed_content),
            )),
            fetch_asset: Arc::new(FetchAssetService::new(portfolio_query)),
        };

        // Auth
        let admin_query = AdminQueryPostgres::new(Arc::clone(&db_arc));
        let admin_repo = AdminRepositoryPostgres::new(Arc::clone(&db_arc));

        let seeder: Arc<dyn SeedAdminsUseCase + Send + Sync> = Arc::new(SeedAdminsService::new(
            admin_query.clone(),
            admin_repo.clone(),
            Arc::clone(&password_hasher),
            seed_admins,
        ));

        let auth = AuthUseCases {
            login: Arc::new(LoginAdminService::new(
                admin_query.clone(),
                Arc::clone(&password_hasher),
                Arc::clone(&token_provider),
                Arc::clone(&seeder),
            )),
            list: Arc::new(ListAdminsService::new(admin_query, Arc::clone(&seeder))),
            add: Arc::new(AddAdminService::new(
                admin_repo.clone(),
                Arc::clone(&password_hasher),
            )),
            delete: Arc::new(DeleteAdminService::new(admin_repo)),
        };

        // Contact
        let notifier = EmailContactNotifier::new(email_sender, config.contact_inbox.clone());
        let submit_contact = Arc::new(SubmitContactService::new(
            ContactMessageRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::new(notifier),
        ));

        AppState {
            portfolio,
            auth,
            submit_contact,
            upload_policy: UploadPolicy::from_env(),
        }
    };

    let server_url = config.server_url();
    info!(address = %server_url, "Server listening");

    let db_for_server = Arc::clone(&db_arc);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    info!("Server stopped, closing database pool");
    close_pool(db_arc).await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Content
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_full_content_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_content_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_content_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_image_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_resume_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::upload_image_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::upload_resume_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::list_admins_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::add_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_admin_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
