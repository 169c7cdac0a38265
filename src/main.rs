use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, HttpServer, web};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tera::Tera;

use topicboard::db::establish_connection_pool;
use topicboard::models::config::ServerConfig;
use topicboard::repository::DieselRepository;
use topicboard::routes::{admin_config, api_config};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config: ServerConfig = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("TOPICBOARD"))
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let pool = establish_connection_pool(&config.database_url)
        .map_err(|e| std::io::Error::other(format!("Failed to create database pool: {e}")))?;

    let mut conn = pool
        .get()
        .map_err(|e| std::io::Error::other(format!("Failed to get database connection: {e}")))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
    drop(conn);

    let tera = Tera::new("templates/**/*.html")
        .map_err(|e| std::io::Error::other(format!("Failed to load templates: {e}")))?;

    let repo = DieselRepository::new(pool);

    log::info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .configure(api_config)
            .configure(admin_config)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
