mod config;
mod error;
mod models;
mod services;
mod store;

mod logger;

use {
    crate::{
        config::Config,
        logger::TracingLogger,
        store::{CatalogStore, PgCatalogStore},
    },
    actix_web::{web, App, HttpServer},
    clap::Parser as _,
    std::sync::Arc,
    tracing_log::LogTracer,
    tracing_subscriber::{fmt::Layer, layer::SubscriberExt as _, EnvFilter, Registry},
};

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    dotenvy::dotenv().ok();

    LogTracer::init()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing::subscriber::set_global_default(Registry::default().with(filter).with(Layer::default()))?;

    let config = Config::parse();

    let pg = PgCatalogStore::connect_lazy(config.connect_options(), config.db_max_connections);

    match pg.ping().await {
        Ok(()) => tracing::info!(host = %config.db_host, "connected to the database"),
        Err(err) => tracing::error!(error = %err, host = %config.db_host, "error connecting to the database"),
    }

    let store: Arc<dyn CatalogStore> = Arc::new(pg);
    let store = web::Data::from(store);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .service(services::products())
            .wrap(services::cors())
            .wrap(TracingLogger)
    })
    .bind(config.bind_addr())?;

    for addr in server.addrs() {
        tracing::info!(%addr, "server is running");
    }

    server.run().await?;

    Ok(())
}
