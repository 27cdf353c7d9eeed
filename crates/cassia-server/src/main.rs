use actix_web::{App, HttpServer, web};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cassia_common::model::AppState;

mod settings;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let configuration = settings::Configuration::new()?;
    let address = configuration.server_address();
    let port = configuration.server_port();
    let context_path = configuration.context_path();

    let database_connection = configuration.database_connection().await?;

    let app_state = AppState {
        app_config: configuration.config.clone(),
        database_connection,
        context_path,
    };

    tracing::info!(address = %address, port = port, "starting cassia server");

    HttpServer::new(move || {
        let context_path = app_state.context_path.clone();
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .service(web::scope(&context_path).service(cassia_console::v1::router::routers()))
    })
    .bind((address, port))?
    .run()
    .await?;

    Ok(())
}
