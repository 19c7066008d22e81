use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use tracing_actix_web::TracingLogger;

use collector_catalog::config::AppConfig;
use collector_catalog::context::AppContext;
use collector_catalog::{banner, builtin, status, telemetry};

fn startup_error(err: impl std::error::Error + Send + Sync + 'static) -> std::io::Error {
    std::io::Error::other(err)
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Config is read before telemetry exists, so its errors go to stderr via main's return
    let config = AppConfig::from_env().map_err(startup_error)?;

    let telemetry = telemetry::init_with_config(&config.telemetry)
        .await
        .map_err(startup_error)?;

    let context = AppContext::new(config);
    let added = builtin::register_all(context.registries()).map_err(startup_error)?;
    info!(components = added, "Registered builtin components");

    let identity = &context.config().telemetry;
    println!(
        "{}",
        banner::render(
            &identity.service_name,
            &identity.service_version,
            &context.summary()
        )
    );

    match context.validate_components() {
        Ok(resolved) => info!(components = resolved.len(), "Configured components validated"),
        Err(e) => {
            error!(error = %e, "Component configuration rejected");
            return telemetry.finish(Err(startup_error(e)));
        }
    }

    let bind = context.config().server.bind.clone();
    let port = context.config().server.port;
    info!("Starting status server on {}:{}", bind, port);

    let context = web::Data::new(context);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(context.clone())
            .configure(status::configure)
    })
    .bind((bind.as_str(), port));

    let served = match server {
        Ok(server) => server.run().await,
        Err(e) => {
            error!(error = %e, "Failed to bind status server");
            Err(e)
        }
    };

    telemetry.finish(served)
}
