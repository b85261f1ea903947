use crate::submission_app_container::SubmissionAppContainer;
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{web, App, HttpServer};
use actix_web_opentelemetry::RequestTracing;
use anyhow::Context;
use quote_form::relay::SubmissionRelay;
use tracing_actix_web::TracingLogger;

mod errors;
mod routes;
mod submission_app_container;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("http_server");
    start().await?;
    shared_kernel::tracing::shutdown_global_tracer_provider();
    Ok(())
}

async fn start() -> anyhow::Result<()> {
    let relay = SubmissionRelay::new()?;

    // Submissions are rare; anything past a small burst is abuse.
    let governor_config = GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(5)
        .finish()
        .context("Failed to build the rate limiting configuration")?;

    HttpServer::new(move || {
        let app_container = SubmissionAppContainer::new(relay.clone());
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestTracing::new())
            .wrap(Cors::permissive())
            .wrap(Governor::new(&governor_config))
            .configure(routes::config)
            .app_data(web::Data::new(app_container))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
    .context("Server failed to run")
}
