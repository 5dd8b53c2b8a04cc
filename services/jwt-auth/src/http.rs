//! HTTP surface: the greeting endpoint and Prometheus scraping.

use crate::config::Config;
use crate::metrics;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use tracing::{error, info};
use tracing_actix_web::TracingLogger;

/// Register all routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/hi", web::get().to(greet))
        .route("/metrics", web::get().to(render_metrics));
}

async fn greet() -> impl Responder {
    "hii"
}

async fn render_metrics() -> HttpResponse {
    match metrics::render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Bind the listener and serve until shutdown.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn serve(config: &Config) -> std::io::Result<()> {
    let addr = config.bind_address();

    let server = HttpServer::new(|| {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure)
    })
    .bind(&addr)?;

    info!(%addr, "HTTP server listening");
    server.run().await
}
