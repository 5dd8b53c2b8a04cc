use jwt_auth::{http, Config, TOKEN_VALIDITY_SECS};
use rust_common::init_tracing;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Fails here on a missing or empty JWT_SECRET.
    let config = Config::from_env()?;
    init_tracing(&config.tracing)?;

    info!(
        algorithm = jwt_auth::jwt::ALGORITHM_NAME,
        validity_secs = TOKEN_VALIDITY_SECS,
        "Starting jwt-auth"
    );

    http::serve(&config).await?;

    Ok(())
}
