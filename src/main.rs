use amadeus_analytics::{load_data, router, AppState, Config, FareSeriesBuilder};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let fares = load_data(&config.data_path).await;

    let mut builder = FareSeriesBuilder::new(config.fares_endpoint()).with_colors(config.colors);
    if let Some(timeout) = config.fares_timeout {
        builder = builder.with_timeout(timeout);
    }
    info!("fetching fares from {}", builder.endpoint());

    let app = router(AppState::new(builder, fares));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
