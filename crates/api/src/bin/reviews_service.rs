use movies_api::{app, server};
use movies_infra::{ReviewService, ServiceConfig};

const DEFAULT_PORT: u16 = 8081;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    movies_observability::init("reviews-service");

    let config = ServiceConfig::from_env(DEFAULT_PORT)?;
    let store = server::review_store(&config).await?;
    let app = app::build_reviews_app(ReviewService::new(store));

    server::serve(app, config.socket_addr()).await
}
