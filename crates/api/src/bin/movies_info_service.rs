use movies_api::{app, server};
use movies_infra::{MovieInfoService, ServiceConfig};

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    movies_observability::init("movies-info-service");

    let config = ServiceConfig::from_env(DEFAULT_PORT)?;
    let store = server::movie_info_store(&config).await?;
    let app = app::build_movie_info_app(MovieInfoService::new(store));

    server::serve(app, config.socket_addr()).await
}
