use movies_api::{app, server};
use movies_infra::{PeerConfig, ServiceConfig};

const DEFAULT_PORT: u16 = 8082;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    movies_observability::init("movies-service");

    let config = ServiceConfig::from_env(DEFAULT_PORT)?;
    let peers = PeerConfig::from_env()?;
    let app = app::build_movies_app(server::movie_aggregator(&peers)?);

    server::serve(app, config.socket_addr()).await
}
