//! Infrastructure layer: document stores, application services, peer HTTP
//! clients, the movie aggregator and configuration.

pub mod aggregator;
pub mod config;
pub mod external;
pub mod services;
pub mod store;

pub use aggregator::{AggregateError, MovieAggregator};
pub use config::{ConfigError, PeerConfig, ServiceConfig};
pub use services::{MovieInfoService, ReviewService, ServiceError};
pub use store::{InMemoryCollection, MovieInfoStore, ReviewStore, StoreError};
