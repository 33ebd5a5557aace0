//! HTTP surface for the movie services: routers, error mapping, request
//! logging and process bootstrap.

pub mod app;
pub mod middleware;
pub mod server;
