mod books;
mod core;
mod utils;

use std::net::SocketAddr;

use tracing::info;

use crate::books::controller::books_routes;
use crate::books::factory;
use crate::core::bookshop::{BookshopError, BookshopResult};
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::utils::log::setup_tracing;

#[tokio::main]
async fn main() -> BookshopResult<()> {
    setup_tracing();

    let config = Configuration::load();
    let store = config.repository_store();
    let service = factory::create_book_service(&config, store).await?;

    let app = books_routes(AppState::new(service));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("starting bookshop service in {} mode listening on {}", config.env, addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| BookshopError::runtime(
            format!("server failed {:?}", err).as_str(), None))
}
