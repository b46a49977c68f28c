mod handlers;
mod models;
mod routes;
mod utils;

use std::error::Error;

use axum::serve;
use routes::make_app;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let app = make_app().await?;

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}");
    serve(listener, app).await?;
    Ok(())
}
