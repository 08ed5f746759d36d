use axum::response::Html;
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use contact_relay::contact::handlers::handle_submit_contact;
use contact_relay::delivery::client::DeliveryClient;
use contact_relay::delivery::protocol::DEFAULT_UPSTREAM;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let upstream = std::env::var("CONTACT_UPSTREAM")
        .unwrap_or_else(|_| DEFAULT_UPSTREAM.to_string());
    let bind_addr: SocketAddr = std::env::var("CONTACT_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    let delivery = Arc::new(DeliveryClient::new(upstream.trim_end_matches('/')));

    let app = Router::new()
        .route("/", get(contact_page))
        .route("/api/contact", post(handle_submit_contact))
        .layer(Extension(delivery.clone()));

    tracing::info!("Contact relay listening on {}", bind_addr);
    tracing::info!("Relaying submissions to {}", delivery.endpoint());

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn contact_page() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}
