//! Delivery Module Tests
//!
//! Validates the outbound leg against a stub upstream.
//!
//! ## Test Scopes
//! - **Request shape**: one POST per `deliver` call, body identical to the record.
//! - **Reply interpretation**: status classes, explicit success flags, non-JSON bodies.

#[cfg(test)]
mod tests {
    use crate::contact::types::ContactMessage;
    use crate::delivery::client::DeliveryClient;
    use crate::delivery::protocol::DEFAULT_UPSTREAM;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            message: "hi".to_string(),
        }
    }

    /// Stub upstream recording every received body and answering with a
    /// fixed reply.
    async fn spawn_upstream(
        reply_status: StatusCode,
        reply_body: &'static str,
    ) -> (SocketAddr, Arc<Mutex<Vec<Value>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_handle = received.clone();

        let app = Router::new().route(
            "/contact",
            post(move |Json(body): Json<Value>| {
                let received = received_handle.clone();
                async move {
                    received.lock().unwrap().push(body);
                    (reply_status, reply_body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (addr, received)
    }

    fn client_for(addr: SocketAddr) -> DeliveryClient {
        DeliveryClient::new(format!("http://{}/contact", addr))
    }

    // ============================================================
    // REQUEST SHAPE
    // ============================================================

    #[tokio::test]
    async fn test_deliver_posts_exact_json_body() {
        let (addr, received) = spawn_upstream(StatusCode::OK, r#"{"success":true}"#).await;

        client_for(addr).deliver(&sample_message()).await.unwrap();

        let bodies = received.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(
            bodies[0],
            serde_json::json!({"name": "Jo", "email": "jo@x.com", "message": "hi"})
        );
    }

    #[tokio::test]
    async fn test_deliver_posts_once_per_call() {
        let (addr, received) = spawn_upstream(StatusCode::OK, r#"{"success":true}"#).await;
        let client = client_for(addr);

        client.deliver(&sample_message()).await.unwrap();
        client.deliver(&sample_message()).await.unwrap();

        assert_eq!(received.lock().unwrap().len(), 2);
    }

    // ============================================================
    // REPLY INTERPRETATION
    // ============================================================

    #[tokio::test]
    async fn test_deliver_success_with_flag_true() {
        let (addr, _) = spawn_upstream(StatusCode::OK, r#"{"success":true}"#).await;

        let receipt = client_for(addr).deliver(&sample_message()).await.unwrap();

        assert_eq!(receipt.status, 200);
        assert!(receipt.body.is_some());
    }

    #[tokio::test]
    async fn test_deliver_success_with_non_json_body() {
        // A 2xx reply without readable JSON still counts as delivered
        let (addr, _) = spawn_upstream(StatusCode::OK, "ok").await;

        let receipt = client_for(addr).deliver(&sample_message()).await.unwrap();

        assert_eq!(receipt.status, 200);
        assert!(receipt.body.is_none());
    }

    #[tokio::test]
    async fn test_deliver_success_with_flagless_json_body() {
        let (addr, _) = spawn_upstream(StatusCode::OK, r#"{"id":"abc"}"#).await;

        let receipt = client_for(addr).deliver(&sample_message()).await.unwrap();

        assert_eq!(receipt.status, 200);
    }

    #[tokio::test]
    async fn test_deliver_fails_on_http_error() {
        let (addr, received) = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;

        let result = client_for(addr).deliver(&sample_message()).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("500"));
        // The failed POST was still issued exactly once
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deliver_fails_on_explicit_rejection() {
        let (addr, _) = spawn_upstream(StatusCode::OK, r#"{"success":false}"#).await;

        let result = client_for(addr).deliver(&sample_message()).await;

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("rejected contact message")
        );
    }

    #[tokio::test]
    async fn test_deliver_fails_on_unreachable_upstream() {
        // Nothing listens on the port once the listener is dropped
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client_for(addr).deliver(&sample_message()).await;

        assert!(result.is_err());
    }

    // ============================================================
    // CONFIGURATION
    // ============================================================

    #[test]
    fn test_client_keeps_configured_endpoint() {
        let client = DeliveryClient::new(DEFAULT_UPSTREAM);

        assert_eq!(client.endpoint(), DEFAULT_UPSTREAM);
    }
}
