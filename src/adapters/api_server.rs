use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::ServerConfig;
use crate::error::Result;

/// Bind the TCP listener for the configured address
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    Ok(listener)
}

/// Serve the API on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);

    info!("API endpoints:");
    info!("  POST /predict   - Predict a label for a feature vector");
    info!("  GET  /health    - Health summary");
    info!("  GET  /healthz   - Liveness probe");
    info!("  GET  /readyz    - Readiness probe");
    info!("  GET  /metrics   - Prometheus metrics");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("API server stopped");
    Ok(())
}

/// Start the API server
pub async fn start_api_server<F>(config: &ServerConfig, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = bind_listener(config).await?;
    serve(listener, state, shutdown).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LabelRange;
    use crate::ml::RandomClassifier;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_serves_predictions_over_tcp() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        let listener = bind_listener(&config).await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = AppState::new(Arc::new(RandomClassifier::new(LabelRange::default())));
        let (tx, rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(listener, state, async move {
            let _ = rx.await;
        }));

        let body = "[1,2,3]";
        let request = format!(
            "POST /predict HTTP/1.1\r\nHost: {addr}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains(r#""input":[1,2,3]"#), "{response}");

        tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        let first = bind_listener(&config).await.unwrap();
        let taken = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: first.local_addr().unwrap().port(),
        };

        let err = bind_listener(&taken).await.unwrap_err();
        assert!(matches!(err, crate::error::LabelStubError::Io(_)));
    }
}
