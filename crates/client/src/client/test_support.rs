//! In-process stub of the hosted backend for client tests.

use axum::Router;
use tokio::net::TcpListener;

use crate::{SupabaseClient, SupabaseConfig};

/// Serves `router` on an ephemeral local port and returns its base URL.
pub(crate) async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Anonymous client pointed at `base_url`.
pub(crate) fn client_for(base_url: &str) -> SupabaseClient {
    let config =
        SupabaseConfig::from_values(Some(base_url.to_string()), Some("anon-key".to_string()))
            .unwrap();
    SupabaseClient::new(config).unwrap()
}
