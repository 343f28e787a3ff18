//! Requests over a real socket.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::Path;
use std::sync::Arc;

use folio_query::Gateway;
use folio_server::{Endpoint, HttpServer};
use folio_store::ContentStore;

fn endpoint() -> Endpoint {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../content/data");
    let gateway = Gateway::new(ContentStore::open(dir).snapshot().unwrap());
    Endpoint::new(Arc::new(gateway), "/api/graphql")
}

fn send(addr: SocketAddr, raw: String) -> String {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(raw.as_bytes()).unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    response
}

#[tokio::test]
async fn serves_health_and_queries_then_stops() {
    let server = HttpServer::bind("127.0.0.1:0", endpoint()).unwrap();
    let addr = server.local_addr();
    let shutdown = server.shutdown_handle();
    let running = tokio::spawn(server.run());

    let (health, query) = tokio::task::spawn_blocking(move || {
        let health = send(addr, "GET /healthz HTTP/1.0\r\n\r\n".to_string());
        let body = r#"{"query": "{ tags { name } }"}"#;
        let query = send(
            addr,
            format!(
                "POST /api/graphql HTTP/1.0\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
                body.len()
            ),
        );
        (health, query)
    })
    .await
    .unwrap();

    assert!(health.starts_with("HTTP/1.0 200") || health.starts_with("HTTP/1.1 200"));
    assert!(health.ends_with(r#"{"status":"ok"}"#));
    assert!(query.contains("application/json"));
    assert!(query.contains(r#"{"data":{"tags":[{"name":"React"}"#));

    shutdown.shutdown();
    running.await.unwrap().unwrap();
}
