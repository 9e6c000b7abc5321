use inquiry_api_rest::RestServer;
use inquiry_core_contact_contracts::MockContactFeatureService;
use inquiry_core_health_contracts::MockHealthFeatureService;
use tokio::net::TcpListener;

/// Start the REST API with the given services on an ephemeral port and
/// return its base url.
pub async fn serve(health: MockHealthFeatureService, contact: MockContactFeatureService) -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(RestServer::new(health, contact).serve_on(listener));
    format!("http://{addr}")
}
