use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use inquiry_core_contact_contracts::ContactFeatureService;
use inquiry_core_health_contracts::HealthFeatureService;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

pub use routes::contact::CONTACT_ROUTE;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub fn new(health: Health, contact: Contact) -> Self {
        Self { health, contact }
    }

    pub async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {addr}"))?;
        info!("Starting REST API server on {addr}");
        self.serve_on(listener).await
    }

    /// Serve requests on an already bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        axum::serve(listener, self.router())
            .await
            .context("Failed to serve REST API")
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(Arc::new(self.health)))
            .merge(routes::contact::router(Arc::new(self.contact)));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::cors::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
