mod service;

use std::net::SocketAddr;

use abi::{pb::reservation_service_server::ReservationServiceServer, Config};
use reservation::{PgStore, ReservationManager, Store};
use tonic::{codec::CompressionEncoding, transport::Server};
use tracing::info;

/// gRPC front of a [`ReservationManager`]. Requests are decoded into domain
/// values, handed to the manager, and domain errors are mapped to status codes.
pub struct RsvpService<S: Store = PgStore> {
    manager: ReservationManager<S>,
}

impl<S: Store> RsvpService<S> {
    pub fn new(manager: ReservationManager<S>) -> Self {
        Self { manager }
    }
}

/// Connects to the configured database, applies pending migrations and serves
/// until the process is stopped.
pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let store = PgStore::connect(&config.db).await?;
    store.migrate().await?;
    info!(db = %config.db.dbname, "database ready");
    serve(ReservationManager::new(store), addr).await
}

pub async fn serve<S: Store>(
    manager: ReservationManager<S>,
    addr: SocketAddr,
) -> anyhow::Result<()> {
    let svc = ReservationServiceServer::new(RsvpService::new(manager))
        .accept_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Gzip);

    info!(%addr, "listening");
    Server::builder().add_service(svc).serve(addr).await?;
    Ok(())
}
