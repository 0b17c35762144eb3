//! Lost & Found Server - HTTP API for reporting and searching items
//!
//! Listens on port 18080 unless configured otherwise.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
