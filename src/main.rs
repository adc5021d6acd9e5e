//! Serves the `Course` resource.
//!
//! ```bash
//! RUST_LOG=info PORT=3000 DATABASE_URL=memory://school cargo run
//! ```

use std::sync::Arc;

use coursework::resource::{self, Course, ResourceHandlers};
use coursework::store::MemoryCollection;
use coursework::telemetry::setup_tracing;
use coursework::{Config, Router, Server, health};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    setup_tracing();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), coursework::Error> {
    let config = Config::from_env()?;
    info!(database = %config.database_url, port = config.port, "starting");

    let courses = Arc::new(MemoryCollection::<Course>::open(&config.database_url)?);

    let app = resource::mount(Router::new(), ResourceHandlers::new(courses));
    let app = health::mount(app);

    Server::bind(config.listen_addr()).await?.serve(app).await
}
