use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};

use crate::config::Config;

/// Connects to MongoDB and returns the configured database handle
///
/// The returned handle shares the driver's connection pool and is safe to
/// clone across request handlers.
pub async fn connect(config: &Config) -> mongodb::error::Result<Database> {
    let mut options = ClientOptions::parse(&config.mongo_uri).await?;
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

    let client = Client::with_options(options)?;
    let database = client.database(&config.db_name);

    database.run_command(doc! { "ping": 1 }, None).await?;

    Ok(database)
}
