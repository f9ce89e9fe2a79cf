use anyhow::Context;
use cf_routes::logging::{self, LoggingConfig};
use cf_routes::{CloudControllerClient, RouteLookup, RouteLookupOptions};
use cf_routes_config::{Args, RoutesConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let env_loaded = cf_routes_config::load_env_file(&args.env_file)?;
    let config = RoutesConfig::from_env()?;
    logging::init_with_config(LoggingConfig::from(&config.log))?;

    if env_loaded {
        tracing::debug!("Loaded environment from {}", args.env_file);
    }
    tracing::info!("API URL: {}", config.api.url);

    let client = CloudControllerClient::from_config(&config.api)?;
    let lookup = RouteLookup::new(client);

    let options = RouteLookupOptions {
        app_guid: args.app_guid,
        hostname: args.hostname,
        domain_guid: args.domain_guid,
    };
    let routes = lookup.lookup(Some(&options)).await?;
    tracing::info!(
        count = routes.as_ref().and_then(|r| r.as_array()).map_or(0, Vec::len),
        "Fetched routes"
    );

    let output = serde_json::to_string_pretty(&routes).context("Failed to render routes")?;
    println!("{}", output);

    Ok(())
}
