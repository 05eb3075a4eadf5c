use cybersnake_api::api::server;
use cybersnake_api::Config;
use dotenv::dotenv;
use std::process::exit;
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    server::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(errors) => {
            error!("Failed to load environment variables.");
            for e in &errors {
                error!("{}", e);
            }
            exit(1);
        }
    };

    server::run_server(config).await
}
