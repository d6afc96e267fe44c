use clap::Args;

use crate::api::{self, AppState};
use crate::error::Result;
use crate::services::SimpleServices;

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

pub async fn execute(args: ServeArgs, services: &SimpleServices) -> Result<()> {
    let mut config = (*services.config()).clone();
    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    let address = config.server_address();

    let repository = services.create_repository()?;
    api::serve(AppState::new(repository), &address).await
}
