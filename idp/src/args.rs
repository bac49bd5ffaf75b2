use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Identity provider server
#[derive(Debug, Parser)]
#[command(name = "idp", about = "OAuth2/OIDC identity provider")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "idp.toml", env = "IDP_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "IDP_LISTEN")]
    pub listen: Option<SocketAddr>,
}
