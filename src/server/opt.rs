use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Redirect HTTP requests by hostname and path
#[derive(Args, Debug)]
pub struct Options {
    #[arg(
        help = "Socket address to listen on (--help for more)",
        long_help = r"Socket address to listen on:
    - all redirected hostnames, and the admin hostname, must resolve to this socket
Examples:
    - 0.0.0.0:8080
    - 127.0.0.1:80
    - [::]:8080"
    )]
    #[arg(short, long, env = "REDIRECT_LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    #[arg(
        help = "Hostname to serve the admin API on (--help for more)",
        long_help = r"Hostname to serve the admin API on:
    - the API is served at <host>/redirects/{ping,list,add,delete,deleteHost}
    - the API is disabled when no hostname is given
Examples:
    - admin.example.com
    - localhost"
    )]
    #[arg(short = 'a', long, env = "REDIRECT_API", value_name = "HOST")]
    pub api: Option<String>,

    /// Snapshot file, loaded at start and saved when stopping
    #[arg(short, long, env = "REDIRECT_STORAGE", default_value = "redirects.json")]
    pub storage: PathBuf,

    /// Start with no redirects if the snapshot file can't be loaded
    #[arg(short, long, env = "REDIRECT_FORCE")]
    pub force: bool,

    /// Don't save the snapshot file when stopping
    #[arg(long, env = "REDIRECT_VOLATILE")]
    pub volatile: bool,
}
