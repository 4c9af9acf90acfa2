use clap::{Args, Subcommand};

/// Manage the redirects of a running server through its admin API
#[derive(Args, Debug)]
pub struct Options {
    #[arg(
        help = "Address of the admin API (--help for more)",
        long_help = r"Address of the admin API:
    - must be the server's admin hostname, so the request reaches the API
    - http:// is assumed unless a scheme is given
Examples:
    - admin.example.com:8080
    - https://admin.example.com"
    )]
    #[arg(short, long, env = "REDIRECT_SERVER", default_value = "localhost:8080")]
    pub server: String,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Check that the admin API is reachable
    #[command(alias = "test", hide = true)]
    Ping,
    /// List all redirects, the redirects of a hostname, or one redirect
    #[command(alias = "show")]
    List {
        hostname: Option<String>,
        url: Option<String>,
    },
    /// Add a redirect, or change the target of an existing one
    #[command(aliases = ["insert", "change"])]
    Add {
        hostname: String,
        url: String,
        target: String,
    },
    /// Remove one redirect, or every redirect of a hostname
    #[command(alias = "delete")]
    Remove {
        hostname: String,
        url: Option<String>,

        /// Don't ask before removing every redirect of a hostname
        #[arg(short, long)]
        force: bool,
    },
}
