mod api;
mod body;
mod client;
mod err;
mod http;
mod opt;
mod server;
mod store;

#[tokio::main]
async fn main() -> Result<(), err::DisplayError> {
    let opt::Options { verbose, command } = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    match command {
        opt::Command::Server(options) => server::main(options).await?,
        opt::Command::Client(options) => client::main(options).await?,
    }

    Ok(())
}
