use crate::err::Error;
use crate::http::run_simple_server;
use crate::server::routes::{respond_to_request, State};
use crate::store::MapRedirector;
use futures::future::{select, Either};
use std::pin::pin;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

pub mod opt;
mod routes;
mod snapshot;

pub async fn main(options: opt::Options) -> Result<(), Error> {
    let opt::Options {
        listen,
        api,
        storage,
        force,
        volatile,
    } = options;

    let redirects = match snapshot::load(&storage).await {
        Ok(redirects) => {
            log::info!(
                "Loaded {} redirects from {}",
                redirects.len(),
                storage.display()
            );
            redirects
        }
        Err(e) if force => {
            log::warn!("{}, starting with no redirects", e);
            MapRedirector::new()
        }
        Err(e) => return Err(e.into()),
    };
    let redirects = Arc::new(redirects);

    match &api {
        Some(host) => log::info!("Admin API at {}/redirects/", host),
        None => log::info!("Admin API disabled"),
    }

    log::info!("Binding to: {}", listen);
    let listener = TcpListener::bind(listen).await?;

    let state = Arc::new(State {
        redirects: redirects.clone(),
        admin_host: api,
    });

    let server = pin!(run_simple_server(listener, state, respond_to_request));
    let interrupt = pin!(signal::ctrl_c());
    let stopped = match select(server, interrupt).await {
        Either::Left((result, _)) => result,
        Either::Right((result, _)) => result.map(|()| log::info!("Interrupted, stopping")),
    };

    if volatile {
        log::info!("Not saving redirects (volatile)");
    } else {
        snapshot::save(&storage, &*redirects)?;
        log::info!("Saved {} redirects to {}", redirects.len(), storage.display());
    }

    stopped?;

    Ok(())
}
