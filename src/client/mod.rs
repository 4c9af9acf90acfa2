use crate::api::{Command, Params};
use crate::err::Error;
use crate::http::{make_client, HttpClient};
use http_body_util::Empty;
use hyper::body::Bytes;
use std::io;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub mod opt;
mod request;
mod table;

pub async fn main(options: opt::Options) -> Result<(), Error> {
    let opt::Options { server, action } = options;

    let (command, params) = match action {
        opt::Action::Ping => (Command::Ping, Params::default()),
        opt::Action::List { hostname, url } => (
            Command::List,
            Params {
                host: hostname.unwrap_or_default(),
                url: url.unwrap_or_default(),
                ..Params::default()
            },
        ),
        opt::Action::Add {
            hostname,
            url,
            target,
        } => (
            Command::Add,
            Params {
                host: hostname,
                url,
                target,
            },
        ),
        opt::Action::Remove {
            hostname,
            url: Some(url),
            force: _,
        } => (
            Command::Delete,
            Params {
                host: hostname,
                url,
                ..Params::default()
            },
        ),
        opt::Action::Remove {
            hostname,
            url: None,
            force,
        } => {
            if !force && !confirm(&hostname).await? {
                println!("Deletion aborted for hostname {}", hostname);
                return Ok(());
            }
            (
                Command::DeleteHost,
                Params {
                    host: hostname,
                    ..Params::default()
                },
            )
        }
    };

    let client: HttpClient<Empty<Bytes>> = make_client()?;
    let envelope = request::send(&client, &server, command, &params).await?;
    print!("{}", table::render(&envelope));

    Ok(())
}

async fn confirm(hostname: &str) -> Result<bool, io::Error> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(
            format!(
                "Confirm to delete all redirects from hostname {} (y/n) ",
                hostname
            )
            .as_bytes(),
        )
        .await?;
    stdout.flush().await?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
