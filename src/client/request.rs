use crate::api::{Command, Envelope, Params, BASE_PATH};
use crate::http::HttpClient;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Request, StatusCode};

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("server / API not found at {0}")]
    ApiNotFound(String),
    #[error("operation was not successful on server: {0}")]
    Rejected(String),
    #[error("unexpected response status {0}")]
    Status(StatusCode),
    #[error("could not build request: {0}")]
    Build(#[from] http::Error),
    #[error("could not send request: {0}")]
    Send(#[from] hyper_util::client::legacy::Error),
    #[error("could not read response: {0}")]
    Read(#[from] hyper::Error),
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn request_uri(server: &str, command: Command, params: &Params) -> String {
    let server = server.trim_end_matches('/');
    let base = if server.contains("://") {
        server.to_string()
    } else {
        format!("http://{}", server)
    };
    let query = params.to_query();
    if query.is_empty() {
        format!("{}{}/{}", base, BASE_PATH, command)
    } else {
        format!("{}{}/{}?{}", base, BASE_PATH, command, query)
    }
}

/// Sends one admin command. Only successful envelopes are returned.
pub async fn send(
    client: &HttpClient<Empty<Bytes>>,
    server: &str,
    command: Command,
    params: &Params,
) -> Result<Envelope, ClientError> {
    let uri = request_uri(server, command, params);
    log::debug!("GET {}", uri);

    let req = Request::get(uri).body(Empty::new())?;
    let resp = client.request(req).await?;
    match resp.status() {
        StatusCode::OK => {}
        StatusCode::NOT_FOUND => return Err(ClientError::ApiNotFound(server.to_string())),
        status => return Err(ClientError::Status(status)),
    }

    let body = resp.into_body().collect().await?.to_bytes();
    check(serde_json::from_slice(&body)?)
}

fn check(envelope: Envelope) -> Result<Envelope, ClientError> {
    if envelope.status {
        Ok(envelope)
    } else {
        Err(ClientError::Rejected(envelope.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_without_params() {
        assert_eq!(
            request_uri("localhost:8080", Command::Ping, &Params::default()),
            "http://localhost:8080/redirects/ping"
        );
    }

    #[test]
    fn uri_drops_trailing_slash() {
        assert_eq!(
            request_uri("localhost:8080/", Command::Ping, &Params::default()),
            "http://localhost:8080/redirects/ping"
        );
    }

    #[test]
    fn uri_encodes_params() {
        let params = Params {
            host: "example.com".into(),
            url: "/a b".into(),
            target: "http://dest.example/?q=1".into(),
        };
        assert_eq!(
            request_uri("admin.example:8080", Command::Add, &params),
            "http://admin.example:8080/redirects/add?host=example.com&url=%2Fa+b&target=http%3A%2F%2Fdest.example%2F%3Fq%3D1"
        );
    }

    #[test]
    fn uri_keeps_explicit_scheme() {
        let params = Params {
            host: "example.com".into(),
            ..Params::default()
        };
        assert_eq!(
            request_uri("https://admin.example/", Command::DeleteHost, &params),
            "https://admin.example/redirects/deleteHost?host=example.com"
        );
    }

    #[test]
    fn rejected_envelope_is_an_error() {
        let err = check(Envelope::failure("request malformed")).unwrap_err();
        assert!(matches!(err, ClientError::Rejected(ref m) if m == "request malformed"));
        assert_eq!(
            err.to_string(),
            "operation was not successful on server: request malformed"
        );

        assert!(check(Envelope::success("pong", None)).is_ok());
    }
}
