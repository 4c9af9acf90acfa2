use crate::api::{Command, Envelope, Params, BASE_PATH, MALFORMED};
use crate::body::{self, ResponseBody};
use crate::server::routes::not_found;
use crate::store::{Redirect, Redirector};
use headers::{ContentType, HeaderMapExt};
use hyper::{Method, Request, Response, StatusCode};

/// Admin API entry point. Routing problems (method, path shape, command name) are bare 404s;
/// everything else is a 200 with an [`Envelope`].
pub fn respond<B>(req: &Request<B>, host: &str, redirects: &dyn Redirector) -> Response<ResponseBody> {
    if req.method() != Method::GET {
        log::info!("{} {}{} -> [method not allowed]", req.method(), host, req.uri());
        return not_found();
    }

    let command = match parse_command(req.uri().path()) {
        Some(command) => command,
        None => {
            log::info!("{} {}{} -> [unknown command]", req.method(), host, req.uri());
            return not_found();
        }
    };

    let params = Params::from_query(req.uri().query());
    log::debug!("{} {:?}", command, params);

    let envelope = execute(command, params, redirects);
    log::info!(
        "{} {}{} -> [{}] {}",
        req.method(),
        host,
        req.uri(),
        if envelope.status { "ok" } else { "failed" },
        envelope.message
    );

    match serde_json::to_vec(&envelope) {
        Ok(json) => {
            let mut resp = Response::new(body::full(json));
            resp.headers_mut().typed_insert(ContentType::json());
            resp
        }
        Err(e) => {
            log::error!("{} {}{} -> [encode error] {}", req.method(), host, req.uri(), e);
            let mut resp = Response::new(body::empty());
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            resp
        }
    }
}

fn parse_command(path: &str) -> Option<Command> {
    let command = path.strip_prefix(BASE_PATH)?.strip_prefix('/')?;
    if command.contains('/') {
        return None;
    }
    Command::from_segment(command)
}

pub fn execute(command: Command, params: Params, redirects: &dyn Redirector) -> Envelope {
    let Params { host, url, target } = params;

    match command {
        Command::Ping => Envelope::success("pong", None),
        Command::List => {
            if host.is_empty() {
                Envelope::success("all redirects", Some(redirects.all()))
            } else if url.is_empty() {
                Envelope::success("redirects for host", Some(redirects.for_host(&host)))
            } else {
                let found = redirects.get(&host, &url).into_iter().collect();
                Envelope::success("redirects for host and url", Some(found))
            }
        }
        Command::Add => {
            if host.is_empty() || url.is_empty() || target.is_empty() {
                return Envelope::failure(MALFORMED);
            }
            match redirects.add(Redirect::new(host.clone(), url.clone(), target)) {
                Ok(()) => {
                    let added = redirects.get(&host, &url).into_iter().collect();
                    Envelope::success("redirect added", Some(added))
                }
                Err(e) => Envelope::failure(e.to_string()),
            }
        }
        Command::Delete => {
            if host.is_empty() || url.is_empty() {
                return Envelope::failure(MALFORMED);
            }
            redirects.remove(&host, &url);
            Envelope::success("redirect deleted", None)
        }
        Command::DeleteHost => {
            if host.is_empty() {
                return Envelope::failure(MALFORMED);
            }
            redirects.remove_host(&host);
            Envelope::success("host deleted", None)
        }
    }
}
