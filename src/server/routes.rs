use crate::api::BASE_PATH;
use crate::body::{self, ResponseBody};
use crate::store::Redirector;
use http::uri::Authority;
use hyper::body::Incoming;
use hyper::header::HOST;
use hyper::{Request, Response, StatusCode};
use std::sync::Arc;

pub mod admin;
pub mod resolve;

pub struct State {
    pub redirects: Arc<dyn Redirector>,
    /// Virtual host serving the admin API; `None` disables it.
    pub admin_host: Option<String>,
}

pub async fn respond_to_request(req: Request<Incoming>, state: &State) -> Response<ResponseBody> {
    route(&req, state)
}

pub fn route<B>(req: &Request<B>, state: &State) -> Response<ResponseBody> {
    let host = request_host(req);
    match &state.admin_host {
        Some(admin_host) if is_admin_request(req, host, admin_host) => {
            admin::respond(req, host, &*state.redirects)
        }
        _ => resolve::respond(req, host, &*state.redirects),
    }
}

fn request_host<B>(req: &Request<B>) -> &str {
    req.headers()
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| req.uri().authority().map(Authority::as_str))
        .unwrap_or_default()
}

fn is_admin_request<B>(req: &Request<B>, host: &str, admin_host: &str) -> bool {
    let host_matches = host == admin_host
        || host
            .parse::<Authority>()
            .is_ok_and(|authority| authority.host() == admin_host);
    let under_base = req
        .uri()
        .path()
        .strip_prefix(BASE_PATH)
        .is_some_and(|rest| rest.starts_with('/'));
    host_matches && under_base
}

pub fn not_found() -> Response<ResponseBody> {
    let mut resp = Response::new(body::full("404 page not found\n"));
    *resp.status_mut() = StatusCode::NOT_FOUND;
    resp
}
