use crate::body::{self, ResponseBody};
use crate::server::routes::not_found;
use crate::store::Redirector;
use http::HeaderValue;
use hyper::header::LOCATION;
use hyper::{Request, Response, StatusCode, Uri};
use std::borrow::Cow;

pub fn respond<B>(req: &Request<B>, host: &str, redirects: &dyn Redirector) -> Response<ResponseBody> {
    let path = decoded_path(req.uri());

    let target = match redirects.target(host, &path) {
        Ok(target) => target,
        Err(e) => {
            log::info!("{} {}{} -> [no match]", req.method(), host, req.uri());
            log::debug!("{}", e);
            return not_found();
        }
    };

    match HeaderValue::from_str(&target) {
        Ok(location) => {
            log::info!("{} {}{} -> {}", req.method(), host, req.uri(), target);
            let mut resp = Response::new(body::empty());
            *resp.status_mut() = StatusCode::TEMPORARY_REDIRECT;
            resp.headers_mut().insert(LOCATION, location);
            resp
        }
        Err(e) => {
            log::warn!(
                "{} {}{} -> [invalid target] {:?} : {}",
                req.method(),
                host,
                req.uri(),
                target,
                e
            );
            let mut resp = Response::new(body::empty());
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            resp
        }
    }
}

/// Percent-decoded path, or the raw path if it doesn't decode to UTF-8.
fn decoded_path(uri: &Uri) -> Cow<'_, str> {
    let path = uri.path();
    urlencoding::decode(path).unwrap_or(Cow::Borrowed(path))
}
