use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::body::Bytes;
use std::convert::Infallible;

pub type ResponseBody = BoxBody<Bytes, Infallible>;

pub fn empty() -> ResponseBody {
    Empty::<Bytes>::new().boxed()
}

pub fn full(bytes: impl Into<Bytes>) -> ResponseBody {
    Full::new(bytes.into()).boxed()
}
