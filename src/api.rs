//! Wire contract of the admin API, shared by the server and the client.
//!
//! Requests are `GET <admin host>/redirects/<command>?host=..&url=..&target=..`,
//! answered with an [`Envelope`] as JSON.

use crate::store::Redirect;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use url::form_urlencoded;

pub const BASE_PATH: &str = "/redirects";

pub const MALFORMED: &str = "request malformed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Ping,
    List,
    Add,
    Delete,
    DeleteHost,
}

impl Command {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "ping" => Some(Self::Ping),
            "list" => Some(Self::List),
            "add" => Some(Self::Add),
            "delete" => Some(Self::Delete),
            "deleteHost" => Some(Self::DeleteHost),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::List => "list",
            Self::Add => "add",
            Self::Delete => "delete",
            Self::DeleteHost => "deleteHost",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters of an admin request. Absent parameters are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub host: String,
    pub url: String,
    pub target: String,
}

impl Params {
    /// Parses a query string; the first occurrence of each key wins.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut host = None;
        let mut url = None;
        let mut target = None;
        for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            let slot = match &*key {
                "host" => &mut host,
                "url" => &mut url,
                "target" => &mut target,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        Self {
            host: host.unwrap_or_default(),
            url: url.unwrap_or_default(),
            target: target.unwrap_or_default(),
        }
    }

    /// Encodes the non-empty parameters as a query string.
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in [("host", &self.host), ("url", &self.url), ("target", &self.target)] {
            if !value.is_empty() {
                query.append_pair(key, value);
            }
        }
        query.finish()
    }
}

/// Uniform response body of every admin command.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "Status")]
    pub status: bool,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Content")]
    pub content: Option<Vec<Redirect>>,
}

impl Envelope {
    pub fn success(message: impl Into<String>, content: Option<Vec<Redirect>>) -> Self {
        Self {
            status: true,
            message: message.into(),
            content,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            content: None,
        }
    }
}
