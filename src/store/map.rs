use crate::store::{Redirect, Redirector, Snapshot, StoreError};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory store. A single reader-writer lock guards the whole two-level map,
/// so readers never see a host bucket without its path entry.
///
/// Host buckets are pruned as soon as they become empty.
#[derive(Debug, Default)]
pub struct MapRedirector {
    hosts: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl MapRedirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let hosts: HashMap<_, _> = snapshot
            .into_iter()
            .filter(|(hostname, _)| !hostname.is_empty())
            .map(|(hostname, mut urls)| {
                urls.retain(|url, _| !url.is_empty());
                (hostname, urls)
            })
            .filter(|(_, urls)| !urls.is_empty())
            .collect();
        Self {
            hosts: RwLock::new(hosts),
        }
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(Self::from_snapshot(crate::store::decode_snapshot(bytes)?))
    }

    pub fn len(&self) -> usize {
        self.hosts.read().values().map(HashMap::len).sum()
    }
}

fn flatten<'a>(
    hosts: impl IntoIterator<Item = (&'a String, &'a HashMap<String, String>)>,
) -> Vec<Redirect> {
    hosts
        .into_iter()
        .flat_map(|(hostname, urls)| {
            urls.iter()
                .map(move |(url, target)| Redirect::new(hostname, url, target))
        })
        .collect()
}

impl Redirector for MapRedirector {
    fn target(&self, hostname: &str, path: &str) -> Result<String, StoreError> {
        let target = self
            .hosts
            .read()
            .get(hostname)
            .and_then(|urls| urls.get(path))
            .cloned();
        match target {
            Some(target) => {
                log::trace!("{}{} -> {}", hostname, path, target);
                Ok(target)
            }
            None => Err(StoreError::NotFound {
                hostname: hostname.to_string(),
                path: path.to_string(),
            }),
        }
    }

    fn all(&self) -> Vec<Redirect> {
        flatten(self.hosts.read().iter())
    }

    fn for_host(&self, hostname: &str) -> Vec<Redirect> {
        log::debug!("Listing redirects for {}", hostname);
        let hosts = self.hosts.read();
        flatten(hosts.get_key_value(hostname))
    }

    fn get(&self, hostname: &str, path: &str) -> Option<Redirect> {
        log::debug!("Looking up redirect for {}{}", hostname, path);
        let hosts = self.hosts.read();
        let target = hosts.get(hostname)?.get(path)?;
        Some(Redirect::new(hostname, path, target))
    }

    fn add(&self, redirect: Redirect) -> Result<(), StoreError> {
        let Redirect {
            hostname,
            url,
            target,
        } = redirect;
        if hostname.is_empty() {
            return Err(StoreError::EmptyHostname);
        }
        if url.is_empty() {
            return Err(StoreError::EmptyPath);
        }
        log::info!("Adding {}{} -> {}", hostname, url, target);
        self.hosts
            .write()
            .entry(hostname)
            .or_default()
            .insert(url, target);
        Ok(())
    }

    fn remove(&self, hostname: &str, path: &str) {
        let removed = {
            let mut hosts = self.hosts.write();
            let Some(urls) = hosts.get_mut(hostname) else {
                return;
            };
            let removed = urls.remove(path).is_some();
            if urls.is_empty() {
                hosts.remove(hostname);
            }
            removed
        };
        if removed {
            log::info!("Removed {}{}", hostname, path);
        }
    }

    fn remove_host(&self, hostname: &str) {
        let removed = self.hosts.write().remove(hostname);
        if let Some(urls) = removed {
            log::info!("Removed {} ({} redirects)", hostname, urls.len());
        }
    }

    fn snapshot(&self) -> Snapshot {
        self.hosts.read().clone()
    }
}
