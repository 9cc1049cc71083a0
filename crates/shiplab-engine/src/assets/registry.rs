use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use anyhow::Result;

use super::texture::{Texture, TextureHandle};

/// Loader for named content. Implemented by the host.
pub trait AssetSource {
    /// Attempts to load `key`.
    ///
    /// - `Ok(Some(_))`: loaded
    /// - `Ok(None)`: not ready yet; the registry retries on a later poll
    /// - `Err(_)`: permanent failure; the asset resolves without content
    fn load(&mut self, key: &str) -> Result<Option<Texture>>;
}

/// Per-asset load state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Pending,
    Loaded(TextureHandle),
    Failed,
}

impl LoadStatus {
    #[inline]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, LoadStatus::Pending)
    }
}

/// Shared asset registry.
///
/// Requests are served in FIFO order. An asset that is not ready blocks the
/// queue for the rest of the poll, so load order matches request order.
pub struct AssetRegistry {
    source: Box<dyn AssetSource>,
    entries: HashMap<String, LoadStatus>,
    queue: VecDeque<String>,
}

impl AssetRegistry {
    pub fn new(source: Box<dyn AssetSource>) -> Self {
        Self {
            source,
            entries: HashMap::new(),
            queue: VecDeque::new(),
        }
    }

    /// Queues `key` for incremental loading. Repeated requests are ignored.
    pub fn request(&mut self, key: impl Into<String>) {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return;
        }
        self.entries.insert(key.clone(), LoadStatus::Pending);
        self.queue.push_back(key);
    }

    /// Loads `key` immediately, bypassing the queue.
    ///
    /// Used for the handful of assets the loading screen itself needs. A source
    /// that is not ready yet is treated as a failure here.
    pub fn load_now(&mut self, key: &str) -> Option<TextureHandle> {
        if let Some(LoadStatus::Loaded(handle)) = self.entries.get(key) {
            return Some(Rc::clone(handle));
        }

        let status = match self.source.load(key) {
            Ok(Some(texture)) => LoadStatus::Loaded(Rc::new(texture)),
            Ok(None) => {
                log::error!("asset '{key}' was not ready for a synchronous load");
                LoadStatus::Failed
            }
            Err(e) => {
                log::error!("failed to load asset '{key}': {e:#}");
                LoadStatus::Failed
            }
        };

        self.queue.retain(|queued| queued != key);
        let handle = match &status {
            LoadStatus::Loaded(handle) => Some(Rc::clone(handle)),
            _ => None,
        };
        self.entries.insert(key.to_string(), status);
        handle
    }

    /// Works through at most `budget` queued requests.
    ///
    /// Returns how many requests resolved (loaded or failed) during this call.
    pub fn poll(&mut self, budget: usize) -> usize {
        let mut resolved = 0;

        while resolved < budget {
            let Some(key) = self.queue.pop_front() else {
                break;
            };

            let status = match self.source.load(&key) {
                Ok(Some(texture)) => {
                    log::debug!("loaded asset '{key}' ({}x{})", texture.width(), texture.height());
                    LoadStatus::Loaded(Rc::new(texture))
                }
                Ok(None) => {
                    self.queue.push_front(key);
                    break;
                }
                Err(e) => {
                    log::error!("failed to load asset '{key}': {e:#}");
                    LoadStatus::Failed
                }
            };

            self.entries.insert(key, status);
            resolved += 1;
        }

        resolved
    }

    /// Returns a shared handle to a loaded asset.
    pub fn get(&self, key: &str) -> Option<TextureHandle> {
        match self.entries.get(key) {
            Some(LoadStatus::Loaded(handle)) => Some(Rc::clone(handle)),
            _ => None,
        }
    }

    pub fn status(&self, key: &str) -> Option<&LoadStatus> {
        self.entries.get(key)
    }

    /// Fraction of requested assets that have resolved, in `[0, 1]`.
    ///
    /// An empty registry reports `1.0`.
    pub fn progress(&self) -> f32 {
        let total = self.entries.len();
        if total == 0 {
            return 1.0;
        }
        let resolved = self.entries.values().filter(|s| s.is_resolved()).count();
        resolved as f32 / total as f32
    }

    /// True once every requested asset has resolved.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every registry-held handle and pending request.
    ///
    /// Handles cloned out earlier stay valid until their holders drop them.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    /// Source that needs `delay` polls per asset and fails for keys starting with "bad".
    struct Delayed {
        delay: u32,
        waited: HashMap<String, u32>,
    }

    impl Delayed {
        fn new(delay: u32) -> Self {
            Self { delay, waited: HashMap::new() }
        }
    }

    impl AssetSource for Delayed {
        fn load(&mut self, key: &str) -> Result<Option<Texture>> {
            if key.starts_with("bad") {
                return Err(anyhow!("no such asset"));
            }
            let waited = self.waited.entry(key.to_string()).or_insert(0);
            if *waited < self.delay {
                *waited += 1;
                return Ok(None);
            }
            Ok(Some(Texture::new(key, 16, 8)))
        }
    }

    fn registry(delay: u32) -> AssetRegistry {
        AssetRegistry::new(Box::new(Delayed::new(delay)))
    }

    // ── request / poll ────────────────────────────────────────────────────

    #[test]
    fn empty_registry_is_complete() {
        let reg = registry(0);
        assert!(reg.is_complete());
        assert_eq!(reg.progress(), 1.0);
    }

    #[test]
    fn poll_respects_budget() {
        let mut reg = registry(0);
        for key in ["a", "b", "c"] {
            reg.request(key);
        }
        assert_eq!(reg.poll(2), 2);
        assert!(!reg.is_complete());
        assert_eq!(reg.poll(2), 1);
        assert!(reg.is_complete());
    }

    #[test]
    fn duplicate_request_is_ignored() {
        let mut reg = registry(0);
        reg.request("a");
        reg.request("a");
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.poll(10), 1);
    }

    #[test]
    fn not_ready_asset_blocks_until_ready() {
        let mut reg = registry(2);
        reg.request("a");
        assert_eq!(reg.poll(5), 0);
        assert_eq!(reg.poll(5), 0);
        assert_eq!(reg.status("a"), Some(&LoadStatus::Pending));
        assert_eq!(reg.poll(5), 1);
        assert_eq!(reg.get("a").unwrap().size(), crate::coords::Vec2::new(16.0, 8.0));
    }

    #[test]
    fn failure_resolves_without_content() {
        let mut reg = registry(0);
        reg.request("bad_ship");
        reg.request("ship");
        assert_eq!(reg.poll(10), 2);
        assert!(reg.is_complete());
        assert_eq!(reg.status("bad_ship"), Some(&LoadStatus::Failed));
        assert!(reg.get("bad_ship").is_none());
        assert!(reg.get("ship").is_some());
    }

    #[test]
    fn progress_tracks_resolved_fraction() {
        let mut reg = registry(0);
        for key in ["a", "b", "c", "d"] {
            reg.request(key);
        }
        reg.poll(1);
        assert_eq!(reg.progress(), 0.25);
        reg.poll(3);
        assert_eq!(reg.progress(), 1.0);
    }

    // ── load_now / handles ────────────────────────────────────────────────

    #[test]
    fn load_now_skips_queue() {
        let mut reg = registry(0);
        reg.request("splash");
        assert!(reg.load_now("splash").is_some());
        assert!(reg.is_complete());
    }

    #[test]
    fn load_now_not_ready_is_failure() {
        let mut reg = registry(1);
        assert!(reg.load_now("splash").is_none());
        assert_eq!(reg.status("splash"), Some(&LoadStatus::Failed));
    }

    #[test]
    fn clear_releases_registry_handles_only() {
        let mut reg = registry(0);
        let held = reg.load_now("ship").unwrap();
        let weak = Rc::downgrade(&held);

        reg.clear();
        assert!(reg.is_empty());
        assert!(weak.upgrade().is_some());

        drop(held);
        assert!(weak.upgrade().is_none());
    }
}
