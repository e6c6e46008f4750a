//! Read-only resource tables
//!
//! The resolver middleware never touches an asset bundle directly; it is
//! handed a [`ResourceTable`] built once at startup. [`EmbeddedSite`]
//! adapts a compile-time `rust-embed` bundle, [`MemoryResources`] backs
//! the table with a plain map for tests and for hosts that assemble the
//! bundle themselves.

use bytes::Bytes;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Immutable lookup from resource name to payload
///
/// Names are the slash-separated relative paths of the bundled files
/// (`index.html`, `fonts/title.woff2`). Implementations must be cheap to
/// query; the resolver looks a name up freshly on every request.
pub trait ResourceTable: Send + Sync {
    /// Resolve a resource name to its payload, if bundled
    fn get(&self, name: &str) -> Option<Bytes>;
}

/// Resource table over a compile-time embedded asset bundle
pub struct EmbeddedSite<A> {
    _bundle: PhantomData<fn() -> A>,
}

impl<A: RustEmbed> EmbeddedSite<A> {
    /// Create a table over the bundle `A`
    pub fn new() -> Self {
        Self {
            _bundle: PhantomData,
        }
    }
}

impl<A: RustEmbed> Default for EmbeddedSite<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: RustEmbed> ResourceTable for EmbeddedSite<A> {
    fn get(&self, name: &str) -> Option<Bytes> {
        let file = A::get(name)?;
        Some(match file.data {
            Cow::Borrowed(data) => Bytes::from_static(data),
            Cow::Owned(data) => Bytes::from(data),
        })
    }
}

/// The documentation UI bundled with this crate
///
/// The bootstrap page lives in `site/`; the third-party UI dist files are
/// dropped in next to it at packaging time.
#[derive(RustEmbed)]
#[folder = "site/"]
pub struct SiteAssets;

/// The default bundled-site table
pub type DefaultSite = EmbeddedSite<SiteAssets>;

/// In-memory resource table
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    entries: HashMap<String, Bytes>,
}

impl MemoryResources {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any previous payload under `name`
    pub fn insert(mut self, name: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        self.entries.insert(name.into(), payload.into());
        self
    }
}

impl ResourceTable for MemoryResources {
    fn get(&self, name: &str) -> Option<Bytes> {
        self.entries.get(name).cloned()
    }
}
