//! Media storage adapter.

mod http_media_storage;

pub use http_media_storage::HttpMediaStorage;
