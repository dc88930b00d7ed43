/// Dependency resolution domain: graph model, batching and tree rendering.
///
/// Nothing in here performs I/O. Network access goes through the
/// `EdgeProvider` port and is driven by the application layer.
pub mod domain;
pub mod services;
