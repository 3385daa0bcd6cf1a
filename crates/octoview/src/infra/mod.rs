//! Infrastructure adapters: HTTP transport, credential storage, and the
//! GitHub contents client built on top of them.

pub mod credentials;
pub mod github;
pub mod transport;
