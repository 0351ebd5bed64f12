//! Tracing integration.
//!
//! The style system never installs a subscriber. It emits events through the
//! `tracing` crate under the targets below, so hosts can filter them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("flair_style::codec=debug")
//!     .init();
//! ```
//!
//! Nothing here is an error path. Unregistered kinds and malformed entries are
//! expected when style data crosses application versions, so they are reported
//! as `debug`/`warn` events and otherwise ignored.

/// Target names for log filtering.
pub mod targets {
    /// Kind registration.
    pub const REGISTRY: &str = "flair_style::registry";
    /// Style map equality, hashing and typed access.
    pub const STYLE: &str = "flair_style::style";
    /// Structured encode/decode.
    pub const CODEC: &str = "flair_style::codec";
    /// Selection merge requests.
    pub const SELECTION: &str = "flair_style::selection";
}
