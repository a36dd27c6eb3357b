//! Session store abstraction over an expiring key-value backend.

use std::time::Duration;

use crate::Error;
use crate::results::ResultSet;
use crate::session::SessionId;

/// Expiring storage of result sets keyed by session.
///
/// Implementations give single-key atomicity only. A miss, an expired entry,
/// and an undecodable entry all read back as `Ok(None)`.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Replace the entry for `id`, resetting its expiry to `ttl` from now.
    async fn put(&self, id: &SessionId, results: &ResultSet, ttl: Duration) -> Result<(), Error>;

    /// Read the live entry for `id`. Reads never extend the expiry.
    async fn get(&self, id: &SessionId) -> Result<Option<ResultSet>, Error>;
}
