use async_trait::async_trait;

use crate::domain::{ExportDocument, ExtractedRecord, SessionRow};
use crate::error::ExtractError;

pub use crate::error::Result;

/// Source of device-session rows.
///
/// Implementations own the underlying connection. `close` must be callable
/// on every path, including after a failed `connect`, and is a no-op when
/// nothing is open.
#[async_trait]
pub trait SessionRepository: Send {
    async fn connect(&mut self) -> Result<()>;

    /// Fetches every jid from the device-session table, in database order.
    async fn fetch_all_jids(&mut self) -> Result<Vec<SessionRow>>;

    async fn close(&mut self) -> Result<()>;
}

/// Destination for the finished export document.
pub trait ExportWriter: Send + Sync {
    fn write(&self, document: &ExportDocument) -> Result<()>;
}

/// Observational progress output, one hook per run stage.
/// Implementations must not affect the pipeline's outcome.
pub trait Reporter: Send + Sync {
    fn starting(&self);
    fn connected(&self);
    fn querying(&self);
    fn no_sessions(&self);
    fn sessions_found(&self, count: usize);
    fn record_extracted(&self, index: usize, record: &ExtractedRecord);
    fn export_written(&self, distinct: usize);
    fn error(&self, error: &ExtractError);
    fn finished(&self);
}
