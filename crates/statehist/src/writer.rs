use std::collections::HashMap;

use tokio_util::sync::CancellationToken;

use crate::frame::SeriesFrame;

#[derive(Debug)]
pub enum WriteError {
    Sink(String),
    Canceled,
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sink(e) => write!(f, "sink: {e}"),
            Self::Canceled => write!(f, "write canceled"),
        }
    }
}

impl std::error::Error for WriteError {}

#[async_trait::async_trait]
pub trait SeriesWriter: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    async fn write_datasource(
        &self,
        ctx: CancellationToken,
        datasource_uid: &str,
        metric_name: &str,
        time_ms: i64,
        frames: &[SeriesFrame],
        org_id: i64,
        extra_labels: Option<&HashMap<String, String>>,
    ) -> Result<(), WriteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let e = WriteError::Sink("connection refused".into());
        assert!(e.to_string().contains("sink"));
        assert!(e.to_string().contains("connection refused"));
        assert!(WriteError::Canceled.to_string().contains("canceled"));
    }
}
