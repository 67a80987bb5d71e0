use std::sync::Arc;

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::config::PrometheusConfig;
use crate::frame::{build_frames, SeriesFrame};
use crate::model::{RuleMeta, StateTransition};
use crate::writer::{SeriesWriter, WriteError};

#[derive(Debug, Clone)]
pub struct HistoryQuery {
    pub rule_uid: String,
    pub org_id: i64,
    pub from_ms: i64,
    pub to_ms: i64,
}

#[derive(Debug)]
pub enum QueryError {
    Unsupported,
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported => write!(f, "prometheus historian backend does not support querying"),
        }
    }
}

impl std::error::Error for QueryError {}

pub struct RemotePrometheusBackend {
    cfg: PrometheusConfig,
    writer: Arc<dyn SeriesWriter>,
}

impl RemotePrometheusBackend {
    pub fn new(cfg: PrometheusConfig, writer: Arc<dyn SeriesWriter>) -> Self {
        tracing::info!(datasource_uid = %cfg.datasource_uid, "initializing remote Prometheus backend");
        Self { cfg, writer }
    }

    pub fn record(
        &self,
        ctx: CancellationToken,
        rule: &RuleMeta,
        transitions: &[StateTransition],
    ) -> oneshot::Receiver<Result<(), WriteError>> {
        let (tx, rx) = oneshot::channel();

        if transitions.is_empty() {
            let _ = tx.send(Ok(()));
            return rx;
        }

        let mut frames = Vec::with_capacity(transitions.len() * 2);
        for transition in transitions {
            frames.extend(build_frames(&self.cfg.metric_name, rule, transition));
        }

        if frames.is_empty() {
            tracing::debug!("no frames generated for alert state metric, nothing to write");
            let _ = tx.send(Ok(()));
            return rx;
        }

        let first = &transitions[0];
        let time_ms = first.last_eval_ms;
        let org_id = first.org_id;

        let writer = Arc::clone(&self.writer);
        let datasource_uid = self.cfg.datasource_uid.clone();
        let metric_name = self.cfg.metric_name.clone();

        tokio::spawn(async move {
            let write_ctx = ctx.clone();
            let result = tokio::select! {
                _ = ctx.cancelled() => Err(WriteError::Canceled),
                res = writer.write_datasource(
                    write_ctx,
                    &datasource_uid,
                    &metric_name,
                    time_ms,
                    &frames,
                    org_id,
                    None,
                ) => res,
            };

            if let Err(e) = &result {
                tracing::error!(error = %e, "failed to write alert state metrics batch");
            }
            let _ = tx.send(result);
        });

        rx
    }

    pub fn query(&self, _query: &HistoryQuery) -> Result<Vec<SeriesFrame>, QueryError> {
        Err(QueryError::Unsupported)
    }
}
