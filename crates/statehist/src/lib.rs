mod backend;
mod config;
mod frame;
mod model;
mod sample;
mod state;
mod writer;

pub use backend::{HistoryQuery, QueryError, RemotePrometheusBackend};
pub use config::{ConfigError, PrometheusConfig};
pub use frame::{
    build_frames, FrameMeta, FrameType, SeriesFrame, ValueField, ALERT_NAME_LABEL,
    ALERT_RULE_UID_LABEL, ALERT_STATE_LABEL, GRAFANA_ALERT_STATE_LABEL,
    NUMERIC_MULTI_VERSION_LATEST,
};
pub use model::{RuleMeta, StateTransition};
pub use sample::{state_samples, Sample, ACTIVE_VALUE, STALE_NAN, STALE_NAN_BITS};
pub use state::EvalState;
pub use writer::{SeriesWriter, WriteError};
