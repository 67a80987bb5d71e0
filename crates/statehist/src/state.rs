use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvalState {
    Normal,
    Pending,
    Alerting,
    Recovering,
    NoData,
    Error,
}

impl EvalState {
    pub fn emits_metrics(self) -> bool {
        match self {
            Self::Pending | Self::Alerting | Self::Recovering | Self::NoData | Self::Error => true,
            Self::Normal => false,
        }
    }

    pub fn prometheus_label(self) -> &'static str {
        match self {
            Self::Alerting | Self::Recovering => "firing",
            Self::Normal => "normal",
            Self::Pending => "pending",
            Self::NoData => "nodata",
            Self::Error => "error",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Pending => "pending",
            Self::Alerting => "alerting",
            Self::Recovering => "recovering",
            Self::NoData => "nodata",
            Self::Error => "error",
        }
    }
}
