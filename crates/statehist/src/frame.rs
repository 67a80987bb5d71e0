use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::{RuleMeta, StateTransition};
use crate::sample::state_samples;

pub const ALERT_NAME_LABEL: &str = "alertname";
pub const ALERT_STATE_LABEL: &str = "alertstate";
pub const GRAFANA_ALERT_STATE_LABEL: &str = "grafana_alertstate";
pub const ALERT_RULE_UID_LABEL: &str = "rule_uid";

pub const NUMERIC_MULTI_VERSION_LATEST: (u16, u16) = (0, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameType {
    NumericMulti,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMeta {
    pub frame_type: FrameType,
    pub type_version: (u16, u16),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueField {
    pub labels: HashMap<String, String>,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesFrame {
    pub name: String,
    pub field: ValueField,
    pub meta: FrameMeta,
}

fn is_internal_label(key: &str) -> bool {
    key.starts_with("__") && key.ends_with("__")
}

pub fn build_frames(
    metric_name: &str,
    rule: &RuleMeta,
    transition: &StateTransition,
) -> Vec<SeriesFrame> {
    let samples = state_samples(transition);
    let mut frames = Vec::with_capacity(samples.len());

    for sample in samples {
        let mut labels = HashMap::with_capacity(transition.labels.len() + 4);
        for (k, v) in &transition.labels {
            if is_internal_label(k) {
                continue;
            }
            labels.insert(k.clone(), v.clone());
        }

        labels.insert(ALERT_RULE_UID_LABEL.into(), transition.rule_uid.clone());
        labels.insert(ALERT_NAME_LABEL.into(), rule.title.clone());
        labels.insert(ALERT_STATE_LABEL.into(), sample.prom_state.into());
        labels.insert(GRAFANA_ALERT_STATE_LABEL.into(), sample.grafana_state.into());

        tracing::debug!(
            rule_uid = %transition.rule_uid,
            previous_state = ?transition.previous_state,
            current_state = ?transition.current_state,
            rule_title = %rule.title,
            value = sample.value,
            "building alert state series frame"
        );

        frames.push(SeriesFrame {
            name: metric_name.to_string(),
            field: ValueField {
                labels,
                value: sample.value,
            },
            meta: FrameMeta {
                frame_type: FrameType::NumericMulti,
                type_version: NUMERIC_MULTI_VERSION_LATEST,
            },
        });
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::STALE_NAN_BITS;
    use crate::state::EvalState;

    fn rule() -> RuleMeta {
        RuleMeta {
            title: "High CPU".into(),
        }
    }

    fn transition(prev: EvalState, curr: EvalState) -> StateTransition {
        StateTransition {
            previous_state: prev,
            current_state: curr,
            labels: HashMap::from([
                ("host".into(), "srv1".into()),
                ("severity".into(), "critical".into()),
            ]),
            rule_uid: "uid-42".into(),
            org_id: 3,
            last_eval_ms: 1_700_000_000_000,
        }
    }

    #[test]
    fn active_frame_for_normal_to_alerting() {
        let frames = build_frames("GRAFANA_ALERTS", &rule(), &transition(EvalState::Normal, EvalState::Alerting));
        assert_eq!(frames.len(), 1);

        let frame = &frames[0];
        assert_eq!(frame.name, "GRAFANA_ALERTS");
        assert_eq!(frame.field.value, 1.0);
        assert_eq!(frame.field.labels["alertstate"], "firing");
        assert_eq!(frame.field.labels["grafana_alertstate"], "alerting");
        assert_eq!(frame.field.labels["rule_uid"], "uid-42");
        assert_eq!(frame.field.labels["alertname"], "High CPU");
        assert_eq!(frame.field.labels["host"], "srv1");
        assert_eq!(frame.field.labels["severity"], "critical");
    }

    #[test]
    fn stale_frame_for_alerting_to_normal() {
        let frames = build_frames("GRAFANA_ALERTS", &rule(), &transition(EvalState::Alerting, EvalState::Normal));
        assert_eq!(frames.len(), 1);

        let frame = &frames[0];
        assert_eq!(frame.field.value.to_bits(), STALE_NAN_BITS);
        assert_eq!(frame.field.labels["alertstate"], "firing");
        assert_eq!(frame.field.labels["grafana_alertstate"], "alerting");
    }

    #[test]
    fn two_frames_stale_then_active() {
        let frames = build_frames("GRAFANA_ALERTS", &rule(), &transition(EvalState::Pending, EvalState::Error));
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].field.value.to_bits(), STALE_NAN_BITS);
        assert_eq!(frames[0].field.labels["grafana_alertstate"], "pending");
        assert_eq!(frames[1].field.value, 1.0);
        assert_eq!(frames[1].field.labels["grafana_alertstate"], "error");
    }

    #[test]
    fn internal_labels_are_stripped() {
        let mut t = transition(EvalState::Normal, EvalState::Alerting);
        t.labels.insert("__name__".into(), "hidden".into());
        t.labels.insert("__alert_rule_namespace_uid__".into(), "ns".into());
        t.labels.insert("__partial__suffix".into(), "kept".into());
        t.labels.insert("prefix__".into(), "kept".into());

        let frames = build_frames("GRAFANA_ALERTS", &rule(), &t);
        let labels = &frames[0].field.labels;
        assert!(!labels.contains_key("__name__"));
        assert!(!labels.contains_key("__alert_rule_namespace_uid__"));
        assert_eq!(labels["__partial__suffix"], "kept");
        assert_eq!(labels["prefix__"], "kept");
    }

    #[test]
    fn fixed_labels_override_transition_labels() {
        let mut t = transition(EvalState::Normal, EvalState::Alerting);
        t.labels.insert("alertname".into(), "spoofed".into());

        let frames = build_frames("GRAFANA_ALERTS", &rule(), &t);
        assert_eq!(frames[0].field.labels["alertname"], "High CPU");
    }

    #[test]
    fn meta_marks_numeric_multi_latest() {
        let frames = build_frames("GRAFANA_ALERTS", &rule(), &transition(EvalState::Normal, EvalState::Pending));
        assert_eq!(frames[0].meta.frame_type, FrameType::NumericMulti);
        assert_eq!(frames[0].meta.type_version, (0, 1));
    }

    #[test]
    fn no_samples_no_frames() {
        let frames = build_frames("GRAFANA_ALERTS", &rule(), &transition(EvalState::Normal, EvalState::Normal));
        assert!(frames.is_empty());
    }

    #[test]
    fn internal_label_detection() {
        assert!(is_internal_label("__name__"));
        assert!(is_internal_label("__"));
        assert!(!is_internal_label("__prefix"));
        assert!(!is_internal_label("suffix__"));
        assert!(!is_internal_label("plain"));
    }
}
