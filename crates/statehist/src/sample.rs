use crate::model::StateTransition;
use crate::state::EvalState;

pub const STALE_NAN_BITS: u64 = 0x7ff0_0000_0000_0002;
pub const STALE_NAN: f64 = f64::from_bits(STALE_NAN_BITS);

pub const ACTIVE_VALUE: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub value: f64,
    pub grafana_state: &'static str,
    pub prom_state: &'static str,
}

impl Sample {
    fn stale(state: EvalState) -> Self {
        Self {
            value: STALE_NAN,
            grafana_state: state.as_str(),
            prom_state: state.prometheus_label(),
        }
    }

    fn active(state: EvalState) -> Self {
        Self {
            value: ACTIVE_VALUE,
            grafana_state: state.as_str(),
            prom_state: state.prometheus_label(),
        }
    }

    pub fn is_stale(&self) -> bool {
        self.value.to_bits() == STALE_NAN_BITS
    }
}

pub fn state_samples(transition: &StateTransition) -> Vec<Sample> {
    let prev = transition.previous_state;
    let curr = transition.current_state;

    let mut samples = Vec::with_capacity(2);

    if prev.emits_metrics() && prev != curr {
        samples.push(Sample::stale(prev));
    }

    if curr.emits_metrics() {
        samples.push(Sample::active(curr));
    }

    samples
}
