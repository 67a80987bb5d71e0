use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::state::EvalState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateTransition {
    pub previous_state: EvalState,
    pub current_state: EvalState,
    pub labels: HashMap<String, String>,
    pub rule_uid: String,
    pub org_id: i64,
    pub last_eval_ms: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMeta {
    pub title: String,
}
