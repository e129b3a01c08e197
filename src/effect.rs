//! Effects - side effects declared by the reducer.
//!
//! Effects are returned from the reducer and executed by the main loop,
//! keeping the reducer pure while async work stays explicit.

use serde_json::{Map, Value};

use crate::registry::ActionName;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// POST the payload to the proxy endpoint for `action`.
    CallProxy {
        action: ActionName,
        payload: Map<String, Value>,
        /// Bind token of the submitting dispatch; the completion echoes it.
        generation: u64,
    },
}
