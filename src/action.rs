use async_trait::async_trait;
use serde_json::{json, Value};

use crate::state::SessionState;

/// A single user turn as delivered by the host runtime.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub text: String,
}

impl IncomingMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Free-form per-call options forwarded by the host.
pub type ActionOptions = serde_json::Map<String, Value>;

/// Worked user/assistant exchange advertised to the host for action selection.
#[derive(Debug, Clone, Copy)]
pub struct ActionExample {
    pub user: &'static str,
    pub assistant: &'static str,
}

/// Unified action result: reply text, optional structured payload, success flag.
#[derive(Debug, Clone)]
pub struct ActionReply {
    pub text: String,
    pub payload: Option<Value>,
    pub succeeded: bool,
}

impl ActionReply {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            payload: None,
            succeeded: true,
        }
    }

    pub fn success_with(text: impl Into<String>, payload: Value) -> Self {
        Self {
            text: text.into(),
            payload: Some(payload),
            succeeded: true,
        }
    }

    /// A user-safe failure reply carrying the internal error code and message.
    pub fn failure(text: impl Into<String>, code: &str, message: &str) -> Self {
        Self {
            text: text.into(),
            payload: Some(json!({
                "error": {
                    "code": code,
                    "message": message,
                }
            })),
            succeeded: false,
        }
    }
}

/// Contract between the host runtime and a plugin action.
///
/// The host calls `validate` to decide eligibility for a turn; if it returns
/// true, `handle` produces the reply and may mutate the session state.
/// `handle` never fails past this boundary — errors become apology replies.
#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Trigger-phrase hints for the host's action selection.
    fn similes(&self) -> &'static [&'static str];

    fn examples(&self) -> &'static [ActionExample];

    fn validate(&self, message: &IncomingMessage, state: Option<&SessionState>) -> bool;

    async fn handle(
        &self,
        message: &IncomingMessage,
        state: &mut SessionState,
        options: &ActionOptions,
    ) -> ActionReply;
}
