use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info};
use serde_json::{json, Value};

use crate::action::{Action, ActionExample, ActionOptions, ActionReply, IncomingMessage};
use crate::source::InsightsSource;
use crate::state::SessionState;
use crate::types::InsightsReport;

pub const GET_INSIGHTS: &str = "get_insights";

const DEFAULT_MAX_LOOPS: u32 = 1;

const SIMILES: &[&str] = &[
    "analyze topic",
    "get analysis",
    "research topic",
    "investigate issue",
    "explore subject",
    "provide insights",
    "gather information",
    "look into this",
    "delve deeper",
    "study matter",
];

const EXAMPLES: &[ActionExample] = &[
    ActionExample {
        user: "What are the trends in AI development?",
        assistant: "Let me analyze that topic for you",
    },
    ActionExample {
        user: "Can you analyze the crypto market?",
        assistant: "I'll get some insights on that",
    },
    ActionExample {
        user: "What's happening with the economy right now?",
        assistant: "I'll get you some insights on the current economic situation.",
    },
];

/// 读取 max_loops 选项；不是正整数的值一律回退到默认值
fn max_loops_from(options: &ActionOptions) -> u32 {
    options
        .get("max_loops")
        .and_then(Value::as_u64)
        .filter(|&n| n >= 1)
        .map(|n| n.min(u32::MAX as u64) as u32)
        .unwrap_or(DEFAULT_MAX_LOOPS)
}

fn format_report(report: &InsightsReport) -> String {
    let sources = report
        .sources
        .iter()
        .map(|source| format!("- {}", source))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Analysis: {}\n\nSources:\n{}", report.analysis, sources)
}

pub struct GetInsights {
    insights: Arc<dyn InsightsSource>,
}

impl GetInsights {
    pub fn new(insights: Arc<dyn InsightsSource>) -> Self {
        Self { insights }
    }
}

#[async_trait]
impl Action for GetInsights {
    fn name(&self) -> &'static str {
        GET_INSIGHTS
    }

    fn description(&self) -> &'static str {
        "Get insights and analysis on a specific topic. Useful for understanding \
         complex issues or getting up-to-date information on current events."
    }

    fn similes(&self) -> &'static [&'static str] {
        SIMILES
    }

    fn examples(&self) -> &'static [ActionExample] {
        EXAMPLES
    }

    fn validate(&self, message: &IncomingMessage, _state: Option<&SessionState>) -> bool {
        !message.text.trim().is_empty()
    }

    async fn handle(
        &self,
        message: &IncomingMessage,
        _state: &mut SessionState,
        options: &ActionOptions,
    ) -> ActionReply {
        let max_loops = max_loops_from(options);
        info!("主题分析: max_loops={}", max_loops);

        match self.insights.get_insights(&message.text, max_loops).await {
            Ok(report) => ActionReply::success_with(
                format_report(&report),
                json!({
                    "analysis": report.analysis,
                    "sources": report.sources,
                }),
            ),
            Err(err) => {
                error!("主题分析失败: {}", err);
                ActionReply::failure(
                    format!("Failed to get insights: {}", err),
                    "INSIGHTS_ERROR",
                    &err.to_string(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PluginError, Result};

    struct FixedInsights;

    #[async_trait]
    impl InsightsSource for FixedInsights {
        async fn get_insights(&self, _topic: &str, _max_loops: u32) -> Result<InsightsReport> {
            Ok(InsightsReport {
                analysis: "Sample analysis".to_string(),
                sources: vec!["source1".to_string(), "source2".to_string()],
            })
        }
    }

    struct FailingInsights;

    #[async_trait]
    impl InsightsSource for FailingInsights {
        async fn get_insights(&self, _topic: &str, _max_loops: u32) -> Result<InsightsReport> {
            Err(PluginError::RemoteApi {
                status: 500,
                body: "analysis backend down".to_string(),
            })
        }
    }

    struct RecordingInsights(std::sync::Mutex<Vec<u32>>);

    #[async_trait]
    impl InsightsSource for RecordingInsights {
        async fn get_insights(&self, _topic: &str, max_loops: u32) -> Result<InsightsReport> {
            self.0.lock().unwrap().push(max_loops);
            Ok(InsightsReport {
                analysis: String::new(),
                sources: Vec::new(),
            })
        }
    }

    #[test]
    fn validator_requires_non_empty_text() {
        let action = GetInsights::new(Arc::new(FixedInsights));
        assert!(action.validate(&IncomingMessage::new("what about rates?"), None));
        assert!(!action.validate(&IncomingMessage::new(""), None));
        assert!(!action.validate(&IncomingMessage::new("   "), None));
    }

    #[tokio::test]
    async fn reply_lists_analysis_and_sources() {
        let action = GetInsights::new(Arc::new(FixedInsights));
        let mut state = SessionState::default();

        let reply = action
            .handle(
                &IncomingMessage::new("What are the trends in AI development?"),
                &mut state,
                &ActionOptions::new(),
            )
            .await;

        assert!(reply.succeeded);
        assert!(reply.text.contains("Sample analysis"));
        assert!(reply.text.contains("- source1"));
        assert!(reply.text.contains("- source2"));
    }

    #[tokio::test]
    async fn failure_surfaces_error_without_touching_state() {
        let action = GetInsights::new(Arc::new(FailingInsights));
        let mut state = SessionState::default();

        let reply = action
            .handle(
                &IncomingMessage::new("What about the economy?"),
                &mut state,
                &ActionOptions::new(),
            )
            .await;

        assert!(!reply.succeeded);
        assert!(reply.text.contains("Failed to get insights"));
        assert!(reply.text.contains("analysis backend down"));
        assert!(state.last_action.is_none());
        assert!(state.market_snapshot.is_none());
    }

    #[tokio::test]
    async fn max_loops_clamps_invalid_values_to_default() {
        let recorder = Arc::new(RecordingInsights(std::sync::Mutex::new(Vec::new())));
        let action = GetInsights::new(recorder.clone());
        let mut state = SessionState::default();
        let message = IncomingMessage::new("topic");

        for raw in [json!(3), json!(0), json!(-2), json!(1.5), json!("four"), json!(null)] {
            let mut options = ActionOptions::new();
            options.insert("max_loops".to_string(), raw);
            action.handle(&message, &mut state, &options).await;
        }
        // 没有 max_loops 时也走默认值
        action.handle(&message, &mut state, &ActionOptions::new()).await;

        assert_eq!(*recorder.0.lock().unwrap(), vec![3, 1, 1, 1, 1, 1, 1]);
    }
}
