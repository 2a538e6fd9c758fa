use async_trait::async_trait;
use serde_json::json;

use crate::action::{Action, ActionExample, ActionOptions, ActionReply, IncomingMessage};
use crate::analyze_market::ANALYZE_MARKET;
use crate::state::SessionState;
use crate::types::{format_amount, format_datetime};

pub const SHOW_MARKET_DATA: &str = "show_market_data";

const TRIGGERS: [&str; 4] = ["numbers", "data", "stats", "break down"];

const SIMILES: &[&str] = &[
    "show me the data",
    "show the data",
    "show market data",
    "display data",
    "show numbers",
    "show stats",
    "show breakdown",
    "give me the data",
    "what are the numbers",
    "what's the data",
    "what are the stats",
    "numbers",
    "data",
    "stats",
];

const EXAMPLES: &[ActionExample] = &[ActionExample {
    user: "show me the numbers",
    assistant: "Here's the market data...",
}];

/// 把上一轮分析的快照原样展示出来，不发起任何网络请求
pub struct ShowMarketData;

#[async_trait]
impl Action for ShowMarketData {
    fn name(&self) -> &'static str {
        SHOW_MARKET_DATA
    }

    fn description(&self) -> &'static str {
        "Shows detailed market data for a previously analyzed market"
    }

    fn similes(&self) -> &'static [&'static str] {
        SIMILES
    }

    fn examples(&self) -> &'static [ActionExample] {
        EXAMPLES
    }

    fn validate(&self, message: &IncomingMessage, state: Option<&SessionState>) -> bool {
        let text = message.text.to_lowercase();
        let has_trigger = TRIGGERS.iter().any(|t| text.contains(t));

        has_trigger
            && state
                .map(|s| s.snapshot_after(ANALYZE_MARKET).is_some())
                .unwrap_or(false)
    }

    async fn handle(
        &self,
        _message: &IncomingMessage,
        state: &mut SessionState,
        _options: &ActionOptions,
    ) -> ActionReply {
        let Some(snapshot) = state.snapshot_after(ANALYZE_MARKET) else {
            return ActionReply {
                text: "I need you to analyze a market first before I can show you the numbers. \
                       Try 'analyze market <ID>' first."
                    .to_string(),
                payload: None,
                succeeded: false,
            };
        };

        let text = format!(
            "Raw Market Data:\n\
             Question: {}\n\
             Probability: {:.1}%\n\
             Volume (24h): ${}\n\
             Outcomes: {}\n\
             Prices: {}\n\
             Last Updated: {}\n\
             End Date: {}",
            snapshot.question,
            snapshot.probability,
            format_amount(snapshot.volume_24h),
            snapshot.outcomes.join(" vs "),
            snapshot.prices.join(" vs "),
            format_datetime(&snapshot.last_updated),
            format_datetime(&snapshot.end_date),
        );

        ActionReply::success_with(
            text,
            json!({
                "market_id": snapshot.market_id,
                "analysis": snapshot,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MarketRecord, MarketSnapshot, MaybeEncodedList};

    fn analyzed_state() -> SessionState {
        let record = MarketRecord {
            market_id: "523138".to_string(),
            question: "Will X happen?".to_string(),
            description: None,
            volume_24h: 10000.0,
            active: Some(true),
            end_date: "2024-12-31T00:00:00Z".to_string(),
            outcomes: MaybeEncodedList::List(vec!["Yes".to_string(), "No".to_string()]),
            outcome_prices: MaybeEncodedList::List(vec![
                "0.655".to_string(),
                "0.345".to_string(),
            ]),
            last_updated: "2024-03-20T12:00:00Z".to_string(),
        };

        let mut state = SessionState::default();
        state.record_analysis(
            ANALYZE_MARKET,
            MarketSnapshot::from_record("523138", &record).unwrap(),
        );
        state
    }

    #[test]
    fn validator_needs_trigger_and_fresh_analysis() {
        let action = ShowMarketData;
        let message = IncomingMessage::new("show me the numbers");

        assert!(!action.validate(&message, None));
        assert!(!action.validate(&message, Some(&SessionState::default())));

        let state = analyzed_state();
        assert!(action.validate(&message, Some(&state)));
        assert!(action.validate(&IncomingMessage::new("break down the stats"), Some(&state)));
        assert!(!action.validate(&IncomingMessage::new("what a day"), Some(&state)));
    }

    #[test]
    fn validator_rejects_stale_snapshot_after_unrelated_turn() {
        let action = ShowMarketData;
        let mut state = analyzed_state();
        state.last_action = Some("get_insights".to_string());

        assert!(!action.validate(&IncomingMessage::new("show me the data"), Some(&state)));
    }

    #[test]
    fn renders_all_stored_fields() {
        tokio_test::block_on(async {
            let action = ShowMarketData;
            let mut state = analyzed_state();

            let reply = action
                .handle(
                    &IncomingMessage::new("numbers"),
                    &mut state,
                    &ActionOptions::new(),
                )
                .await;

            assert!(reply.succeeded);
            assert!(reply.text.contains("Question: Will X happen?"));
            assert!(reply.text.contains("Probability: 65.5%"));
            assert!(reply.text.contains("Volume (24h): $10,000"));
            assert!(reply.text.contains("Outcomes: Yes vs No"));
            assert!(reply.text.contains("Prices: 0.655 vs 0.345"));
        });
    }

    #[test]
    fn without_snapshot_returns_guidance() {
        tokio_test::block_on(async {
            let action = ShowMarketData;
            let mut state = SessionState::default();

            let reply = action
                .handle(
                    &IncomingMessage::new("numbers"),
                    &mut state,
                    &ActionOptions::new(),
                )
                .await;

            assert!(!reply.succeeded);
            assert!(reply.text.contains("analyze a market first"));
        });
    }
}
