use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info};
use regex::Regex;
use serde_json::json;

use crate::action::{Action, ActionExample, ActionOptions, ActionReply, IncomingMessage};
use crate::error::{PluginError, Result};
use crate::source::MarketSource;
use crate::state::SessionState;
use crate::types::{format_amount, format_date, MarketSnapshot};

pub const ANALYZE_MARKET: &str = "analyze_market";

const MARKET_ID_PATTERN: &str = r"(?i)market.*?(\d+)";
const FOLLOW_UP_CUES: [&str; 3] = ["numbers", "data", "give me"];

const SIMILES: &[&str] = &[
    "analyze market",
    "check market",
    "market analysis",
    "evaluate market",
    "what do you think about market",
    "assess market",
];

const EXAMPLES: &[ActionExample] = &[ActionExample {
    user: "analyze market 523138",
    assistant: "Let me analyze that market for you...",
}];

/// 提取消息里 "market" 之后出现的第一个数字 ID
pub(crate) fn extract_market_id(text: &str) -> Option<String> {
    let re = Regex::new(MARKET_ID_PATTERN).ok()?;
    re.captures(text).map(|caps| caps[1].to_string())
}

pub struct AnalyzeMarket {
    market: Arc<dyn MarketSource>,
}

impl AnalyzeMarket {
    pub fn new(market: Arc<dyn MarketSource>) -> Self {
        Self { market }
    }

    async fn run(
        &self,
        message: &IncomingMessage,
        state: &mut SessionState,
    ) -> Result<ActionReply> {
        let market_id = extract_market_id(&message.text)
            .ok_or_else(|| PluginError::Validation("消息中没有有效的市场 ID".to_string()))?;

        info!("获取市场 {} 的数据", market_id);
        let record = self.market.get_market(&market_id).await?;
        let snapshot = MarketSnapshot::from_record(&market_id, &record)?;

        let quick_take = record
            .description
            .as_deref()
            .and_then(|d| d.lines().next())
            .unwrap_or("")
            .to_string();

        let text = format!(
            "Eyy, here's what I got on market #{} 🤌\n\n\
             {}\n\n\
             Current Action:\n\
             - {}: {:.1}%\n\
             - {}: {:.1}%\n\n\
             24h Volume: ${}\n\
             End Date: {}\n\n\
             Quick Take: {}\n\n\
             Need any specific angles on these numbers, paisan? 🤌",
            snapshot.market_id,
            snapshot.question,
            snapshot.outcomes[0],
            snapshot.probability,
            snapshot.outcomes[1],
            100.0 - snapshot.probability,
            format_amount(snapshot.volume_24h),
            format_date(&snapshot.end_date),
            quick_take,
        );

        let payload = json!({
            "market_id": snapshot.market_id,
            "analysis": snapshot,
        });

        state.record_analysis(ANALYZE_MARKET, snapshot);

        Ok(ActionReply::success_with(text, payload))
    }
}

#[async_trait]
impl Action for AnalyzeMarket {
    fn name(&self) -> &'static str {
        ANALYZE_MARKET
    }

    fn description(&self) -> &'static str {
        "Analyze market trends, patterns and provide insights"
    }

    fn similes(&self) -> &'static [&'static str] {
        SIMILES
    }

    fn examples(&self) -> &'static [ActionExample] {
        EXAMPLES
    }

    fn validate(&self, message: &IncomingMessage, state: Option<&SessionState>) -> bool {
        let text = message.text.to_lowercase();

        // 有上一轮分析结果时，追问触发词也算有效
        if let Some(state) = state {
            if state.snapshot_after(ANALYZE_MARKET).is_some()
                && FOLLOW_UP_CUES.iter().any(|cue| text.contains(cue))
            {
                return true;
            }
        }

        text.contains("market") && extract_market_id(&message.text).is_some()
    }

    async fn handle(
        &self,
        message: &IncomingMessage,
        state: &mut SessionState,
        _options: &ActionOptions,
    ) -> ActionReply {
        match self.run(message, state).await {
            Ok(reply) => reply,
            Err(err) => {
                error!("市场分析失败: {}", err);
                ActionReply::failure(
                    "Ay, hit a snag pulling that market data. Give me another shot with the ID.",
                    "MARKET_ANALYSIS_ERROR",
                    &err.to_string(),
                )
            }
        }
    }
}
