use serde::{Deserialize, Serialize};

use crate::types::MarketSnapshot;

/// Per-conversation state the host runtime hands to every action call.
///
/// Exactly the three keys the market follow-up handshake needs; the host
/// owns the lifecycle and tears the state down with the conversation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub last_action: Option<String>,
    pub current_market_id: Option<String>,
    pub market_snapshot: Option<MarketSnapshot>,
}

impl SessionState {
    /// Record a successful market analysis; last writer wins.
    pub fn record_analysis(&mut self, action: &str, snapshot: MarketSnapshot) {
        self.last_action = Some(action.to_string());
        self.current_market_id = Some(snapshot.market_id.clone());
        self.market_snapshot = Some(snapshot);
    }

    /// The stored snapshot, but only if the immediately preceding action was `action`.
    pub fn snapshot_after(&self, action: &str) -> Option<&MarketSnapshot> {
        if self.last_action.as_deref() == Some(action) {
            self.market_snapshot.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(id: &str) -> MarketSnapshot {
        MarketSnapshot {
            market_id: id.to_string(),
            question: "Will X happen?".to_string(),
            probability: 65.5,
            volume_24h: 10000.0,
            outcomes: vec!["Yes".to_string(), "No".to_string()],
            prices: vec!["0.655".to_string(), "0.345".to_string()],
            end_date: "2024-12-31".to_string(),
            last_updated: "2024-03-20".to_string(),
        }
    }

    #[test]
    fn record_analysis_overwrites_previous_snapshot() {
        let mut state = SessionState::default();
        state.record_analysis("analyze_market", snapshot("1"));
        state.record_analysis("analyze_market", snapshot("2"));

        assert_eq!(state.current_market_id.as_deref(), Some("2"));
        assert_eq!(
            state.market_snapshot.as_ref().map(|s| s.market_id.as_str()),
            Some("2")
        );
    }

    #[test]
    fn snapshot_after_requires_matching_last_action() {
        let mut state = SessionState::default();
        assert!(state.snapshot_after("analyze_market").is_none());

        state.record_analysis("analyze_market", snapshot("1"));
        assert!(state.snapshot_after("analyze_market").is_some());

        state.last_action = Some("something_else".to_string());
        assert!(state.snapshot_after("analyze_market").is_none());
    }
}
