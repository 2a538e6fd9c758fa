use crate::error::Result;
use crate::types::{InsightsReport, MarketAnalysis, MarketFilters, MarketRecord};
use async_trait::async_trait;

#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Fetch a single market by id
    async fn get_market(&self, market_id: &str) -> Result<MarketRecord>;

    /// Fetch markets matching the given filters
    async fn get_markets(&self, filters: &MarketFilters) -> Result<Vec<MarketRecord>>;

    /// Fetch the full analysis report for a market
    async fn get_market_analysis(&self, market_id: &str) -> Result<MarketAnalysis>;
}

#[async_trait]
pub trait InsightsSource: Send + Sync {
    /// Run a remote analysis for a topic, following at most `max_loops` research loops
    async fn get_insights(&self, topic: &str, max_loops: u32) -> Result<InsightsReport>;
}
