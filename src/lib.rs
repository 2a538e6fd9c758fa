pub mod action;
pub mod analyze_market;
pub mod config;
pub mod error;
pub mod get_insights;
pub mod insights_api;
pub mod market_api;
pub mod plugin;
pub mod show_market_data;
pub mod source;
pub mod state;
pub mod types;

pub use action::{Action, ActionExample, ActionOptions, ActionReply, IncomingMessage};
pub use analyze_market::{AnalyzeMarket, ANALYZE_MARKET};
pub use config::PluginConfig;
pub use error::{PluginError, Result};
pub use get_insights::{GetInsights, GET_INSIGHTS};
pub use insights_api::InsightsClient;
pub use market_api::MarketClient;
pub use plugin::{aigg_plugin, insights_plugin, Plugin, PluginContext};
pub use show_market_data::{ShowMarketData, SHOW_MARKET_DATA};
pub use source::{InsightsSource, MarketSource};
pub use state::SessionState;
pub use types::{InsightsReport, MarketAnalysis, MarketFilters, MarketRecord, MarketSnapshot};
