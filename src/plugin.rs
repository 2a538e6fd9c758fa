use std::sync::Arc;

use log::info;

use crate::action::Action;
use crate::analyze_market::AnalyzeMarket;
use crate::config::PluginConfig;
use crate::error::Result;
use crate::get_insights::GetInsights;
use crate::insights_api::InsightsClient;
use crate::market_api::MarketClient;
use crate::show_market_data::ShowMarketData;
use crate::source::{InsightsSource, MarketSource};

/// 进程启动时构建一次的依赖集合，显式传给各插件
pub struct PluginContext {
    pub market: Arc<dyn MarketSource>,
    pub insights: Arc<dyn InsightsSource>,
}

impl PluginContext {
    pub fn from_config(config: &PluginConfig) -> Result<Self> {
        Ok(Self {
            market: Arc::new(MarketClient::new(&config.aigg_api_url)?),
            insights: Arc::new(InsightsClient::new(&config.insights_api_url)?),
        })
    }
}

/// 一组动作构成一个插件，宿主按插件为单位注册
pub struct Plugin {
    pub name: &'static str,
    pub description: &'static str,
    pub actions: Vec<Arc<dyn Action>>,
}

pub fn aigg_plugin(ctx: &PluginContext) -> Plugin {
    let plugin = Plugin {
        name: "aigg",
        description: "AIGG market analysis plugin for prediction markets",
        actions: vec![
            Arc::new(AnalyzeMarket::new(ctx.market.clone())),
            Arc::new(ShowMarketData),
        ],
    };

    info!(
        "注册插件 {}: {:?}",
        plugin.name,
        plugin.actions.iter().map(|a| a.name()).collect::<Vec<_>>()
    );
    plugin
}

pub fn insights_plugin(ctx: &PluginContext) -> Plugin {
    let plugin = Plugin {
        name: "insights",
        description: "Plugin for getting AI-powered insights and analysis on topics",
        actions: vec![Arc::new(GetInsights::new(ctx.insights.clone()))],
    };

    info!(
        "注册插件 {}: {:?}",
        plugin.name,
        plugin.actions.iter().map(|a| a.name()).collect::<Vec<_>>()
    );
    plugin
}
