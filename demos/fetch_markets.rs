use aigg_plugins::market_api::MarketClient;
use aigg_plugins::source::MarketSource;
use aigg_plugins::types::MarketFilters;
use aigg_plugins::PluginConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    env_logger::init();

    println!("获取 AIGG 市场列表...\n");

    // 创建客户端
    let config = PluginConfig::from_env();
    let client = MarketClient::new(&config.aigg_api_url)?;

    // 获取前 20 个活跃市场
    let filters = MarketFilters {
        active: Some(true),
        include_closed: Some(false),
        limit: Some(20),
    };
    let markets = client.get_markets(&filters).await?;

    println!("找到 {} 个活跃市场:\n", markets.len());

    for (i, market) in markets.iter().enumerate() {
        println!("{}. {}", i + 1, market.question);
        println!("   结果选项: {:?}", market.outcomes.decode()?);
        println!("   当前价格: {:?}", market.outcome_prices.decode()?);
        println!("   成交量(24h): ${}", market.volume_24h);
        println!();
    }

    Ok(())
}
