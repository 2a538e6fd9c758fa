use aigg_plugins::market_api::MarketClient;
use aigg_plugins::source::MarketSource;
use aigg_plugins::PluginConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    env_logger::init();

    let market_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "523138".to_string());

    println!("获取市场 {} 的分析报告...\n", market_id);

    // 创建客户端
    let config = PluginConfig::from_env();
    let client = MarketClient::new(&config.aigg_api_url)?;

    let analysis = client.get_market_analysis(&market_id).await?;

    println!("问题: {}", analysis.market.question);
    println!("当前概率: {:.1}%", analysis.analysis.current_probability);
    println!("趋势: {}", analysis.analysis.trend);
    println!("成交量分析: {}", analysis.analysis.volume_analysis);
    println!("关键因素:");
    for factor in &analysis.analysis.key_factors {
        println!("  - {}", factor);
    }
    println!("置信度: {:.2}", analysis.analysis.confidence_score);
    println!();
    println!(
        "建议: {} ({})",
        analysis.recommendation.action, analysis.recommendation.risk_level
    );
    println!("理由: {}", analysis.recommendation.reasoning);

    Ok(())
}
