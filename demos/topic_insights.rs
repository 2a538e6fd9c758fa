use aigg_plugins::insights_api::InsightsClient;
use aigg_plugins::source::InsightsSource;
use aigg_plugins::PluginConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    env_logger::init();

    let topic = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let topic = if topic.is_empty() {
        "What are the trends in AI development?".to_string()
    } else {
        topic
    };

    println!("分析主题: {}\n", topic);

    // 创建客户端
    let config = PluginConfig::from_env();
    let client = InsightsClient::new(&config.insights_api_url)?;

    let report = client.get_insights(&topic, 1).await?;

    println!("Analysis: {}\n", report.analysis);
    println!("Sources:");
    for source in &report.sources {
        println!("- {}", source);
    }

    Ok(())
}
