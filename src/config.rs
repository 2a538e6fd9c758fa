use log::info;

pub const DEFAULT_AIGG_API_URL: &str = "http://37.27.54.184:8000";
pub const DEFAULT_INSIGHTS_API_URL: &str = "http://37.27.54.184:8001";

/// 插件配置：两个上游 API 的基础 URL
#[derive(Debug, Clone)]
pub struct PluginConfig {
    pub aigg_api_url: String,
    pub insights_api_url: String,
}

impl PluginConfig {
    /// 从环境变量读取配置（进程启动时调用一次）
    pub fn from_env() -> Self {
        // 加载 .env 文件（如果存在）
        dotenv::dotenv().ok();

        let config = Self {
            aigg_api_url: env_or("AIGG_API_URL", DEFAULT_AIGG_API_URL),
            insights_api_url: env_or("INSIGHTS_API_URL", DEFAULT_INSIGHTS_API_URL),
        };

        info!(
            "插件配置: AIGG_API_URL={}, INSIGHTS_API_URL={}",
            config.aigg_api_url, config.insights_api_url
        );

        config
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
