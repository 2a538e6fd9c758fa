use crate::error::{PluginError, Result};
use crate::source::InsightsSource;
use crate::types::{InsightsReport, InsightsRequest};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

pub struct InsightsClient {
    client: Client,
    base_url: String,
}

impl InsightsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl InsightsSource for InsightsClient {
    /// 请求主题分析
    async fn get_insights(&self, topic: &str, max_loops: u32) -> Result<InsightsReport> {
        if topic.trim().is_empty() {
            return Err(PluginError::Validation("分析主题不能为空".to_string()));
        }

        let url = format!("{}/analyze", self.base_url);
        let request = InsightsRequest {
            insights_topic: topic.to_string(),
            max_loops,
        };

        debug!("请求主题分析: {} (max_loops={})", url, max_loops);

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!("API 请求失败 [{}]: {}", status, text);
            return Err(PluginError::RemoteApi {
                status: status.as_u16(),
                body: text,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
