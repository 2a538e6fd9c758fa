use crate::error::{PluginError, Result};
use crate::source::MarketSource;
use crate::types::{MarketAnalysis, MarketFilters, MarketRecord};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

pub struct MarketClient {
    client: Client,
    base_url: String,
}

impl MarketClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.client.get(url).query(query).send().await?;

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

#[async_trait]
impl MarketSource for MarketClient {
    /// 获取市场详情
    async fn get_market(&self, market_id: &str) -> Result<MarketRecord> {
        let url = format!("{}/markets/{}", self.base_url, market_id);
        debug!("请求市场详情: {}", url);

        self.get_json(&url, &[]).await
    }

    /// 获取市场列表
    async fn get_markets(&self, filters: &MarketFilters) -> Result<Vec<MarketRecord>> {
        let url = format!("{}/markets", self.base_url);

        let mut query_params = Vec::new();
        if let Some(active) = filters.active {
            query_params.push(("active", active.to_string()));
        }
        if let Some(include_closed) = filters.include_closed {
            query_params.push(("include_closed", include_closed.to_string()));
        }
        if let Some(limit) = filters.limit {
            query_params.push(("limit", limit.to_string()));
        }

        debug!("请求市场列表: {} {:?}", url, query_params);

        let markets: Vec<MarketRecord> = self.get_json(&url, &query_params).await?;
        debug!("成功获取 {} 个市场", markets.len());

        Ok(markets)
    }

    /// 获取市场分析报告
    async fn get_market_analysis(&self, market_id: &str) -> Result<MarketAnalysis> {
        let url = format!("{}/markets/{}/analysis", self.base_url, market_id);
        debug!("请求市场分析: {}", url);

        self.get_json(&url, &[]).await
    }
}
