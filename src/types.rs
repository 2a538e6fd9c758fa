use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PluginError, Result};

/// 上游 API 返回的市场记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketRecord {
    #[serde(default)]
    pub market_id: String,

    pub question: String,

    pub description: Option<String>,

    #[serde(default)]
    pub volume_24h: f64,

    pub active: Option<bool>,

    pub end_date: String,

    pub outcomes: MaybeEncodedList,

    pub outcome_prices: MaybeEncodedList,

    #[serde(default)]
    pub last_updated: String,
}

/// 结果选项 / 价格字段的两种编码：原生数组，或再编码一层的 JSON 字符串
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaybeEncodedList {
    List(Vec<String>),
    Encoded(String),
}

impl MaybeEncodedList {
    pub fn decode(&self) -> Result<Vec<String>> {
        match self {
            MaybeEncodedList::List(items) => Ok(items.clone()),
            MaybeEncodedList::Encoded(raw) => Ok(serde_json::from_str(raw)?),
        }
    }
}

/// 一次市场分析的快照，保存在会话状态里供后续追问使用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub market_id: String,
    pub question: String,
    /// 第一个结果选项的概率（0-100）
    pub probability: f64,
    pub volume_24h: f64,
    pub outcomes: Vec<String>,
    pub prices: Vec<String>,
    pub end_date: String,
    pub last_updated: String,
}

impl MarketSnapshot {
    pub fn from_record(market_id: &str, record: &MarketRecord) -> Result<Self> {
        let outcomes = record.outcomes.decode()?;
        let prices = record.outcome_prices.decode()?;

        if outcomes.len() != prices.len() {
            return Err(PluginError::InvalidResponse(format!(
                "结果选项与价格数量不一致: {} vs {}",
                outcomes.len(),
                prices.len()
            )));
        }
        if outcomes.len() != 2 {
            return Err(PluginError::InvalidResponse(format!(
                "预期 2 个结果选项，实际 {}",
                outcomes.len()
            )));
        }

        let first_price: f64 = prices[0].trim().parse().map_err(|_| {
            PluginError::InvalidResponse(format!("无法解析的价格: {:?}", prices[0]))
        })?;

        Ok(Self {
            market_id: market_id.to_string(),
            question: record.question.clone(),
            probability: first_price * 100.0,
            volume_24h: record.volume_24h,
            outcomes,
            prices,
            end_date: record.end_date.clone(),
            last_updated: record.last_updated.clone(),
        })
    }
}

/// `GET /markets/{id}/analysis` 返回的完整分析报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub market: AnalyzedMarket,
    pub analysis: AnalysisDetail,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedMarket {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub description: String,
    pub outcomes: Vec<String>,
    pub prices: Vec<String>,
    #[serde(default)]
    pub volume: f64,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDetail {
    pub current_probability: f64,
    pub trend: String,
    pub volume_analysis: String,
    #[serde(default)]
    pub key_factors: Vec<String>,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub reasoning: String,
    pub risk_level: String,
}

/// 市场列表查询参数，未设置的字段不会出现在查询串里
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketFilters {
    pub active: Option<bool>,
    pub include_closed: Option<bool>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsRequest {
    pub insights_topic: String,
    pub max_loops: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsReport {
    pub analysis: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// 按千位分组格式化金额（仿 toLocaleString，最多保留两位小数）
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let int_part = rounded.trunc() as i64;
    let cents = ((rounded - int_part as f64) * 100.0).round() as i64;

    let digits = int_part.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if int_part < 0 {
        grouped.insert(0, '-');
    }

    if cents == 0 {
        grouped
    } else if cents % 10 == 0 {
        format!("{}.{}", grouped, cents / 10)
    } else {
        format!("{}.{:02}", grouped, cents)
    }
}

/// 把 ISO 时间串格式化为 月/日/年；解析失败时原样返回
pub fn format_date(iso: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.format("%-m/%-d/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y").to_string();
    }
    iso.to_string()
}

/// 带时间的本地风格格式；解析失败时原样返回
pub fn format_datetime(iso: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string();
    }
    format_date(iso)
}
