use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("请求参数无效: {0}")]
    Validation(String),

    #[error("API 请求失败 [{status}]: {body}")]
    RemoteApi { status: u16, body: String },

    #[error("网络错误: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("无效的响应数据: {0}")]
    InvalidResponse(String),

    #[error("配置错误: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PluginError>;
