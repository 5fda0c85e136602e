/// 搜索后端 API 客户端
///
/// 封装所有与 SearXNG 相关的调用逻辑
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::clients::SearchBackend;
use crate::config::Config;
use crate::error::{AppError, AppResult, SearchError};

/// 搜索请求使用的固定 User-Agent
pub const REQUEST_USER_AGENT: &str = "LawExamBot/1.0 (+self-hosted)";

/// 搜索请求超时（秒）
const SEARCH_TIMEOUT_SECS: u64 = 20;

/// SearXNG 客户端
pub struct SearxClient {
    client: reqwest::Client,
    base_url: String,
    search_endpoint: String,
}

impl SearxClient {
    /// 创建新的搜索客户端
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.searxng_base_url.clone(),
            search_endpoint: config.searxng_search_endpoint.clone(),
        }
    }
}

#[async_trait]
impl SearchBackend for SearxClient {
    /// 发送一次搜索请求，要求 JSON 格式结果
    async fn search(&self, query: &str) -> AppResult<Value> {
        let endpoint = format!("{}{}", self.base_url, self.search_endpoint);
        debug!("正在请求搜索后端: {}", endpoint);

        let response = self
            .client
            .get(&endpoint)
            .query(&[("q", query), ("format", "json")])
            .header(reqwest::header::USER_AGENT, REQUEST_USER_AGENT)
            .timeout(Duration::from_secs(SEARCH_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| {
                warn!("搜索请求失败: {}", e);
                AppError::search_request_failed(&endpoint, e)
            })?;

        if !response.status().is_success() {
            return Err(AppError::Search(SearchError::BadStatus {
                endpoint,
                status: response.status().as_u16(),
            }));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| AppError::Search(SearchError::JsonParseFailed { source: e }))?;

        debug!("搜索请求成功");

        Ok(data)
    }
}
