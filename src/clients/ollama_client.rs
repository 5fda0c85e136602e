/// 生成模型 API 客户端
///
/// 封装所有与 Ollama API 相关的调用逻辑
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use crate::clients::LlmBackend;
use crate::config::Config;
use crate::error::{AppError, AppResult, LlmError};

/// Ollama 客户端
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model_name: String,
    timeout: Duration,
}

impl OllamaClient {
    /// 创建新的 Ollama 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.ollama_base_url.clone(),
            model_name: config.model_name.clone(),
            timeout: Duration::from_secs(config.llm_timeout_secs),
        }
    }

    /// 创建自定义模型的客户端
    pub fn with_model(config: &Config, model_name: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.ollama_base_url.clone(),
            model_name: model_name.into(),
            timeout: Duration::from_secs(config.llm_timeout_secs),
        }
    }
}

#[async_trait]
impl LlmBackend for OllamaClient {
    /// 发送一次生成请求
    ///
    /// # 参数
    /// - `prompt`: 完整提示词
    /// - `temperature`: 采样温度
    ///
    /// # 返回
    /// 返回模型生成的原始文本
    async fn generate(&self, prompt: &str, temperature: f32) -> AppResult<String> {
        debug!("正在调用 LLM API，模型: {}", self.model_name);
        debug!("提示词长度: {} 字符", prompt.len());

        let body = json!({
            "model": self.model_name,
            "prompt": prompt,
            "stream": false,
            "options": { "temperature": temperature },
        });

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("LLM API 调用失败: {}", e);
                AppError::llm_request_failed(&self.model_name, e)
            })?;

        if !response.status().is_success() {
            return Err(AppError::Llm(LlmError::BadStatus {
                model: self.model_name.clone(),
                status: response.status().as_u16(),
            }));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| AppError::Llm(LlmError::JsonParseFailed { source: e }))?;

        debug!("LLM API 调用成功");

        let content = data
            .get("response")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                AppError::Llm(LlmError::EmptyResponse {
                    model: self.model_name.clone(),
                })
            })?;

        Ok(content.to_string())
    }
}
