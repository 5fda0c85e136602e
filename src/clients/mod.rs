//! 客户端层 - 封装对外部协作方的调用
//!
//! 后端能力以 trait 形式暴露，编排层只依赖 trait，
//! 测试时可注入进程内的模拟实现。

pub mod ollama_client;
pub mod searx_client;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppResult;

/// 生成模型后端能力
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// 发送一段提示词，返回模型生成的文本
    async fn generate(&self, prompt: &str, temperature: f32) -> AppResult<String>;
}

/// 搜索后端能力
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// 发送一次查询，返回搜索后端的原始 JSON 响应
    async fn search(&self, query: &str) -> AppResult<Value>;
}

pub use ollama_client::OllamaClient;
pub use searx_client::SearxClient;
