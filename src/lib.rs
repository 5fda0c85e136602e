//! # Exam Fact Check
//!
//! 一个用于批量生成并核查法律考试答案的 Rust 服务
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 封装对外部协作方的 HTTP 调用
//! - `OllamaClient` - 生成模型后端（/api/generate）
//! - `SearxClient` - SearXNG 搜索后端（/search）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个 Question
//! - `AnswerService` - 草稿答案 / 核查修正能力
//! - `FactCheckService` - 证据检索与评分能力
//! - `MarkdownWriter` - 写单题 Markdown 产物能力
//! - `PandocRenderer` - Markdown → PDF 渲染能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `QuestionCtx` - 上下文封装（task_id + question_index）
//! - `QuestionFlow` - 流程编排（draft → fact check → verify → 写文件）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/task_registry` - 任务注册表，锁保护的共享进度状态
//! - `orchestrator/exam_processor` - 批量任务处理器，每批一个后台 worker
//!
//! 最外层是 `api/`：axum 路由（提交 / 进度 / 下载），只做薄薄的 HTTP 适配。

pub mod api;
pub mod clients;
pub mod config;
pub mod error;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{LlmBackend, OllamaClient, SearchBackend, SearxClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::task::{ExamTask, TaskStatus};
pub use orchestrator::{ExamProcessor, TaskRegistry};
pub use services::{AnswerService, FactCheckService, MarkdownWriter, PandocRenderer, PdfRenderer};
pub use workflow::{QuestionCtx, QuestionFlow};
