//! HTTP 前门 - axum 路由
//!
//! 只做薄薄的协议适配：JSON 进出、状态码映射、文件下发。
//! 所有业务都委托编排层。

pub mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use crate::orchestrator::ExamProcessor;

/// HTTP 层共享状态
pub struct AppState {
    /// 批量任务处理器（内含注册表）
    pub processor: Arc<ExamProcessor>,
    /// 最终 PDF 所在目录（下载路由用）
    pub out_dir: PathBuf,
}

pub use routes::router;
