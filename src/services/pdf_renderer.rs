//! PDF 渲染服务 - 业务能力层
//!
//! 只负责"Markdown → PDF"能力，委托外部 pandoc 进程完成

use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult, RenderError};

/// 文档渲染能力
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// 把 Markdown 文件渲染为 PDF，非零退出视为硬失败
    async fn render(&self, md_path: &Path, pdf_path: &Path) -> AppResult<()>;
}

/// 基于 pandoc 的渲染实现
///
/// 同步等待外部进程退出，只阻塞发起调用的 worker。
pub struct PandocRenderer;

impl PandocRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PandocRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PdfRenderer for PandocRenderer {
    async fn render(&self, md_path: &Path, pdf_path: &Path) -> AppResult<()> {
        debug!(
            "正在渲染 PDF: {} -> {}",
            md_path.display(),
            pdf_path.display()
        );

        let output = Command::new("pandoc")
            .arg(md_path)
            .arg("-o")
            .arg(pdf_path)
            .arg("--pdf-engine=wkhtmltopdf")
            .output()
            .await
            .map_err(|e| AppError::Render(RenderError::SpawnFailed { source: e }))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Render(RenderError::ExitFailure {
                code: output.status.code(),
                stderr,
            }));
        }

        Ok(())
    }
}
