//! 单题产物写入服务 - 业务能力层
//!
//! 只负责"写单题 Markdown 文件"能力，不关心流程

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::utils::slug::slugify;

/// 单题 Markdown 写入服务
///
/// 职责：
/// - 把核查后的答案落盘为 `<slug>.md`
/// - 只处理单个 Question
/// - 不关心流程顺序
pub struct MarkdownWriter {
    md_dir: PathBuf,
}

impl MarkdownWriter {
    /// 创建新的写入服务
    pub fn new(md_dir: impl Into<PathBuf>) -> Self {
        Self {
            md_dir: md_dir.into(),
        }
    }

    /// 写入单题产物
    ///
    /// 文件名取题干的 slug，内容以题干为一级标题，正文为核查后的答案。
    ///
    /// # 返回
    /// 返回写入的文件路径
    pub async fn write_answer(&self, question: &str, answer: &str) -> AppResult<PathBuf> {
        let path = self.md_dir.join(format!("{}.md", slugify(question)));
        let body = format!("# {}\n\n{}\n", question, answer);

        tokio::fs::write(&path, body)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        debug!("单题产物已写入: {}", path.display());

        Ok(path)
    }

    /// 产物目录
    pub fn md_dir(&self) -> &Path {
        &self.md_dir
    }
}
