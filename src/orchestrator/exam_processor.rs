//! 批量任务处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是批量提交的入口，负责任务分配和 worker 调度。
//!
//! ## 核心功能
//!
//! 1. **提交校验**：空题目列表同步拒绝，不创建任务
//! 2. **任务分配**：通过注册表分配记录和唯一任务ID
//! 3. **worker 调度**：每次提交恰好启动一个 tokio 后台任务
//! 4. **逐题驱动**：worker 内按提交顺序串行调用 QuestionFlow
//! 5. **失败隔离**：单题失败记日志后跳过，进度照常前进
//! 6. **汇总渲染**：全部题目处理完后拼接汇总 Markdown 并渲染 PDF
//!
//! ## 设计特点
//!
//! - **提交即返回**：submit 不等待任何外部调用
//! - **锁纪律**：进度更新在锁内瞬间完成，外部调用全部在锁外
//! - **向下委托**：单题细节委托 workflow::QuestionFlow

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::{AppError, AppResult, BusinessError};
use crate::models::task::TaskStatus;
use crate::orchestrator::task_registry::TaskRegistry;
use crate::services::PdfRenderer;
use crate::workflow::{QuestionCtx, QuestionFlow};

/// 汇总文档的固定标题
const COMBINED_TITLE: &str = "# LAW EXAM ANSWERS (VERIFIED)\n";

/// 批量任务处理器
#[derive(Clone)]
pub struct ExamProcessor {
    registry: Arc<TaskRegistry>,
    flow: Arc<QuestionFlow>,
    renderer: Arc<dyn PdfRenderer>,
    out_dir: PathBuf,
}

impl ExamProcessor {
    /// 创建新的批量任务处理器
    pub fn new(
        registry: Arc<TaskRegistry>,
        flow: Arc<QuestionFlow>,
        renderer: Arc<dyn PdfRenderer>,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            flow,
            renderer,
            out_dir: out_dir.into(),
        }
    }

    /// 任务注册表（进度轮询用）
    pub fn registry(&self) -> &Arc<TaskRegistry> {
        &self.registry
    }

    /// 提交一批题目，立即返回任务ID
    ///
    /// 空列表返回错误，任务不会被创建。
    pub async fn submit(&self, questions: Vec<String>) -> AppResult<String> {
        if questions.is_empty() {
            return Err(AppError::Business(BusinessError::EmptyQuestions));
        }

        let task_id = self.registry.create(questions.len()).await;
        info!("📦 任务 {} 已创建，共 {} 道题", task_id, questions.len());

        let processor = self.clone();
        let worker_task_id = task_id.clone();
        tokio::spawn(async move {
            processor.run_task(worker_task_id, questions).await;
        });

        Ok(task_id)
    }

    /// worker 主体：逐题处理后汇总渲染
    ///
    /// 运行到底，无外部取消。单题失败只跳过该题；
    /// 汇总或渲染失败则整个任务标记为 failed。
    async fn run_task(&self, task_id: String, questions: Vec<String>) {
        self.registry.set_status(&task_id, TaskStatus::Running).await;

        let total = questions.len();
        let mut combined = vec![COMBINED_TITLE.to_string()];

        for (i, question) in questions.iter().enumerate() {
            let ctx = QuestionCtx::new(task_id.clone(), i, total);

            match self.flow.run(&ctx, question).await {
                Ok(answer) => {
                    combined.push(format!("## {}\n\n{}\n", question, answer));
                    self.registry.record_answer(&task_id, i, answer).await;
                    info!("{} ✓ 第 {}/{} 题完成", ctx, i + 1, total);
                }
                Err(e) => {
                    // 失败的题目跳过：槽位留空，汇总文档不含该题
                    error!("{} ❌ 处理失败，跳过该题: {}", ctx, e);
                    self.registry.record_failure(&task_id, i).await;
                }
            }
        }

        match self.finalize(&task_id, &combined).await {
            Ok(pdf_name) => {
                self.registry.complete(&task_id, pdf_name).await;
                info!("✅ 任务 {} 全部完成", task_id);
            }
            Err(e) => {
                error!("❌ 任务 {} 汇总渲染失败: {}", task_id, e);
                self.registry.fail(&task_id).await;
            }
        }
    }

    /// 汇总各题章节为一份 Markdown，渲染为最终 PDF
    ///
    /// # 返回
    /// 返回最终 PDF 的文件名（不含目录）
    async fn finalize(&self, task_id: &str, sections: &[String]) -> AppResult<String> {
        let md_path = self.out_dir.join(format!("{}_final.md", task_id));
        let pdf_name = format!("{}_final.pdf", task_id);
        let pdf_path = self.out_dir.join(&pdf_name);

        tokio::fs::write(&md_path, sections.join("\n\n"))
            .await
            .map_err(|e| AppError::file_write_failed(md_path.display().to_string(), e))?;

        info!("📄 汇总 Markdown 已写入: {}", md_path.display());

        self.renderer.render(&md_path, &pdf_path).await?;

        info!("📄 最终 PDF 已生成: {}", pdf_path.display());

        Ok(pdf_name)
    }
}
