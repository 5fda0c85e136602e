//! 题目处理流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. draft → 生成严格格式的草稿答案
//! 2. fact check → 检索核查证据
//! 3. verify → 依据证据修正答案
//! 4. 写单题 Markdown 产物

use tracing::info;

use crate::services::fact_check::join_evidence;
use crate::services::{AnswerService, FactCheckService, MarkdownWriter};
use crate::utils::slug::truncate_text;
use crate::workflow::question_ctx::QuestionCtx;
use crate::error::AppResult;

/// 题目处理流程
///
/// - 编排单题的完整处理顺序
/// - 不持有任何共享状态（注册表）
/// - 只依赖业务能力（services）
///
/// 任何一步出错都直接向上传播，由编排层在单题边界统一处置。
pub struct QuestionFlow {
    answer_service: AnswerService,
    fact_check: FactCheckService,
    writer: MarkdownWriter,
}

impl QuestionFlow {
    /// 创建新的题目处理流程
    pub fn new(
        answer_service: AnswerService,
        fact_check: FactCheckService,
        writer: MarkdownWriter,
    ) -> Self {
        Self {
            answer_service,
            fact_check,
            writer,
        }
    }

    /// 处理一道题，返回核查后的最终答案
    pub async fn run(&self, ctx: &QuestionCtx, question: &str) -> AppResult<String> {
        info!("{} 题干: {}", ctx, truncate_text(question, 80));

        // ========== 步骤 1: 草稿答案 ==========
        info!("{} 📝 正在生成草稿答案...", ctx);
        let draft = self.answer_service.draft(question).await?;

        // ========== 步骤 2: 检索证据 ==========
        info!("{} 🔍 正在检索核查证据...", ctx);
        let evidence = self.fact_check.fact_check(question).await?;
        info!("{} ✓ 检索完成，保留 {} 条证据", ctx, evidence.len());

        // ========== 步骤 3: 核查修正 ==========
        info!("{} ⚖️ 正在核查修正答案...", ctx);
        let verified = self
            .answer_service
            .verify(question, &draft, &join_evidence(&evidence))
            .await?;

        // ========== 步骤 4: 落盘单题产物 ==========
        let path = self.writer.write_answer(question, &verified).await?;
        info!("{} ✓ 单题产物已写入: {}", ctx, path.display());

        Ok(verified)
    }
}
