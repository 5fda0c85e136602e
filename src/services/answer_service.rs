//! 答案生成服务 - 业务能力层
//!
//! 只负责"草稿答案"和"核查修正"两种能力，不关心流程
//!
//! 两段提示词是对外的行为契约：答案的五段结构和结尾的
//! Confidence Level 行由下游核查与渲染依赖，字段顺序和措辞不可改动。

use std::sync::Arc;
use tracing::debug;

use crate::clients::LlmBackend;
use crate::error::AppResult;

/// 草稿答案的采样温度，偏向确定性输出
const DRAFT_TEMPERATURE: f32 = 0.15;

/// 核查修正的采样温度，比草稿更低
const VERIFY_TEMPERATURE: f32 = 0.1;

/// 答案生成服务
///
/// 职责：
/// - 构建考试答案 / 核查修正两种提示词
/// - 调用模型后端并裁剪响应
/// - 只处理单个 Question
/// - 不出现 Vec<Question>
/// - 不关心流程顺序
pub struct AnswerService {
    llm: Arc<dyn LlmBackend>,
}

impl AnswerService {
    /// 创建新的答案生成服务
    pub fn new(llm: Arc<dyn LlmBackend>) -> Self {
        Self { llm }
    }

    /// 生成严格格式的考试草稿答案
    pub async fn draft(&self, question: &str) -> AppResult<String> {
        debug!("正在生成草稿答案，题干长度: {} 字符", question.len());

        let response = self
            .llm
            .generate(&exam_prompt(question), DRAFT_TEMPERATURE)
            .await?;

        Ok(response.trim().to_string())
    }

    /// 依据搜索证据核查修正草稿答案
    ///
    /// # 参数
    /// - `question`: 题干
    /// - `draft`: 草稿答案
    /// - `evidence_context`: 证据上下文（每行一条）
    pub async fn verify(
        &self,
        question: &str,
        draft: &str,
        evidence_context: &str,
    ) -> AppResult<String> {
        debug!(
            "正在核查修正答案，证据上下文长度: {} 字符",
            evidence_context.len()
        );

        let response = self
            .llm
            .generate(
                &fact_check_prompt(question, draft, evidence_context),
                VERIFY_TEMPERATURE,
            )
            .await?;

        Ok(response.trim().to_string())
    }
}

// ========== 提示词模板 ==========

/// 构建考试答案提示词
pub fn exam_prompt(question: &str) -> String {
    format!(
        r#"You are writing a STRICT EXAM ANSWER for an Indian law examination.

EXAM RULES (MANDATORY):
- Answer ONLY what is asked.
- Use clear, point-wise format.
- Give slight explanation only where necessary.
- Mention relevant statutory provisions briefly.
- Mention ONLY ONE most important case law.
- Case law: name + one-line principle only.
- No academic discussion, no illustrations.
- Keep the answer concise and scoring-oriented.

FORMAT (DO NOT DEVIATE):
1. Meaning / Direct Answer
2. Statutory Provision
3. Essential Points (with slight explanation)
4. Case Law (ONE only)
5. Conclusion

End with:
Confidence Level: XX%

QUESTION:
{question}

ANSWER:"#
    )
}

/// 构建核查修正提示词
pub fn fact_check_prompt(question: &str, exam_answer: &str, ctx: &str) -> String {
    format!(
        r#"Verify the EXAM ANSWER using SEARCH CONTEXT.
Correct only factual/legal errors.
Do NOT expand.
Keep structure identical.

QUESTION:
{question}

EXAM ANSWER:
{exam_answer}

SEARCH CONTEXT:
{ctx}

FINAL VERIFIED ANSWER:"#
    )
}
