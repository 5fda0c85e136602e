//! 任务数据模型
//!
//! 一次批量提交对应一个任务。任务的可变字段只由其 worker 写入，
//! 进度轮询方并发读取快照，读写都在注册表的锁内完成。

use serde::{Deserialize, Serialize};

/// 任务状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// 已创建，worker 尚未开始
    Pending,
    /// worker 正在处理
    Running,
    /// 全部完成，最终 PDF 可下载
    Completed,
    /// 汇总或渲染失败，任务终止
    Failed,
}

/// 一次批量提交的任务记录
///
/// 不变式：`0 <= current <= total`；`answers.len() == total`；
/// 失败的题目槽位永远保持 None，但 current 照常前进。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamTask {
    /// 任务状态
    pub status: TaskStatus,
    /// 已处理（含失败跳过）的题目数
    pub current: usize,
    /// 题目总数
    pub total: usize,
    /// 每题的核查后答案，按提交顺序；未处理或失败为 None
    pub answers: Vec<Option<String>>,
    /// 最终 PDF 文件名，批次完成前为 None
    pub final_pdf: Option<String>,
    /// 创建时间（UTC，RFC 3339）
    pub created_at: String,
}

impl ExamTask {
    /// 创建新任务记录，全部槽位为空
    pub fn new(total: usize) -> Self {
        Self {
            status: TaskStatus::Pending,
            current: 0,
            total,
            answers: vec![None; total],
            final_pdf: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
