//! 任务注册表 - 编排层
//!
//! 锁保护的共享进度状态。worker 写、轮询方读，
//! 所有访问都在同一把互斥锁内完成，且临界区不包含任何 await 外部调用。

use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::task::{ExamTask, TaskStatus};

/// 任务注册表
///
/// 进程生命周期内任务只增不减（不做淘汰）。
/// 通过构造注入使用，每个实例独立，便于隔离测试。
pub struct TaskRegistry {
    tasks: Mutex<HashMap<String, ExamTask>>,
}

impl TaskRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// 分配新任务记录，返回唯一任务ID
    pub async fn create(&self, total: usize) -> String {
        let task_id = Uuid::new_v4().to_string();
        self.tasks
            .lock()
            .await
            .insert(task_id.clone(), ExamTask::new(total));
        task_id
    }

    /// 读取任务的只读快照
    pub async fn snapshot(&self, task_id: &str) -> Option<ExamTask> {
        self.tasks.lock().await.get(task_id).cloned()
    }

    /// 更新任务状态
    pub async fn set_status(&self, task_id: &str, status: TaskStatus) {
        if let Some(task) = self.tasks.lock().await.get_mut(task_id) {
            task.status = status;
        }
    }

    /// 记录一题成功：写入槽位并前进进度
    pub async fn record_answer(&self, task_id: &str, index: usize, answer: String) {
        if let Some(task) = self.tasks.lock().await.get_mut(task_id) {
            if index < task.answers.len() {
                task.answers[index] = Some(answer);
            }
            // current 单调不减
            task.current = task.current.max(index + 1);
        }
    }

    /// 记录一题失败：槽位保持空，进度照常前进
    ///
    /// 失败的题目同样计入"已处理"，轮询方需检查槽位区分跳过与未到达。
    pub async fn record_failure(&self, task_id: &str, index: usize) {
        if let Some(task) = self.tasks.lock().await.get_mut(task_id) {
            task.current = task.current.max(index + 1);
        }
    }

    /// 标记任务完成并记录最终 PDF 文件名
    pub async fn complete(&self, task_id: &str, pdf_name: String) {
        if let Some(task) = self.tasks.lock().await.get_mut(task_id) {
            task.final_pdf = Some(pdf_name);
            task.status = TaskStatus::Completed;
        }
    }

    /// 标记任务失败（汇总或渲染阶段出错）
    pub async fn fail(&self, task_id: &str) {
        if let Some(task) = self.tasks.lock().await.get_mut(task_id) {
            task.status = TaskStatus::Failed;
        }
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}
