//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量任务的调度和共享进度状态，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `task_registry` - 任务注册表
//! - 持有 task_id → ExamTask 的映射
//! - 一把进程级互斥锁保护映射和每个任务的可变字段
//! - 临界区只做 O(指针拷贝) 的读写，绝不跨外部调用持锁
//!
//! ### `exam_processor` - 批量任务处理器
//! - 校验提交、分配任务记录、生成任务ID
//! - 每次提交启动恰好一个后台 worker
//! - worker 按提交顺序逐题驱动 QuestionFlow
//! - 单题失败记日志后跳过，进度照常前进
//! - 全部题目处理完后汇总渲染最终 PDF
//!
//! ## 层次关系
//!
//! ```text
//! exam_processor (处理 Vec<Question>)
//!     ↓
//! workflow::QuestionFlow (处理单个 Question)
//!     ↓
//! services (能力层：answer / fact check / markdown / pdf)
//!     ↓
//! clients (客户端层：Ollama / SearXNG)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：registry 管状态，processor 管调度
//! 2. **注入构造**：注册表和各后端由构造时传入，测试可逐实例隔离
//! 3. **锁纪律**：阻塞的外部调用全部发生在锁外
//! 4. **无业务逻辑**：只做调度和状态更新，不做具体业务判断

pub mod exam_processor;
pub mod task_registry;

// 重新导出主要类型
pub use exam_processor::ExamProcessor;
pub use task_registry::TaskRegistry;
