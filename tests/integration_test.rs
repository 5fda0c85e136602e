//! 批量流水线集成测试
//!
//! 三个协作方（模型 / 搜索 / 渲染）全部用进程内模拟实现替换，
//! 验证编排层的进度语义、失败隔离和汇总产物。

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tempfile::TempDir;

use exam_fact_check::clients::{LlmBackend, SearchBackend};
use exam_fact_check::error::{AppError, AppResult, SearchError};
use exam_fact_check::models::task::{ExamTask, TaskStatus};
use exam_fact_check::orchestrator::{ExamProcessor, TaskRegistry};
use exam_fact_check::services::{AnswerService, FactCheckService, MarkdownWriter, PdfRenderer};
use exam_fact_check::workflow::QuestionFlow;

// ========== 模拟协作方 ==========

/// 模拟模型后端：草稿和核查各返回确定的文本
struct MockLlm {
    /// 每次调用前的等待，用于观察中间进度
    latency: Duration,
}

#[async_trait]
impl LlmBackend for MockLlm {
    async fn generate(&self, prompt: &str, _temperature: f32) -> AppResult<String> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if prompt.starts_with("You are writing a STRICT EXAM ANSWER") {
            Ok("draft answer\n\nConfidence Level: 90%".to_string())
        } else {
            Ok("VERIFIED ANSWER\n\nConfidence Level: 95%".to_string())
        }
    }
}

/// 模拟搜索后端：题干含标记时确定性失败
struct MockSearch {
    fail_marker: Option<String>,
}

#[async_trait]
impl SearchBackend for MockSearch {
    async fn search(&self, query: &str) -> AppResult<Value> {
        if let Some(marker) = &self.fail_marker {
            if query.contains(marker.as_str()) {
                return Err(AppError::Search(SearchError::BadStatus {
                    endpoint: "mock://search".to_string(),
                    status: 500,
                }));
            }
        }
        Ok(json!({
            "results": [
                { "url": "https://indiankanoon.org/doc/1/", "content": "authoritative snippet" },
                { "url": "https://example.com/blog", "content": "weak snippet" },
                { "url": "https://example.com/empty", "content": "" },
                { "content": "missing url" },
            ]
        }))
    }
}

/// 模拟渲染：写一个占位 PDF 文件
struct MockRenderer;

#[async_trait]
impl PdfRenderer for MockRenderer {
    async fn render(&self, _md_path: &Path, pdf_path: &Path) -> AppResult<()> {
        tokio::fs::write(pdf_path, b"%PDF-1.4 stub")
            .await
            .map_err(|e| AppError::file_write_failed(pdf_path.display().to_string(), e))?;
        Ok(())
    }
}

/// 模拟渲染失败
struct FailingRenderer;

#[async_trait]
impl PdfRenderer for FailingRenderer {
    async fn render(&self, _md_path: &Path, _pdf_path: &Path) -> AppResult<()> {
        Err(AppError::Render(
            exam_fact_check::error::RenderError::ExitFailure {
                code: Some(47),
                stderr: "mock pandoc failure".to_string(),
            },
        ))
    }
}

// ========== 测试脚手架 ==========

struct TestHarness {
    registry: Arc<TaskRegistry>,
    processor: Arc<ExamProcessor>,
    md_dir: TempDir,
    out_dir: TempDir,
}

fn build_harness(
    llm: Arc<dyn LlmBackend>,
    search: Arc<dyn SearchBackend>,
    renderer: Arc<dyn PdfRenderer>,
) -> TestHarness {
    let md_dir = tempfile::tempdir().expect("创建临时目录失败");
    let out_dir = tempfile::tempdir().expect("创建临时目录失败");

    let registry = Arc::new(TaskRegistry::new());
    let flow = QuestionFlow::new(
        AnswerService::new(llm),
        // 测试不需要限速等待
        FactCheckService::new(search, Duration::ZERO, 5),
        MarkdownWriter::new(md_dir.path()),
    );
    let processor = Arc::new(ExamProcessor::new(
        registry.clone(),
        Arc::new(flow),
        renderer,
        out_dir.path(),
    ));

    TestHarness {
        registry,
        processor,
        md_dir,
        out_dir,
    }
}

fn default_harness() -> TestHarness {
    build_harness(
        Arc::new(MockLlm {
            latency: Duration::ZERO,
        }),
        Arc::new(MockSearch { fail_marker: None }),
        Arc::new(MockRenderer),
    )
}

/// 轮询直到任务进入终态
async fn wait_for_terminal(registry: &TaskRegistry, task_id: &str) -> ExamTask {
    for _ in 0..500 {
        if let Some(task) = registry.snapshot(task_id).await {
            if matches!(task.status, TaskStatus::Completed | TaskStatus::Failed) {
                return task;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("任务在超时前未进入终态");
}

// ========== 用例 ==========

#[tokio::test]
async fn test_submit_empty_batch_rejected() {
    let harness = default_harness();

    let result = harness.processor.submit(Vec::new()).await;

    assert!(result.is_err(), "空题目列表应该同步拒绝");
}

#[tokio::test]
async fn test_submit_returns_distinct_ids() {
    let harness = default_harness();

    let id1 = harness
        .processor
        .submit(vec!["What is Res Judicata?".to_string()])
        .await
        .unwrap();
    let id2 = harness
        .processor
        .submit(vec!["What is Res Judicata?".to_string()])
        .await
        .unwrap();

    assert_ne!(id1, id2);
}

#[tokio::test]
async fn test_snapshot_available_immediately_after_submit() {
    // 模型调用足够慢，提交后第一题必然尚未完成
    let harness = build_harness(
        Arc::new(MockLlm {
            latency: Duration::from_millis(300),
        }),
        Arc::new(MockSearch { fail_marker: None }),
        Arc::new(MockRenderer),
    );

    let questions = vec!["q1".to_string(), "q2".to_string()];
    let task_id = harness.processor.submit(questions).await.unwrap();

    let task = harness.registry.snapshot(&task_id).await.unwrap();
    assert_eq!(task.current, 0);
    assert_eq!(task.total, 2);
    assert!(matches!(
        task.status,
        TaskStatus::Pending | TaskStatus::Running
    ));

    wait_for_terminal(&harness.registry, &task_id).await;
}

#[tokio::test]
async fn test_single_question_full_pipeline() {
    let harness = default_harness();

    let task_id = harness
        .processor
        .submit(vec!["What is Res Judicata?".to_string()])
        .await
        .unwrap();

    let task = wait_for_terminal(&harness.registry, &task_id).await;

    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.current, 1);
    assert_eq!(task.total, 1);

    // 核查后的答案写入了槽位
    let answer = task.answers[0].as_deref().expect("答案槽位应已填充");
    assert!(answer.contains("VERIFIED ANSWER"));

    // 单题产物：文件名取题干 slug
    let md_path = harness.md_dir.path().join("what_is_res_judicata.md");
    let md_body = std::fs::read_to_string(&md_path).expect("单题产物应已写入");
    assert!(md_body.starts_with("# What is Res Judicata?\n\n"));
    assert!(md_body.contains("VERIFIED ANSWER"));

    // 最终 PDF 引用非空且文件存在、非空
    let pdf_name = task.final_pdf.as_deref().expect("最终PDF引用应已设置");
    assert!(!pdf_name.is_empty());
    let pdf_bytes = std::fs::read(harness.out_dir.path().join(pdf_name)).unwrap();
    assert!(!pdf_bytes.is_empty());
}

#[tokio::test]
async fn test_failed_item_is_skipped_but_progress_advances() {
    let harness = build_harness(
        Arc::new(MockLlm {
            latency: Duration::ZERO,
        }),
        Arc::new(MockSearch {
            fail_marker: Some("BROKEN".to_string()),
        }),
        Arc::new(MockRenderer),
    );

    let questions = vec![
        "first question".to_string(),
        "BROKEN question".to_string(),
        "third question".to_string(),
    ];
    let task_id = harness.processor.submit(questions).await.unwrap();

    // 轮询期间验证 current 单调不减
    let mut last_current = 0;
    let mut terminal = None;
    for _ in 0..500 {
        let snapshot = harness.registry.snapshot(&task_id).await.unwrap();
        assert!(snapshot.current >= last_current, "current 不允许回退");
        assert!(snapshot.current <= snapshot.total);
        last_current = snapshot.current;

        if matches!(snapshot.status, TaskStatus::Completed | TaskStatus::Failed) {
            terminal = Some(snapshot);
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let task = terminal.expect("任务在超时前未进入终态");

    // 失败的题目跳过，但照常计入进度
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.current, 3);
    assert!(task.answers[0].is_some());
    assert!(task.answers[1].is_none());
    assert!(task.answers[2].is_some());

    // 汇总文档只含两个题目章节
    let combined = std::fs::read_to_string(
        harness
            .out_dir
            .path()
            .join(format!("{}_final.md", task_id)),
    )
    .unwrap();
    assert!(combined.starts_with("# LAW EXAM ANSWERS (VERIFIED)\n"));
    let section_count = combined
        .lines()
        .filter(|line| line.starts_with("## "))
        .count();
    assert_eq!(section_count, 2);
    assert!(combined.contains("## first question"));
    assert!(!combined.contains("BROKEN question"));
    assert!(combined.contains("## third question"));
}

#[tokio::test]
async fn test_render_failure_marks_task_failed() {
    let harness = build_harness(
        Arc::new(MockLlm {
            latency: Duration::ZERO,
        }),
        Arc::new(MockSearch { fail_marker: None }),
        Arc::new(FailingRenderer),
    );

    let task_id = harness
        .processor
        .submit(vec!["q1".to_string()])
        .await
        .unwrap();

    let task = wait_for_terminal(&harness.registry, &task_id).await;

    assert_eq!(task.status, TaskStatus::Failed);
    assert!(task.final_pdf.is_none());
    // 逐题处理本身已完成
    assert_eq!(task.current, 1);
}

#[tokio::test]
async fn test_progress_unknown_task_is_none() {
    let harness = default_harness();

    assert!(harness.registry.snapshot("never-submitted").await.is_none());
}
