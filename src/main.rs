use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use exam_fact_check::api::{self, AppState};
use exam_fact_check::clients::{LlmBackend, OllamaClient, SearchBackend, SearxClient};
use exam_fact_check::config::Config;
use exam_fact_check::orchestrator::{ExamProcessor, TaskRegistry};
use exam_fact_check::services::{
    AnswerService, FactCheckService, MarkdownWriter, PandocRenderer, PdfRenderer,
};
use exam_fact_check::utils::logging;
use exam_fact_check::workflow::QuestionFlow;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();
    logging::log_startup(&config);

    // 产物目录启动时创建
    std::fs::create_dir_all(&config.md_dir)
        .with_context(|| format!("创建目录失败: {}", config.md_dir))?;
    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("创建目录失败: {}", config.out_dir))?;

    // 组装各层：clients → services → workflow → orchestrator
    let llm: Arc<dyn LlmBackend> = Arc::new(OllamaClient::new(&config));
    let search: Arc<dyn SearchBackend> = Arc::new(SearxClient::new(&config));
    let renderer: Arc<dyn PdfRenderer> = Arc::new(PandocRenderer::new());

    let flow = QuestionFlow::new(
        AnswerService::new(llm),
        FactCheckService::new(
            search,
            std::time::Duration::from_secs_f64(config.searx_delay_secs),
            config.max_results,
        ),
        MarkdownWriter::new(&config.md_dir),
    );

    let processor = ExamProcessor::new(
        Arc::new(TaskRegistry::new()),
        Arc::new(flow),
        renderer,
        &config.out_dir,
    );

    let state = Arc::new(AppState {
        processor: Arc::new(processor),
        out_dir: config.out_dir.clone().into(),
    });

    // 启动 HTTP 服务
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("监听地址失败: {}", addr))?;

    info!("🌐 HTTP 服务已启动: http://{}", addr);

    axum::serve(listener, api::router(state)).await?;

    Ok(())
}
