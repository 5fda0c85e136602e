//! 路由定义
//!
//! - `GET /` 静态提交页面
//! - `POST /exam` 提交一批题目
//! - `GET /progress/:task_id` 轮询任务进度
//! - `GET /download/pdf/:name` 下载最终 PDF

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::AppState;
use crate::models::task::ExamTask;

type AppStateArc = Arc<AppState>;

/// 组装完整路由
pub fn router(state: AppStateArc) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/exam", post(submit_exam))
        .route("/progress/:task_id", get(progress))
        .route("/download/pdf/:name", get(download_pdf))
        .with_state(state)
}

// ============================================================================
// 提交路由
// ============================================================================

/// 批量提交请求体
#[derive(Debug, Clone, Deserialize)]
pub struct ExamRequest {
    #[serde(default)]
    pub questions: Vec<String>,
}

/// 批量提交响应体
#[derive(Debug, Clone, Serialize)]
pub struct ExamResponse {
    pub task_id: String,
}

/// 统一错误响应体
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

async fn submit_exam(
    State(state): State<AppStateArc>,
    Json(req): Json<ExamRequest>,
) -> Result<Json<ExamResponse>, (StatusCode, Json<ErrorBody>)> {
    match state.processor.submit(req.questions).await {
        Ok(task_id) => {
            info!("  提交成功，任务ID: {}", task_id);
            Ok(Json(ExamResponse { task_id }))
        }
        Err(_) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "No questions".to_string(),
            }),
        )),
    }
}

// ============================================================================
// 进度路由
// ============================================================================

async fn progress(
    State(state): State<AppStateArc>,
    Path(task_id): Path<String>,
) -> Result<Json<ExamTask>, (StatusCode, Json<ErrorBody>)> {
    match state.processor.registry().snapshot(&task_id).await {
        Some(task) => Ok(Json(task)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: "Invalid task".to_string(),
            }),
        )),
    }
}

// ============================================================================
// 下载路由
// ============================================================================

async fn download_pdf(
    State(state): State<AppStateArc>,
    Path(name): Path<String>,
) -> Result<Response, (StatusCode, Json<ErrorBody>)> {
    // 文件名不允许目录成分
    if name.contains('/') || name.contains("..") {
        return Err(not_found());
    }

    let path = state.out_dir.join(&name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "application/pdf")], bytes).into_response()),
        Err(_) => Err(not_found()),
    }
}

fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "File not found".to_string(),
        }),
    )
}

// ============================================================================
// 静态页面
// ============================================================================

async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
