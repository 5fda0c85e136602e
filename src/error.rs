use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 搜索后端错误
    #[error("搜索错误: {0}")]
    Search(#[from] SearchError),
    /// 模型后端错误
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// PDF 渲染错误
    #[error("渲染错误: {0}")]
    Render(#[from] RenderError),
    /// 业务逻辑错误
    #[error("业务错误: {0}")]
    Business(#[from] BusinessError),
}

/// 搜索后端错误
#[derive(Debug, Error)]
pub enum SearchError {
    /// 网络请求失败
    #[error("搜索请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 搜索后端返回错误状态码
    #[error("搜索后端返回错误状态 ({endpoint}): {status}")]
    BadStatus { endpoint: String, status: u16 },
    /// JSON 解析失败
    #[error("搜索结果JSON解析失败: {source}")]
    JsonParseFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// 模型后端错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {source}")]
    RequestFailed {
        model: String,
        #[source]
        source: reqwest::Error,
    },
    /// 模型后端返回错误状态码
    #[error("LLM后端返回错误状态 (模型: {model}): {status}")]
    BadStatus { model: String, status: u16 },
    /// 响应中缺少生成文本
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyResponse { model: String },
    /// 响应体解析失败
    #[error("LLM响应JSON解析失败: {source}")]
    JsonParseFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 创建目录失败
    #[error("创建目录失败 ({path}): {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// PDF 渲染错误
#[derive(Debug, Error)]
pub enum RenderError {
    /// 无法启动 pandoc 进程
    #[error("无法启动pandoc进程: {source}")]
    SpawnFailed {
        #[source]
        source: std::io::Error,
    },
    /// pandoc 以非零状态退出
    #[error("pandoc退出失败 (code: {code:?}): {stderr}")]
    ExitFailure { code: Option<i32>, stderr: String },
}

/// 业务逻辑错误
#[derive(Debug, Error)]
pub enum BusinessError {
    /// 提交的题目列表为空
    #[error("题目列表不能为空")]
    EmptyQuestions,
    /// 任务ID不存在
    #[error("任务不存在: {task_id}")]
    TaskNotFound { task_id: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建搜索请求失败错误
    pub fn search_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Search(SearchError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建LLM API调用错误
    pub fn llm_request_failed(model: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Llm(LlmError::RequestFailed {
            model: model.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建任务不存在错误
    pub fn task_not_found(task_id: impl Into<String>) -> Self {
        AppError::Business(BusinessError::TaskNotFound {
            task_id: task_id.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
