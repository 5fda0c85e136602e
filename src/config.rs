/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP 服务监听地址
    pub server_host: String,
    /// HTTP 服务监听端口
    pub server_port: u16,
    // --- 模型后端配置 ---
    pub ollama_base_url: String,
    pub model_name: String,
    /// 单次生成调用的超时（秒）
    pub llm_timeout_secs: u64,
    // --- 搜索后端配置 ---
    pub searxng_base_url: String,
    pub searxng_search_endpoint: String,
    /// 每次搜索前的固定等待（秒），对搜索后端限速
    pub searx_delay_secs: f64,
    /// 每题最多保留的证据条数
    pub max_results: usize,
    // --- 产物目录配置 ---
    /// 单题 Markdown 存放目录
    pub md_dir: String,
    /// 汇总 Markdown / PDF 输出目录
    pub out_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            ollama_base_url: "http://127.0.0.1:11434".to_string(),
            model_name: "gemma3:4b".to_string(),
            llm_timeout_secs: 120,
            searxng_base_url: "http://44.44.44.144:9017".to_string(),
            searxng_search_endpoint: "/search".to_string(),
            searx_delay_secs: 3.0,
            max_results: 5,
            md_dir: "md".to_string(),
            out_dir: "output".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or(default.server_host),
            server_port: std::env::var("SERVER_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.server_port),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL").unwrap_or(default.ollama_base_url),
            model_name: std::env::var("MODEL_NAME").unwrap_or(default.model_name),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_timeout_secs),
            searxng_base_url: std::env::var("SEARXNG_BASE_URL").unwrap_or(default.searxng_base_url),
            searxng_search_endpoint: std::env::var("SEARXNG_SEARCH_ENDPOINT").unwrap_or(default.searxng_search_endpoint),
            searx_delay_secs: std::env::var("SEARX_DELAY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.searx_delay_secs),
            max_results: std::env::var("MAX_RESULTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_results),
            md_dir: std::env::var("MD_DIR").unwrap_or(default.md_dir),
            out_dir: std::env::var("OUT_DIR").unwrap_or(default.out_dir),
        }
    }
}
