//! 证据检索服务 - 业务能力层
//!
//! 只负责"搜索核查证据"能力，不关心流程
//!
//! 对一道题发起一次域名受限的搜索，按权威度对结果打分排序，
//! 截断后交给核查提示词使用。

use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use crate::clients::SearchBackend;
use crate::error::AppResult;

/// 域名 → 权威度评分表
///
/// 按声明顺序匹配，先命中者生效。未命中的域名得最低分 1。
pub const DOMAIN_PRIORITY: &[(&str, u8)] = &[
    ("indiankanoon.org", 5),
    ("sci.gov.in", 5),
    ("supremecourtofindia.nic.in", 5),
    ("highcourts.gov.in", 4),
    ("gov.in", 4),
    ("scconline.com", 4),
];

/// 搜索查询附加的域名限制子句
const SITE_FILTER: &str = "site:indiankanoon.org OR site:gov.in";

/// 一条证据摘要
#[derive(Debug, Clone)]
pub struct EvidenceSnippet {
    /// 摘要文本
    pub content: String,
    /// 域名权威度评分，越高越可信
    pub score: u8,
}

/// 证据检索服务
///
/// 职责：
/// - 对单个题干发起域名受限搜索
/// - 丢弃缺少 url 或 content 的结果
/// - 按权威度评分排序并截断
/// - 只处理单个 Question
/// - 不关心流程顺序
pub struct FactCheckService {
    search: Arc<dyn SearchBackend>,
    delay: Duration,
    max_results: usize,
}

impl FactCheckService {
    /// 创建新的证据检索服务
    pub fn new(search: Arc<dyn SearchBackend>, delay: Duration, max_results: usize) -> Self {
        Self {
            search,
            delay,
            max_results,
        }
    }

    /// 检索一道题的核查证据
    ///
    /// 请求前等待固定间隔，对搜索后端限速；等待只阻塞当前 worker。
    /// 任何网络或解析错误都向上传播，由编排层决定如何处置。
    pub async fn fact_check(&self, question: &str) -> AppResult<Vec<EvidenceSnippet>> {
        sleep(self.delay).await;

        let query = format!("{} {}", question, SITE_FILTER);
        let data = self.search.search(&query).await?;

        let mut snippets = Vec::new();
        if let Some(results) = data.get("results").and_then(|v| v.as_array()) {
            for item in results {
                let url = item.get("url").and_then(|v| v.as_str()).unwrap_or("");
                let content = item.get("content").and_then(|v| v.as_str()).unwrap_or("");
                if url.is_empty() || content.is_empty() {
                    continue;
                }
                snippets.push(EvidenceSnippet {
                    content: content.to_string(),
                    score: domain_score(url),
                });
            }
        }

        debug!("检索到 {} 条有效证据", snippets.len());

        Ok(rank_snippets(snippets, self.max_results))
    }
}

/// 按 URL 的主机名计算权威度评分
pub fn domain_score(url: &str) -> u8 {
    let host = match reqwest::Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(|h| h.to_lowercase())
            .unwrap_or_default(),
        Err(_) => return 1,
    };

    for (domain, score) in DOMAIN_PRIORITY {
        if host.contains(domain) {
            return *score;
        }
    }
    1
}

/// 按评分降序排序并截断
///
/// 稳定排序：同分的证据保持响应中的原始顺序。
pub fn rank_snippets(mut snippets: Vec<EvidenceSnippet>, max: usize) -> Vec<EvidenceSnippet> {
    snippets.sort_by(|a, b| b.score.cmp(&a.score));
    snippets.truncate(max);
    snippets
}

/// 把证据摘要拼接为核查提示词的上下文（每行一条）
pub fn join_evidence(snippets: &[EvidenceSnippet]) -> String {
    snippets
        .iter()
        .map(|s| format!("- {}", s.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_score_priority_table() {
        assert_eq!(domain_score("https://indiankanoon.org/doc/1234/"), 5);
        assert_eq!(domain_score("https://www.sci.gov.in/judgments"), 5);
        assert_eq!(domain_score("https://main.sci.gov.in/case"), 5);
        assert_eq!(domain_score("https://cdnbbsr.s3waas.gov.in/act.pdf"), 4);
        assert_eq!(domain_score("https://www.scconline.com/blog/"), 4);
    }

    #[test]
    fn test_domain_score_unknown_host() {
        assert_eq!(domain_score("https://example.com/page"), 1);
        assert_eq!(domain_score("https://wikipedia.org/wiki/Res_judicata"), 1);
        // 无法解析的 URL 也按最低分处理
        assert_eq!(domain_score("not a url"), 1);
    }

    #[test]
    fn test_rank_snippets_stable_descending() {
        let make = |content: &str, score: u8| EvidenceSnippet {
            content: content.to_string(),
            score,
        };

        let snippets = vec![
            make("a", 1),
            make("b", 5),
            make("c", 4),
            make("d", 1),
            make("e", 5),
        ];

        let ranked = rank_snippets(snippets, 5);
        let order: Vec<&str> = ranked.iter().map(|s| s.content.as_str()).collect();

        // 降序排列，同分保持原始相对顺序
        assert_eq!(order, vec!["b", "e", "c", "a", "d"]);
    }

    #[test]
    fn test_rank_snippets_truncates() {
        let snippets = (0..8)
            .map(|i| EvidenceSnippet {
                content: format!("s{}", i),
                score: 1,
            })
            .collect();

        let ranked = rank_snippets(snippets, 5);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].content, "s0");
        assert_eq!(ranked[4].content, "s4");
    }

    #[test]
    fn test_join_evidence_one_per_line() {
        let snippets = vec![
            EvidenceSnippet {
                content: "first".to_string(),
                score: 5,
            },
            EvidenceSnippet {
                content: "second".to_string(),
                score: 1,
            },
        ];

        assert_eq!(join_evidence(&snippets), "- first\n- second");
        assert_eq!(join_evidence(&[]), "");
    }
}
