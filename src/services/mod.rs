pub mod answer_service;
pub mod fact_check;
pub mod markdown_writer;
pub mod pdf_renderer;

pub use answer_service::AnswerService;
pub use fact_check::{EvidenceSnippet, FactCheckService};
pub use markdown_writer::MarkdownWriter;
pub use pdf_renderer::{PandocRenderer, PdfRenderer};
