//! Portfolio Common Library
//!
//! CLIとWeb(WASM)で共有される型とロジック:
//! コンテンツ読込、プロジェクトカタログ、問い合わせフォーム検証、テーマ、SEO

pub mod types;
pub mod error;
pub mod frontmatter;
pub mod loader;
pub mod catalog;
pub mod selection;
pub mod contact;
pub mod config;
pub mod seo;
pub mod theme;
pub mod markdown;

pub use types::{Category, ContactContent, ProjectRecord, UNCATEGORIZED_LABEL};
pub use error::{Error, Result};
pub use frontmatter::{parse_document, split_front_matter, MarkdownDocument};
pub use loader::{
    load_catalog, load_catalog_report, load_contact, load_markdown_collection, load_markdown_file,
    CatalogLoad, ContentSource, SkippedFile, MANIFEST_FILE,
};
pub use catalog::{compute_visible, derive_categories, Catalog, CatalogView, CategoryFilter};
pub use selection::{ClickOrigin, SelectionState};
pub use contact::{
    submit_contact, ContactField, ContactForm, EmailPayload, EmailRelay, SubmissionError,
    SubmitOutcome, ValidationErrors,
};
pub use config::{EmailJsConfig, SiteConfig};
pub use seo::{PageMeta, ResolvedMeta};
pub use theme::Theme;
