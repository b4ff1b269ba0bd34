//! Client modules for external API interactions

pub mod article_source;
pub mod share_client;

pub use article_source::{ArticleSource, NytArticleSource};
pub use share_client::{ShareSink, WebhookShareClient};
