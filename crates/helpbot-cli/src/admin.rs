//! Dashboard subcommands.

use helpbot_client::{AdminApi, FaqEntry};
use helpbot_common::HelpbotError;
use tracing::info;

use crate::render;

pub async fn metrics(api: &dyn AdminApi) -> Result<(), HelpbotError> {
    let metrics = api.metrics().await?;
    println!("{}", render::format_metrics(&metrics));
    Ok(())
}

pub async fn create_faq(
    api: &dyn AdminApi,
    title: String,
    content: String,
    tags: Vec<String>,
) -> Result<(), HelpbotError> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(HelpbotError::Other(
            "FAQ title and content must not be empty".into(),
        ));
    }

    let faq = FaqEntry {
        title,
        content,
        tags,
    };
    api.create_faq(&faq).await?;
    info!(title = %faq.title, "FAQ created");
    println!("FAQ \"{}\" created.", faq.title);
    Ok(())
}

pub async fn reindex(api: &dyn AdminApi) -> Result<(), HelpbotError> {
    let message = api.reindex().await?;
    println!("{message}");
    Ok(())
}
