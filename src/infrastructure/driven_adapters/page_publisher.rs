//! Static Page Publisher
//!
//! Renders the home page with askama and swaps it into the output
//! directory. The page is written to a sibling temp file first and then
//! renamed, so readers never see a partial file.

use std::path::{Path, PathBuf};

use askama::Template;
use async_trait::async_trait;

use crate::domain::gateways::PagePublisher;
use crate::domain::models::content::{CategoryGroup, Content, IndexPage};
use crate::shared::errors::ServiceError;

const INDEX_FILE: &str = "index.html";

/// One advertising slot as rendered
struct SlotView<'a> {
    key: &'a str,
    items: &'a [Content],
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    categories: &'a [CategoryGroup],
    slots: Vec<SlotView<'a>>,
}

impl<'a> IndexTemplate<'a> {
    fn new(page: &'a IndexPage) -> Self {
        Self {
            categories: &page.categories,
            slots: page
                .contents
                .iter()
                .map(|(key, items)| SlotView {
                    key: key.as_str(),
                    items: items.as_slice(),
                })
                .collect(),
        }
    }
}

pub struct FilePagePublisher {
    output_dir: PathBuf,
}

impl FilePagePublisher {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl PagePublisher for FilePagePublisher {
    async fn publish_index(&self, page: &IndexPage) -> Result<PathBuf, ServiceError> {
        let html = IndexTemplate::new(page)
            .render()
            .map_err(|e| ServiceError::Render(e.to_string()))?;

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let target = self.output_dir.join(INDEX_FILE);
        let staging = self.output_dir.join(format!(".{INDEX_FILE}.tmp"));

        tokio::fs::write(&staging, html.as_bytes()).await?;
        tokio::fs::rename(&staging, &target).await?;

        tracing::debug!(path = %target.display(), bytes = html.len(), "Index page written");
        Ok(target)
    }
}
