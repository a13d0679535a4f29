//! AdminApi trait implementation for HttpSupportClient.

use async_trait::async_trait;

use crate::types::StatusResponse;
use crate::{AdminApi, ApiError, FaqEntry, Metrics};

use super::client::{HttpSupportClient, ADMIN_KEY_HEADER};

#[async_trait]
impl AdminApi for HttpSupportClient {
    async fn metrics(&self) -> Result<Metrics, ApiError> {
        let request = self
            .http
            .get(self.url("/metrics"))
            .header(ADMIN_KEY_HEADER, self.admin_key()?);
        let response = self.execute(request, "metrics").await?;
        Self::decode(response).await
    }

    async fn create_faq(&self, faq: &FaqEntry) -> Result<(), ApiError> {
        let request = self
            .http
            .post(self.url("/faqs"))
            .header(ADMIN_KEY_HEADER, self.admin_key()?)
            .json(faq);
        self.execute(request, "create_faq").await?;
        Ok(())
    }

    async fn reindex(&self) -> Result<String, ApiError> {
        let request = self
            .http
            .post(self.url("/reindex"))
            .header(ADMIN_KEY_HEADER, self.admin_key()?);
        let response = self.execute(request, "reindex").await?;
        let body: StatusResponse = Self::decode(response).await?;
        Ok(body.message.unwrap_or_else(|| "reindex requested".into()))
    }
}
