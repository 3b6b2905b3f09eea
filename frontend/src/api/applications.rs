use crate::api::client::ApiClient;
use crate::api::types::{
    ApiError, ApplicationListEnvelope, ApplicationPage, ApplicationQuery, ApplicationRecord,
};

impl ApiClient {
    pub async fn list_applications(
        &self,
        query: &ApplicationQuery,
    ) -> Result<ApplicationPage, ApiError> {
        let base_url = self.resolved_base_url().await;
        let params = query.to_query_pairs();

        let response = self
            .http_client()
            .get(format!("{}/candidacy/applications", base_url))
            .query(&params)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let envelope: ApplicationListEnvelope = Self::read_json(response).await?;
        Ok(decode_page(envelope))
    }
}

/// Decodes each record on its own; malformed records are logged and skipped.
pub fn decode_page(envelope: ApplicationListEnvelope) -> ApplicationPage {
    let mut records = Vec::with_capacity(envelope.data.len());
    let mut skipped = 0;
    for (index, raw) in envelope.data.into_iter().enumerate() {
        match serde_json::from_value::<ApplicationRecord>(raw) {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                log::warn!("Skipping malformed application record #{}: {}", index, err);
            }
        }
    }

    ApplicationPage {
        records,
        total_pages: envelope.total_pages.filter(|pages| *pages > 0).unwrap_or(1),
        skipped,
    }
}
