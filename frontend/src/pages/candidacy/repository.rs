use crate::api::{ApiClient, ApiError, ApplicationPage, ApplicationQuery};
use std::rc::Rc;

/// Source of application pages for the listing.
#[allow(async_fn_in_trait)]
pub trait ApplicationQueryService {
    async fn fetch_applications(
        &self,
        query: &ApplicationQuery,
    ) -> Result<ApplicationPage, ApiError>;
}

#[derive(Clone)]
pub struct ApplicationsRepository {
    client: Rc<ApiClient>,
}

impl ApplicationsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }
}

impl ApplicationQueryService for ApplicationsRepository {
    async fn fetch_applications(
        &self,
        query: &ApplicationQuery,
    ) -> Result<ApplicationPage, ApiError> {
        self.client.list_applications(query).await
    }
}
