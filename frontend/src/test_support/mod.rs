#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{
        ApiError, ApplicationLocation, ApplicationPage, ApplicationQuery, ApplicationRecord,
        ApplicationStatus, NamedPlace,
    };
    use crate::pages::candidacy::repository::ApplicationQueryService;
    use chrono::{TimeZone, Utc};
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};

    pub fn record(id: &str, status: ApplicationStatus) -> ApplicationRecord {
        ApplicationRecord {
            id: id.into(),
            full_name: format!("Candidate {}", id),
            email: format!("{}@example.com", id),
            phone_number: Some("+351 910 000 000".into()),
            location: Some(ApplicationLocation {
                city: Some(NamedPlace {
                    name: Some("Lisboa".into()),
                }),
                district: Some(NamedPlace {
                    name: Some("Lisboa".into()),
                }),
            }),
            desired_position: "Backend Developer".into(),
            status,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
        }
    }

    pub fn page_of(ids: &[&str], total_pages: u32) -> ApplicationPage {
        ApplicationPage {
            records: ids
                .iter()
                .map(|id| record(id, ApplicationStatus::Pending))
                .collect(),
            total_pages,
            skipped: 0,
        }
    }

    pub fn query_failed() -> ApiError {
        ApiError::request_failed("Request failed: connection refused")
    }

    /// Replays canned responses in order and records every query it receives.
    #[derive(Clone, Default)]
    pub struct FakeApplicationService {
        responses: Rc<RefCell<VecDeque<Result<ApplicationPage, ApiError>>>>,
        calls: Rc<RefCell<Vec<ApplicationQuery>>>,
    }

    impl FakeApplicationService {
        pub fn with_responses(responses: Vec<Result<ApplicationPage, ApiError>>) -> Self {
            Self {
                responses: Rc::new(RefCell::new(responses.into())),
                calls: Rc::default(),
            }
        }

        pub fn calls(&self) -> Vec<ApplicationQuery> {
            self.calls.borrow().clone()
        }
    }

    impl ApplicationQueryService for FakeApplicationService {
        async fn fetch_applications(
            &self,
            query: &ApplicationQuery,
        ) -> Result<ApplicationPage, ApiError> {
            self.calls.borrow_mut().push(query.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(query_failed()))
        }
    }
}
