use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::pages::{ApplicationsPage, CandidacyApplicationsPage};

pub const ROOT_PATH: &str = "/";
pub const APPLICATIONS_PATH: &str = "/dashboard/applications";
pub const CANDIDACY_APPLICATIONS_PATH: &str = "/dashboard/candidacy/applications";

pub const ROUTE_PATHS: &[&str] = &[ROOT_PATH, APPLICATIONS_PATH, CANDIDACY_APPLICATIONS_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path=ROOT_PATH view=ApplicationsPage/>
                <Route path=APPLICATIONS_PATH view=ApplicationsPage/>
                <Route path=CANDIDACY_APPLICATIONS_PATH view=CandidacyApplicationsPage/>
            </Routes>
        </Router>
    }
}
