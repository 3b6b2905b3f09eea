pub mod applications;
pub mod candidacy;

pub use applications::ApplicationsPage;
pub use candidacy::CandidacyApplicationsPage;
