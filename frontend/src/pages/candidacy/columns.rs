use leptos::*;

use super::types::ApplicationRow;
use crate::api::ApplicationStatus;
use crate::components::data_table::{TableColumn, TableRow};

pub fn application_columns() -> Vec<TableColumn> {
    vec![
        TableColumn {
            key: "candidateName",
            header: "Candidato",
        },
        TableColumn {
            key: "email",
            header: "Email",
        },
        TableColumn {
            key: "phone",
            header: "Telefone",
        },
        TableColumn {
            key: "location",
            header: "Localização",
        },
        TableColumn {
            key: "position",
            header: "Vaga",
        },
        TableColumn {
            key: "status",
            header: "Status",
        },
        TableColumn {
            key: "appliedAt",
            header: "Data",
        },
    ]
}

pub fn status_badge_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "bg-yellow-100 text-yellow-800",
        ApplicationStatus::InReview => "bg-blue-100 text-blue-800",
        ApplicationStatus::Interview => "bg-purple-100 text-purple-800",
        ApplicationStatus::Accepted => "bg-green-100 text-green-800",
        ApplicationStatus::Rejected => "bg-red-100 text-red-800",
    }
}

#[component]
pub fn StatusBadge(status: ApplicationStatus) -> impl IntoView {
    view! {
        <span
            class=format!("px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}", status_badge_class(status))
            data-status=status.as_str()
        >
            {status.label()}
        </span>
    }
}

impl TableRow for ApplicationRow {
    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn cell(&self, column: &str) -> View {
        match column {
            "candidateName" => self.candidate_name.clone().into_view(),
            "email" => self.email.clone().into_view(),
            "phone" => self.phone.clone().into_view(),
            "location" => self.location.clone().into_view(),
            "position" => self.position.clone().into_view(),
            "status" => view! { <StatusBadge status=self.status/> }.into_view(),
            "appliedAt" => self.applied_at.clone().into_view(),
            _ => ().into_view(),
        }
    }
}
