use super::columns::application_columns;
use super::view_model::{use_applications_view_model, ApplicationsViewModel};
use crate::components::data_table::DataTable;
use crate::components::layout::{BreadcrumbEntry, DashboardShell, LoadingSpinner};
use leptos::*;
use leptos_meta::Title;

pub const LISTING_TITLE: &str = "Lista de Candidaturas";

#[component]
pub fn CandidacyApplicationsPage() -> impl IntoView {
    let vm = use_applications_view_model();
    view! {
        <Title text=LISTING_TITLE/>
        <DashboardShell breadcrumbs=vec![
            BreadcrumbEntry::link("Candidaturas", crate::router::CANDIDACY_APPLICATIONS_PATH),
            BreadcrumbEntry::current("Listar"),
        ]>
            <ApplicationsListing vm=vm/>
        </DashboardShell>
    }
}

#[component]
pub fn ApplicationsListing(vm: ApplicationsViewModel) -> impl IntoView {
    let loading = create_memo(move |_| vm.listing.with(|state| state.loading));
    let total_pages = Signal::derive(move || vm.listing.with(|state| state.total_pages));

    view! {
        <div class="container mx-auto py-10 px-4 space-y-6">
            <h1 class="text-2xl font-bold text-fg">{LISTING_TITLE}</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner label="Carregando..."/> }
            >
                <DataTable
                    columns=application_columns()
                    data=vm.visible_rows
                    page=vm.page
                    on_page_change=Callback::new(move |page| vm.set_page(page))
                    total_pages=total_pages
                    limit=vm.limit
                    on_limit_change=Callback::new(move |size| vm.set_page_size(size))
                    filters=vm.filter_descriptors()
                />
            </Show>
        </div>
    }
}
