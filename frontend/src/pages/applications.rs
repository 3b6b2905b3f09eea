use crate::components::layout::{BreadcrumbEntry, DashboardShell};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    view! {
        <Title text="Applications"/>
        <DashboardShell breadcrumbs=vec![
            BreadcrumbEntry::link("Applications", "#"),
            BreadcrumbEntry::current("Listar"),
        ]>
            <div class="flex flex-1 flex-col gap-4 p-4 pt-0">
                <h1 class="mt-4 text-2xl font-bold text-fg">"Applications Page"</h1>
                <p class="text-fg-muted">
                    "This is the applications page. More content will be added soon."
                </p>
            </div>
        </DashboardShell>
    }
}
