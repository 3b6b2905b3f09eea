use leptos::*;

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/dashboard/applications", "Applications"),
    ("/dashboard/candidacy/applications", "Candidaturas"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbEntry {
    pub label: String,
    pub href: Option<String>,
}

impl BreadcrumbEntry {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct SidebarState {
    pub open: RwSignal<bool>,
}

impl SidebarState {
    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }
}

pub fn use_sidebar_state() -> SidebarState {
    match use_context::<SidebarState>() {
        Some(state) => state,
        None => {
            let state = SidebarState {
                open: create_rw_signal(true),
            };
            provide_context(state);
            state
        }
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let sidebar = use_sidebar_state();
    let width = move || {
        if sidebar.open.get() {
            "w-64"
        } else {
            "w-0 md:w-14 overflow-hidden"
        }
    };

    view! {
        <aside
            class=move || format!("shrink-0 border-r border-border bg-surface-elevated transition-[width] ease-linear {}", width())
            data-state=move || if sidebar.open.get() { "expanded" } else { "collapsed" }
        >
            <div class="flex h-16 items-center px-4 font-semibold text-fg">"Recrutamento"</div>
            <nav class="px-2 py-2 space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| view! {
                        <a href=*href class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            {*label}
                        </a>
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn SidebarTrigger() -> impl IntoView {
    let sidebar = use_sidebar_state();
    view! {
        <button
            type="button"
            class="-ml-1 inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
            aria-expanded=move || sidebar.open.get()
            on:click=move |_| sidebar.toggle()
        >
            <span class="sr-only">"Alternar barra lateral"</span>
            <svg class="h-5 w-5" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
            </svg>
        </button>
    }
}

#[component]
pub fn Breadcrumbs(items: Vec<BreadcrumbEntry>) -> impl IntoView {
    let last = items.len().saturating_sub(1);
    view! {
        <nav aria-label="breadcrumb">
            <ol class="flex flex-wrap items-center gap-1.5 text-sm text-fg-muted">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let entry = match item.href {
                            Some(href) => view! {
                                <li class="hidden md:block">
                                    <a href=href class="hover:text-fg">{item.label}</a>
                                </li>
                            },
                            None => view! {
                                <li>
                                    <span aria-current="page" class="font-normal text-fg">{item.label}</span>
                                </li>
                            },
                        };
                        let separator = (index < last).then(|| view! {
                            <li role="presentation" aria-hidden="true" class="hidden md:block">"›"</li>
                        });
                        view! { <>{entry}{separator}</> }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}

#[component]
pub fn DashboardShell(breadcrumbs: Vec<BreadcrumbEntry>, children: Children) -> impl IntoView {
    use_sidebar_state();
    view! {
        <div class="flex min-h-screen bg-surface">
            <Sidebar/>
            <div class="flex flex-1 flex-col">
                <header class="flex h-16 shrink-0 items-center gap-2 border-b border-border">
                    <div class="flex items-center gap-2 px-4">
                        <SidebarTrigger/>
                        <div role="separator" aria-orientation="vertical" class="mr-2 h-4 w-px bg-border"></div>
                        <Breadcrumbs items=breadcrumbs/>
                    </div>
                </header>
                <main class="flex flex-1 flex-col">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center gap-3 py-10" role="status">
            <div class="animate-spin rounded-full h-6 w-6 border-b-2 border-action-primary-bg"></div>
            {label.map(|text| view! { <span class="text-action-primary-bg text-lg">{text}</span> })}
        </div>
    }
}
