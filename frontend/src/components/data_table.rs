use crate::api::NO_LIMIT;
use crate::components::empty_state::EmptyState;
use leptos::*;

pub const PAGE_SIZE_OPTIONS: &[(u32, &str)] = &[
    (10, "10"),
    (20, "20"),
    (50, "50"),
    (100, "100"),
    (NO_LIMIT, "Todos"),
];

/// A row the table can render, one cell per column key.
pub trait TableRow {
    fn row_key(&self) -> String;
    fn cell(&self, column: &str) -> View;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub key: &'static str,
    pub header: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Input,
    Select(Vec<FilterOption>),
    Date,
}

#[derive(Clone)]
pub struct TableFilter {
    pub kind: FilterKind,
    pub column: Option<&'static str>,
    pub placeholder: &'static str,
    pub value: Signal<String>,
    pub on_change: Callback<String>,
}

pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

fn render_filter(filter: TableFilter) -> View {
    let TableFilter {
        kind,
        column,
        placeholder,
        value,
        on_change,
    } = filter;
    let input_class = "h-9 rounded-md border border-border bg-surface px-3 text-sm shadow-sm";

    match kind {
        FilterKind::Input => view! {
            <input
                type="text"
                class=format!("{} max-w-sm", input_class)
                data-column=column
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.call(event_target_value(&ev))
            />
        }
        .into_view(),
        FilterKind::Date => view! {
            <input
                type="date"
                class=input_class
                data-column=column
                placeholder=placeholder
                aria-label=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.call(event_target_value(&ev))
            />
        }
        .into_view(),
        FilterKind::Select(options) => view! {
            <select
                class=input_class
                data-column=column
                aria-label=placeholder
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|option| view! {
                        <option value=option.value selected=move || value.get() == option.value>
                            {option.label}
                        </option>
                    })
                    .collect_view()}
            </select>
        }
        .into_view(),
    }
}

#[component]
pub fn DataTable<R>(
    columns: Vec<TableColumn>,
    #[prop(into)] data: Signal<Vec<R>>,
    #[prop(into)] page: Signal<u32>,
    on_page_change: Callback<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] limit: Signal<u32>,
    on_limit_change: Callback<u32>,
    #[prop(optional)] filters: Vec<TableFilter>,
) -> impl IntoView
where
    R: TableRow + Clone + 'static,
{
    let column_count = columns.len();
    let header_columns = columns.clone();
    let body_columns = columns;

    let go_to = move |target: u32| {
        let target = clamp_page(target, total_pages.get_untracked());
        if target != page.get_untracked() {
            on_page_change.call(target);
        }
    };

    let rows_view = move || {
        let rows = data.get();
        if rows.is_empty() {
            return view! {
                <tr>
                    <td colspan=column_count class="p-4">
                        <EmptyState title="Nenhum resultado."/>
                    </td>
                </tr>
            }
            .into_view();
        }
        rows.iter()
            .map(|row| view! {
                <tr class="border-b border-border hover:bg-surface-muted" data-key=row.row_key()>
                    {body_columns
                        .iter()
                        .map(|column| view! {
                            <td class="px-4 py-3 text-sm text-fg whitespace-nowrap">{row.cell(column.key)}</td>
                        })
                        .collect_view()}
                </tr>
            })
            .collect_view()
    };

    view! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-center gap-3">
                {filters.into_iter().map(render_filter).collect_view()}
            </div>
            <div class="rounded-md border border-border overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            {header_columns
                                .iter()
                                .map(|column| view! {
                                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                        {column.header}
                                    </th>
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>{rows_view}</tbody>
                </table>
            </div>
            <div class="flex flex-wrap items-center justify-between gap-3 text-sm">
                <label class="flex items-center gap-2 text-fg-muted">
                    "Linhas por página"
                    <select
                        class="h-8 rounded-md border border-border bg-surface px-2"
                        prop:value=move || limit.get().to_string()
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                                on_limit_change.call(size);
                            }
                        }
                    >
                        {PAGE_SIZE_OPTIONS
                            .iter()
                            .map(|(size, label)| {
                                let size = *size;
                                view! {
                                    <option value=size.to_string() selected=move || limit.get() == size>
                                        {*label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <div class="flex items-center gap-3">
                    <button
                        class="px-3 py-1 border rounded disabled:opacity-50"
                        disabled=move || page.get() <= 1
                        on:click=move |_| go_to(page.get_untracked().saturating_sub(1))
                    >
                        "Anterior"
                    </button>
                    <span class="text-fg">
                        "Página " {move || page.get()} " de " {move || total_pages.get().max(1)}
                    </span>
                    <button
                        class="px-3 py-1 border rounded disabled:opacity-50"
                        disabled=move || page.get() >= total_pages.get().max(1)
                        on:click=move |_| go_to(page.get_untracked() + 1)
                    >
                        "Seguinte"
                    </button>
                </div>
            </div>
        </div>
    }
}
