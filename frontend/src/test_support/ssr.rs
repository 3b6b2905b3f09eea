use leptos::*;
use leptos_meta::provide_meta_context;

use crate::api::ApiClient;

/// Unreachable base URL: effects never run under SSR, so nothing is fetched.
pub const OFFLINE_API_BASE_URL: &str = "http://127.0.0.1:9/api";

/// Restores resource loading even when the rendered view panics.
struct ResourceLoadSuppressed;

impl ResourceLoadSuppressed {
    fn enter() -> Self {
        leptos_reactive::suppress_resource_load(true);
        Self
    }
}

impl Drop for ResourceLoadSuppressed {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _suppressed = ResourceLoadSuppressed::enter();
    with_runtime(|| view().into_view().render_to_string().to_string())
}

/// Renders a routed page the way `app_root` sets it up: meta context plus an
/// `ApiClient` in context.
pub fn render_page<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_meta_context();
        provide_context(ApiClient::new_with_base_url(OFFLINE_API_BASE_URL));
        view()
    })
}
