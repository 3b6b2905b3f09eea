use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Europe::Lisbon;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

impl RuntimeConfig {
    fn merge(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            time_zone: self.time_zone.or(fallback.time_zone),
        }
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

pub fn parse_time_zone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// Display time zone for dates; the default until `init` has resolved the config.
pub fn current_time_zone() -> Tz {
    TIME_ZONE.get().copied().unwrap_or(DEFAULT_TIME_ZONE)
}

fn read_global(name: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn snapshot_from_globals() -> RuntimeConfig {
    // window.__CANDIDACY_ENV (env.js) wins over window.__CANDIDACY_CONFIG.
    let env = RuntimeConfig {
        api_base_url: read_global("__CANDIDACY_ENV", &["API_BASE_URL", "api_base_url"]),
        time_zone: read_global("__CANDIDACY_ENV", &["TIME_ZONE", "time_zone"]),
    };
    let window_config = RuntimeConfig {
        api_base_url: read_global("__CANDIDACY_CONFIG", &["api_base_url", "API_BASE_URL"]),
        time_zone: read_global("__CANDIDACY_CONFIG", &["time_zone", "TIME_ZONE"]),
    };
    env.merge(window_config)
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get(config_json_url()?).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn config_json_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{}/config.json", origin))
}

fn apply(cfg: RuntimeConfig) -> String {
    if let Some(tz_name) = cfg.time_zone.as_deref() {
        match parse_time_zone(tz_name) {
            Some(tz) => {
                let _ = TIME_ZONE.set(tz);
            }
            None => log::warn!(
                "Unknown time zone '{}', using {}",
                tz_name,
                DEFAULT_TIME_ZONE.name()
            ),
        }
    }
    let url = cfg
        .api_base_url
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    API_BASE_URL.get_or_init(|| url).clone()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let globals = snapshot_from_globals();
    if globals.api_base_url.is_some() {
        return apply(globals);
    }
    let fetched = fetch_runtime_config().await.unwrap_or_default();
    apply(globals.merge(fetched))
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!(
        "Runtime config initialized (api: {}, tz: {})",
        base_url,
        current_time_zone().name()
    );
}
