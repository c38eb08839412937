use crate::error::{LoadError, Result};
use crate::types::{Dataset, District};
use reqwest::Url;
use tracing::{debug, info};

/// Location of the dataset, relative to the page.
pub const DATA_PATH: &str = "./list.json";

/// Fetches and parses the dataset next to the current page.
///
/// No retry and no timeout: a failure is reported once and the caller shows
/// the static failure message.
pub async fn load() -> Result<Vec<District>> {
    let page = page_url()?;
    let url = resolve_data_url(&page, DATA_PATH)?;
    load_from(url.as_str()).await
}

pub async fn load_from(url: &str) -> Result<Vec<District>> {
    debug!("Fetching dataset from {}", url);

    let dataset: Dataset = reqwest::get(url)
        .await?
        .error_for_status()?
        .json()
        .await?;

    info!(
        "Loaded {} districts with {} stations",
        dataset.districts.len(),
        dataset.station_count()
    );

    Ok(dataset.districts)
}

/// Parses the JSON document used by [`load`].
pub fn parse_dataset(body: &str) -> Result<Dataset> {
    Ok(serde_json::from_str(body)?)
}

/// Resolves `path` against the page the app runs on.
///
/// `reqwest` needs an absolute URL, even when it is backed by the browser's
/// `fetch`.
pub fn resolve_data_url(page: &str, path: &str) -> Result<Url> {
    Url::parse(page)
        .and_then(|base| base.join(path))
        .map_err(|e| LoadError::Location(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn page_url() -> Result<String> {
    web_sys::window()
        .ok_or_else(|| LoadError::Location("no global window".to_string()))?
        .location()
        .href()
        .map_err(|e| LoadError::Location(format!("{e:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
fn page_url() -> Result<String> {
    Err(LoadError::Location(
        "the dataset is only fetched from a browser page".to_string(),
    ))
}
