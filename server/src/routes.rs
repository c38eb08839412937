use app::components::App;
use app::loader::parse_dataset;
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

use crate::config::ServerConfig;

pub fn leptos_options(config: &ServerConfig) -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("frontend")
        .site_pkg_dir("pkg")
        .site_root(config.site_root.to_string_lossy().into_owned())
        .site_addr(config.site_addr)
        .build()
}

/// Full application router: SSR pages, the dataset and the WASM bundle.
pub fn router(config: &ServerConfig) -> Router {
    let options = leptos_options(config);
    let routes = generate_route_list(App);

    Router::new()
        .route_service("/list.json", ServeFile::new(&config.data_path))
        .nest_service("/pkg", ServeDir::new(config.pkg_dir()))
        .leptos_routes(&options, routes, {
            let options = options.clone();
            move || shell(options.clone())
        })
        .fallback(not_found)
        .with_state(options)
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos_meta::MetaTags;
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/pkg/frontend.css"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html("<h1>404 Not Found</h1>"))
}

/// Logs what the browser is going to receive from `/list.json`.
///
/// A broken file is not fatal: the page reports the failure itself.
pub async fn log_dataset_summary(path: &Path) {
    match tokio::fs::read_to_string(path).await {
        Ok(body) => match parse_dataset(&body) {
            Ok(dataset) => info!(
                "Serving {} districts with {} stations from {}",
                dataset.districts.len(),
                dataset.station_count(),
                path.display()
            ),
            Err(e) => warn!("Dataset {} will not load in the browser: {}", path.display(), e),
        },
        Err(e) => warn!("Cannot read dataset {}: {}", path.display(), e),
    }
}
