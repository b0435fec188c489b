mod dom;
mod fetch;
mod logging;
mod page;
mod popup;
mod render;

use dollar_street::{AppConfig, AppState};
use wasm_bindgen_futures::spawn_local;

use crate::page::Page;

fn main() {
    console_error_panic_hook::set_once();

    let defaults = AppConfig::default();
    logging::init(defaults.log_level);

    let config = read_config(defaults);
    log::set_max_level(config.log_level);

    spawn_local(start(config));
}

/// Reads `data-*` overrides from the scene container, if the page has one.
fn read_config(defaults: AppConfig) -> AppConfig {
    match dom::element_by_id(render::SCENE_CONTAINER_ID) {
        Ok(container) => {
            defaults.with_overrides(|key| container.get_attribute(&format!("data-{key}")))
        }
        Err(_) => defaults,
    }
}

async fn start(config: AppConfig) {
    let dataset = match fetch::fetch_dataset(&config.dataset_url).await {
        Ok(dataset) => dataset,
        Err(error) => {
            log::error!("failed to load dataset: {error}");
            if let Err(error) = render::render_load_error() {
                log::error!("failed to show load error: {error:?}");
            }
            return;
        }
    };
    log::info!("loaded {} records from {}", dataset.len(), config.dataset_url);

    let page = Page::new(AppState::new(dataset), config);
    if let Err(error) = page.mount() {
        log::error!("failed to mount page: {error:?}");
    }
}
