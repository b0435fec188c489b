use dollar_street::geo::map::{BORDER_STROKE, MARKER_FILL};
use dollar_street::geo::MapView;
use dollar_street::view::PopupDetail;
use dollar_street::StreetError;
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlImageElement;

use crate::dom;
use crate::fetch::{self, FetchError};
use crate::page::Page;

pub const POPUP_ID: &str = "popup";
pub const CLOSE_ID: &str = "popup-close";
pub const MAP_ID: &str = "popup-map";
const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Error)]
enum MapError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Atlas(#[from] StreetError),
}

/// Fills the detail panel for dataset record `index`, unhides it and starts
/// the map render.
pub fn show_popup(page: &Page, index: usize) -> Result<(), JsValue> {
    let opened = {
        let mut state = page.state.borrow_mut();
        let detail = state.open_popup(index).cloned();
        let serial = state.popup_serial();
        detail.map(|detail| (detail, serial))
    };
    let Some((detail, serial)) = opened else {
        log::warn!("no record at index {index}");
        return Ok(());
    };

    let image = dom::typed_by_id::<HtmlImageElement>("popup-image")?;
    image.set_src(&detail.image);
    image.set_alt(&detail.location);
    dom::element_by_id("popup-country")?.set_text_content(Some(&detail.location));
    dom::element_by_id("popup-income")?.set_text_content(Some(&detail.income));
    dom::element_by_id("popup-description")?.set_text_content(Some(&detail.description));

    dom::element_by_id(POPUP_ID)?
        .class_list()
        .remove_1(HIDDEN_CLASS)?;

    draw_map(page, &detail, serial)
}

pub fn hide_popup(page: &Page) -> Result<(), JsValue> {
    page.state.borrow_mut().close_popup();
    dom::element_by_id(POPUP_ID)?.class_list().add_1(HIDDEN_CLASS)
}

fn draw_map(page: &Page, detail: &PopupDetail, serial: u64) -> Result<(), JsValue> {
    let container = dom::element_by_id(MAP_ID)?;
    dom::clear(&container);

    let page = page.clone();
    let country = detail.country.clone();
    spawn_local(async move {
        let view = match load_map(&page, &country).await {
            Ok(view) => view,
            Err(error) => {
                log::error!("failed to load world map: {error}");
                return;
            }
        };

        // A newer popup may have replaced this one while the atlas loaded.
        if !page.state.borrow().is_current_popup(serial) {
            log::debug!("dropping map for superseded popup {serial}");
            return;
        }

        if let Err(error) = render_map(&view) {
            log::error!("failed to draw map for {country}: {error:?}");
        }
    });
    Ok(())
}

async fn load_map(page: &Page, country: &str) -> Result<MapView, MapError> {
    let topology = fetch::fetch_topology(&page.config.atlas_url).await?;
    let features = topology.features(&page.config.atlas_object)?;
    Ok(MapView::build(&features, country, &page.config.map))
}

fn render_map(view: &MapView) -> Result<(), JsValue> {
    let container = dom::element_by_id(MAP_ID)?;
    dom::clear(&container);

    let width = view.width.to_string();
    let height = view.height.to_string();
    let view_box = format!("0 0 {width} {height}");
    let svg = dom::append_svg(
        &container,
        "svg",
        &[
            ("width", width.as_str()),
            ("height", height.as_str()),
            ("viewBox", view_box.as_str()),
        ],
    )?;

    for shape in &view.shapes {
        let path = dom::append_svg(
            &svg,
            "path",
            &[
                ("d", shape.path.as_str()),
                ("fill", shape.fill()),
                ("stroke", BORDER_STROKE),
            ],
        )?;
        path.set_attribute("data-name", &shape.name)?;
    }

    if let Some(marker) = &view.marker {
        let cx = format!("{:.1}", marker.x);
        let cy = format!("{:.1}", marker.y);
        let radius = marker.radius.to_string();
        dom::append_svg(
            &svg,
            "circle",
            &[
                ("cx", cx.as_str()),
                ("cy", cy.as_str()),
                ("r", radius.as_str()),
                ("fill", MARKER_FILL),
            ],
        )?;
    }
    Ok(())
}
