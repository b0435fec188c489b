use dollar_street::scene::{NavState, SceneConfig};
use dollar_street::view::{self, FilterOption, ImageCard, GRID_HINT};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlButtonElement, HtmlImageElement, HtmlSelectElement};

use crate::dom::{self, append};
use crate::page::{listen, Page};
use crate::popup;

pub const SCENE_CONTAINER_ID: &str = "scene-container";
pub const NAV_ID: &str = "nav";
pub const INCOME_FILTER_ID: &str = "incomeFilter";
pub const COUNTRY_FILTER_ID: &str = "countryFilter";

/// Clears the scene container and builds the active scene from scratch.
pub fn render_scene(page: &Page) -> Result<(), JsValue> {
    let container = dom::element_by_id(SCENE_CONTAINER_ID)?;
    dom::clear(&container);
    page.drop_scene_listeners();

    let scene = page.state.borrow().scene();
    match scene.config() {
        Some(config) => render_image_scene(page, &container, config),
        None => render_overview(page, &container),
    }
}

fn render_overview(page: &Page, container: &Element) -> Result<(), JsValue> {
    let view = page.state.borrow().overview();

    append(container, "h2", Some("scene-title"), Some(view.title))?;
    append(container, "p", Some("scene-intro"), Some(view.intro))?;

    let summary = append(container, "div", Some("income-summary"), None)?;
    for card in &view.cards {
        let element = append(&summary, "div", Some(&card.class_name()), None)?;
        append(&element, "h3", None, Some(card.label))?;
        append(&element, "p", Some("avg-income"), Some(card.average))?;
        append(&element, "p", Some("count"), Some(&card.count_label()))?;
    }

    append(container, "p", Some("call-to-action"), Some(view.call_to_action))?;
    Ok(())
}

fn render_image_scene(
    page: &Page,
    container: &Element,
    config: &SceneConfig,
) -> Result<(), JsValue> {
    append(container, "h2", Some("scene-title"), Some(config.title))?;
    append(container, "p", Some("scene-intro"), Some(config.description))?;
    render_filters(page, container)?;

    let grid = append(container, "div", Some("image-row"), None)?;
    grid.set_id(config.container_id);

    render_grid(page)
}

fn render_filters(page: &Page, container: &Element) -> Result<(), JsValue> {
    let Some(controls) = page.state.borrow().filter_controls() else {
        return Ok(());
    };

    let bar = append(container, "div", Some("filter-bar"), None)?;
    append(&bar, "span", Some("filter-title"), Some("Filter by:"))?;
    let income = append_select(&bar, "Income Level:", INCOME_FILTER_ID, &controls.income)?;
    let country = append_select(&bar, "Country:", COUNTRY_FILTER_ID, &controls.country)?;
    append(&bar, "p", Some("filter-hint"), Some(GRID_HINT))?;

    let handle = page.clone();
    page.keep_scene_listener(listen(&income, "change", move |event| {
        if let Some(value) = select_value(&event) {
            handle.state.borrow_mut().set_income_filter(&value);
            redraw_grid(&handle);
        }
    })?);

    let handle = page.clone();
    page.keep_scene_listener(listen(&country, "change", move |event| {
        if let Some(value) = select_value(&event) {
            handle.state.borrow_mut().set_country_filter(&value);
            redraw_grid(&handle);
        }
    })?);

    Ok(())
}

fn append_select(
    parent: &Element,
    label: &str,
    id: &str,
    options: &[FilterOption],
) -> Result<Element, JsValue> {
    let group = append(parent, "div", Some("filter-group"), None)?;
    let caption = append(&group, "label", None, Some(label))?;
    caption.set_attribute("for", id)?;

    let select = append(&group, "select", None, None)?;
    select.set_id(id);
    for option in options {
        let element = append(&select, "option", None, Some(&option.label))?;
        element.set_attribute("value", &option.value)?;
    }
    Ok(select)
}

fn select_value(event: &Event) -> Option<String> {
    event
        .target()?
        .dyn_into::<HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

fn redraw_grid(page: &Page) {
    if let Err(error) = render_grid(page) {
        log::error!("failed to redraw image grid: {error:?}");
    }
}

/// Rebuilds the image grid of the active scene from the current filters.
pub fn render_grid(page: &Page) -> Result<(), JsValue> {
    let (config, cards) = {
        let state = page.state.borrow();
        (state.scene().config(), state.image_cards())
    };
    let Some(config) = config else {
        return Ok(());
    };

    let grid = dom::element_by_id(config.container_id)?;
    dom::clear(&grid);
    page.drop_grid_listeners();

    for card in &cards {
        render_card(page, &grid, card)?;
    }
    log::debug!("rendered {} {} cards", cards.len(), config.kind.as_str());
    Ok(())
}

fn render_card(page: &Page, grid: &Element, card: &ImageCard) -> Result<(), JsValue> {
    let tile = append(grid, "div", Some("image-box"), None)?;

    let image = dom::document()?
        .create_element("img")?
        .dyn_into::<HtmlImageElement>()
        .map_err(JsValue::from)?;
    image.set_src(&card.image);
    image.set_alt(&card.alt);
    tile.append_child(&image)?;
    page.keep_grid_listener(listen(&image, "error", |event| {
        let target = event.target().and_then(|target| target.dyn_into::<Element>().ok());
        if let Some(target) = target {
            if let Err(error) = dom::set_style(&target, "display", "none") {
                log::warn!("could not hide broken image: {error:?}");
            }
        }
    })?);

    let annotation = append(&tile, "div", Some("annotation"), None)?;
    let header = append(&annotation, "div", Some("annotation-header"), None)?;
    let country = append(&header, "p", Some("country"), None)?;
    append(&country, "strong", None, Some(&card.country))?;
    append(&header, "div", Some(&card.badge_class), Some(&card.badge))?;

    let content = append(&annotation, "div", Some("annotation-content"), None)?;
    append(&content, "p", Some("monthly-income"), Some(&card.monthly_income))?;
    append(&content, "div", Some("annotation-text"), Some(card.annotation))?;

    let tooltip = append(&tile, "div", Some("tooltip"), None)?;
    let tooltip_content = append(&tooltip, "div", Some("tooltip-content"), None)?;
    append(&tooltip_content, "div", Some("tooltip-location"), Some(&card.tooltip_location))?;
    append(&tooltip_content, "div", Some("tooltip-income"), Some(&card.monthly_income))?;
    append(&tooltip_content, "div", Some("tooltip-photo"), Some(&card.tooltip_photo))?;

    let hover = [
        ("mouseenter", "1", "scale(1.05)"),
        ("mouseleave", "0", "scale(1)"),
    ];
    for (event, opacity, scale) in hover {
        let (tile_ref, tooltip_ref) = (tile.clone(), tooltip.clone());
        page.keep_grid_listener(listen(&tile, event, move |_| {
            let result = dom::set_style(&tooltip_ref, "opacity", opacity)
                .and_then(|()| dom::set_style(&tile_ref, "transform", scale));
            if let Err(error) = result {
                log::warn!("hover styling failed: {error:?}");
            }
        })?);
    }

    let handle = page.clone();
    let index = card.index;
    page.keep_grid_listener(listen(&tile, "click", move |_| {
        if let Err(error) = popup::show_popup(&handle, index) {
            log::error!("failed to open popup: {error:?}");
        }
    })?);

    Ok(())
}

/// Enables the nav buttons that can move and refreshes the progress text.
pub fn update_navigation(page: &Page) -> Result<(), JsValue> {
    let nav = page.state.borrow().nav_state();
    apply_navigation(&nav)
}

fn apply_navigation(nav: &NavState) -> Result<(), JsValue> {
    for (id, disabled) in nav.buttons() {
        dom::typed_by_id::<HtmlButtonElement>(id)?.set_disabled(disabled);
    }

    let bar = dom::element_by_id(NAV_ID)?;
    if let Some(previous) = bar.query_selector(".progress")? {
        previous.remove();
    }
    if let Some(progress) = &nav.progress {
        append(&bar, "div", Some("progress"), Some(progress))?;
    }
    Ok(())
}

/// Replaces the scene with the load failure notice and locks navigation.
pub fn render_load_error() -> Result<(), JsValue> {
    let failure = view::load_failure();
    dom::element_by_id(SCENE_CONTAINER_ID)?.set_inner_html(&failure.markup());
    apply_navigation(&failure.nav)
}
