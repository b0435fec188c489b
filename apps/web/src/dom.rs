use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

pub fn element_by_id(id: &str) -> Result<Element, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))
}

pub fn typed_by_id<T: JsCast>(id: &str) -> Result<T, JsValue> {
    element_by_id(id)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{id} has an unexpected element type")))
}

/// Creates `<tag>` under `parent` with an optional class and text.
pub fn append(
    parent: &Element,
    tag: &str,
    class: Option<&str>,
    text: Option<&str>,
) -> Result<Element, JsValue> {
    let element = document()?.create_element(tag)?;
    if let Some(class) = class {
        element.set_class_name(class);
    }
    if text.is_some() {
        element.set_text_content(text);
    }
    parent.append_child(&element)?;
    Ok(element)
}

pub fn append_svg(
    parent: &Element,
    tag: &str,
    attributes: &[(&str, &str)],
) -> Result<Element, JsValue> {
    let element = document()?.create_element_ns(Some(SVG_NS), tag)?;
    for (name, value) in attributes {
        element.set_attribute(name, value)?;
    }
    parent.append_child(&element)?;
    Ok(element)
}

pub fn clear(element: &Element) {
    element.set_inner_html("");
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("styled element is not an HtmlElement"))?
        .style()
        .set_property(property, value)
}
