use dollar_street::geo::Topology;
use dollar_street::Dataset;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no browser window available")]
    NoWindow,
    #[error("could not build request for {url}: {message}")]
    Request { url: String, message: String },
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not read body of {url}: {message}")]
    Body { url: String, message: String },
    #[error("could not decode {url}: {message}")]
    Decode { url: String, message: String },
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

async fn send(url: &str, mode: RequestMode) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(mode);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|error| FetchError::Request {
            url: url.to_string(),
            message: js_message(&error),
        })?;

    let network = |error: JsValue| FetchError::Network {
        url: url.to_string(),
        message: js_message(&error),
    };
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?;
    let response = response_value
        .dyn_into::<Response>()
        .map_err(network)?;

    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    Ok(response)
}

fn body_error(url: &str) -> impl Fn(JsValue) -> FetchError + '_ {
    move |error| FetchError::Body {
        url: url.to_string(),
        message: js_message(&error),
    }
}

/// Loads the household records from the page's own origin.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, FetchError> {
    let response = send(url, RequestMode::SameOrigin).await?;
    let json = JsFuture::from(response.json().map_err(body_error(url))?)
        .await
        .map_err(body_error(url))?;

    serde_wasm_bindgen::from_value::<Dataset>(json).map_err(|error| FetchError::Decode {
        url: url.to_string(),
        message: error.to_string(),
    })
}

/// Loads a TopoJSON document, typically from a CDN.
pub async fn fetch_topology(url: &str) -> Result<Topology, FetchError> {
    let response = send(url, RequestMode::Cors).await?;
    let text = JsFuture::from(response.text().map_err(body_error(url))?)
        .await
        .map_err(body_error(url))?
        .as_string()
        .ok_or_else(|| FetchError::Body {
            url: url.to_string(),
            message: "body is not text".to_string(),
        })?;

    Topology::from_json_str(&text).map_err(|error| FetchError::Decode {
        url: url.to_string(),
        message: error.to_string(),
    })
}
