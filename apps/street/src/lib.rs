// Data model, selection and map logic for the Dollar Street page, kept free
// of any browser dependency so it can be tested natively.
pub mod annotation;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod geo;
pub mod record;
pub mod scene;
pub mod view;

pub use app::AppState;
pub use config::AppConfig;
pub use domain::{Income, RecordKind};
pub use error::{Result, StreetError};
pub use record::{Dataset, Record};
pub use scene::{Scene, SceneController};
