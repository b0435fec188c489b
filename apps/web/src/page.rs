use std::cell::RefCell;
use std::rc::Rc;

use dollar_street::scene::{HOME_BUTTON, NEXT_BUTTON, PREV_BUTTON};
use dollar_street::{AppConfig, AppState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

use crate::{dom, popup, render};

pub type Listener = Closure<dyn FnMut(Event)>;

/// Registers `handler` for `event` on `target`; the listener lives as long
/// as the returned closure.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<Listener, JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let callback = closure.as_ref().unchecked_ref::<js_sys::Function>();
    target.add_event_listener_with_callback(event, callback)?;
    Ok(closure)
}

#[derive(Debug, Clone, Copy)]
pub enum Step {
    Next,
    Previous,
    Home,
}

/// Shared handle passed into every event handler.
#[derive(Clone)]
pub struct Page {
    pub state: Rc<RefCell<AppState>>,
    pub config: Rc<AppConfig>,
    scene_listeners: Rc<RefCell<Vec<Listener>>>,
    grid_listeners: Rc<RefCell<Vec<Listener>>>,
}

impl Page {
    pub fn new(state: AppState, config: AppConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            config: Rc::new(config),
            scene_listeners: Rc::new(RefCell::new(Vec::new())),
            grid_listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Draws the first scene and wires the permanent controls.
    pub fn mount(&self) -> Result<(), JsValue> {
        self.refresh()?;

        for (id, step) in [
            (NEXT_BUTTON, Step::Next),
            (PREV_BUTTON, Step::Previous),
            (HOME_BUTTON, Step::Home),
        ] {
            let page = self.clone();
            listen(&dom::element_by_id(id)?.into(), "click", move |_| page.navigate(step))?.forget();
        }

        let page = self.clone();
        listen(&dom::element_by_id(popup::CLOSE_ID)?.into(), "click", move |_| {
            if let Err(error) = popup::hide_popup(&page) {
                log::error!("failed to close popup: {error:?}");
            }
        })?
        .forget();

        Ok(())
    }

    fn navigate(&self, step: Step) {
        let changed = {
            let mut state = self.state.borrow_mut();
            match step {
                Step::Next => state.next(),
                Step::Previous => state.previous(),
                Step::Home => state.home(),
            }
        };
        if changed {
            if let Err(error) = self.refresh() {
                log::error!("failed to render scene: {error:?}");
            }
        }
    }

    fn refresh(&self) -> Result<(), JsValue> {
        render::render_scene(self)?;
        render::update_navigation(self)
    }

    /// Listeners for elements that live until the next scene change.
    pub fn keep_scene_listener(&self, listener: Listener) {
        self.scene_listeners.borrow_mut().push(listener);
    }

    /// Listeners for elements that live until the grid is redrawn.
    pub fn keep_grid_listener(&self, listener: Listener) {
        self.grid_listeners.borrow_mut().push(listener);
    }

    pub fn drop_scene_listeners(&self) {
        self.scene_listeners.borrow_mut().clear();
        self.drop_grid_listeners();
    }

    pub fn drop_grid_listeners(&self) {
        self.grid_listeners.borrow_mut().clear();
    }
}
