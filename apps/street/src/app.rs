use crate::filter::{select_indices, CountryFilter, FilterSelection, IncomeFilter};
use crate::record::{Dataset, Record};
use crate::scene::{NavState, Scene, SceneController};
use crate::view::{filter_controls, overview, FilterControls, ImageCard, OverviewView, PopupDetail};

/// Everything the page renders from: dataset, scene, filters and popup.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    dataset: Dataset,
    controller: SceneController,
    filters: FilterSelection,
    visible: Vec<usize>,
    popup: Option<PopupDetail>,
    popup_serial: u64,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let mut state = Self {
            dataset,
            ..Self::default()
        };
        state.enter_scene();
        state
    }

    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub const fn scene(&self) -> Scene {
        self.controller.scene()
    }

    pub fn nav_state(&self) -> NavState {
        self.controller.nav_state()
    }

    pub const fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn next(&mut self) -> bool {
        let changed = self.controller.next();
        if changed {
            self.enter_scene();
        }
        changed
    }

    pub fn previous(&mut self) -> bool {
        let changed = self.controller.previous();
        if changed {
            self.enter_scene();
        }
        changed
    }

    pub fn home(&mut self) -> bool {
        let changed = self.controller.home();
        if changed {
            self.enter_scene();
        }
        changed
    }

    /// Filter controls are rebuilt on entry, so their values start at "all".
    fn enter_scene(&mut self) {
        self.filters = FilterSelection::default();
        self.refresh_visible();
    }

    pub fn set_income_filter(&mut self, value: &str) {
        self.filters.income = IncomeFilter::from_value(value);
        self.refresh_visible();
    }

    pub fn set_country_filter(&mut self, value: &str) {
        self.filters.country = CountryFilter::from_value(value);
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        self.visible = match self.scene().config() {
            Some(config) => select_indices(self.dataset.records(), config.kind, &self.filters),
            None => Vec::new(),
        };
        log::debug!(
            "{:?}: {} of {} records visible",
            self.scene(),
            self.visible.len(),
            self.dataset.len()
        );
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.visible
            .iter()
            .filter_map(|&index| self.dataset.get(index))
    }

    pub fn overview(&self) -> OverviewView {
        overview(self.dataset.records())
    }

    pub fn filter_controls(&self) -> Option<FilterControls> {
        self.scene()
            .config()
            .map(|config| filter_controls(self.dataset.records(), config.kind))
    }

    pub fn image_cards(&self) -> Vec<ImageCard> {
        let Some(config) = self.scene().config() else {
            return Vec::new();
        };
        self.visible
            .iter()
            .filter_map(|&index| {
                self.dataset
                    .get(index)
                    .map(|record| ImageCard::new(config, index, record))
            })
            .collect()
    }

    /// Opens the popup for the record at dataset position `index`.
    ///
    /// Every open bumps [`Self::popup_serial`], even for the same record.
    pub fn open_popup(&mut self, index: usize) -> Option<&PopupDetail> {
        let detail = PopupDetail::from_record(self.dataset.get(index)?);
        self.popup_serial += 1;
        Some(self.popup.insert(detail))
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
    }

    pub const fn popup_serial(&self) -> u64 {
        self.popup_serial
    }

    /// Whether the popup opened as `serial` is still the one on screen.
    pub const fn is_current_popup(&self, serial: u64) -> bool {
        self.popup.is_some() && self.popup_serial == serial
    }

    pub const fn popup(&self) -> Option<&PopupDetail> {
        self.popup.as_ref()
    }
}
