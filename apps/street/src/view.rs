//! Owned view models the renderer turns into markup.

use crate::domain::{Income, RecordKind};
use crate::filter::{country_options, income_counts, CountryFilter, IncomeFilter};
use crate::record::Record;
use crate::scene::{NavState, SceneConfig};

pub const OVERVIEW_TITLE: &str = "Dollar Street: How Income Affects Daily Life";
pub const OVERVIEW_INTRO: &str = "Explore how people's daily lives differ across income levels around the world. From dental hygiene and sleeping arrangements to family living conditions, discover how monthly income shapes everything from basic necessities to lifestyle choices across different cultures and regions.";
pub const OVERVIEW_CALL_TO_ACTION: &str =
    "Click 'Next' to explore toothbrushes across income levels";
pub const GRID_HINT: &str = "Place mouse or Click on images for details";
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load data. Please refresh the page.";

const fn average_income(income: Income) -> &'static str {
    match income {
        Income::Low => "~$29/month",
        Income::Mid => "$500~$1,000/month",
        Income::High => "~$3,000/month",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub income: Income,
    pub label: &'static str,
    pub average: &'static str,
    pub count: usize,
}

impl SummaryCard {
    pub fn count_label(&self) -> String {
        format!("{} examples", self.count)
    }

    pub fn class_name(&self) -> String {
        format!("income-card {}", self.income.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewView {
    pub title: &'static str,
    pub intro: &'static str,
    pub cards: Vec<SummaryCard>,
    pub call_to_action: &'static str,
}

pub fn overview(records: &[Record]) -> OverviewView {
    let counts = income_counts(records);
    let cards = Income::ALL
        .iter()
        .map(|&income| SummaryCard {
            income,
            label: income.label(),
            average: average_income(income),
            count: counts.get(income),
        })
        .collect();

    OverviewView {
        title: OVERVIEW_TITLE,
        intro: OVERVIEW_INTRO,
        cards,
        call_to_action: OVERVIEW_CALL_TO_ACTION,
    }
}

/// What the page shows when the dataset cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailureView {
    pub message: &'static str,
    pub nav: NavState,
}

impl LoadFailureView {
    pub fn markup(&self) -> String {
        format!("<p class=\"load-error\">{}</p>", self.message)
    }
}

pub const fn load_failure() -> LoadFailureView {
    LoadFailureView {
        message: LOAD_ERROR_MESSAGE,
        nav: NavState::locked(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControls {
    pub income: Vec<FilterOption>,
    pub country: Vec<FilterOption>,
}

pub fn filter_controls(records: &[Record], kind: RecordKind) -> FilterControls {
    let income = IncomeFilter::OPTIONS
        .iter()
        .map(|option| FilterOption {
            value: option.value().to_string(),
            label: option.label().to_string(),
        })
        .collect();

    let country = std::iter::once(FilterOption {
        value: CountryFilter::All.value().to_string(),
        label: "All Countries".to_string(),
    })
    .chain(
        country_options(records, kind)
            .into_iter()
            .map(|country| FilterOption {
                value: country.clone(),
                label: country,
            }),
    )
    .collect();

    FilterControls { income, country }
}

/// One tile of an image grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCard {
    /// Position of the record in the dataset.
    pub index: usize,
    pub image: String,
    pub alt: String,
    pub country: String,
    pub badge: String,
    pub badge_class: String,
    pub monthly_income: String,
    pub annotation: &'static str,
    pub tooltip_location: String,
    pub tooltip_photo: String,
}

impl ImageCard {
    pub fn new(config: &SceneConfig, index: usize, record: &Record) -> Self {
        Self {
            index,
            image: record.image.clone(),
            alt: format!("{} from {}", config.subject, record.country),
            country: record.country.clone(),
            badge: format!("{} INCOME", record.income.to_uppercase()),
            badge_class: format!("income-label {}-income", record.income),
            monthly_income: record.monthly_income_label(),
            annotation: config.annotations.lookup(record.income_tier()),
            tooltip_location: record.location(),
            tooltip_photo: record.photo_by.clone(),
        }
    }
}

/// Content of the detail popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupDetail {
    pub image: String,
    pub location: String,
    pub income: String,
    pub description: String,
    /// Display name used to look the country up on the map.
    pub country: String,
}

impl PopupDetail {
    pub fn from_record(record: &Record) -> Self {
        Self {
            image: record.image.clone(),
            location: record.location(),
            income: format!("Income: {}", record.monthly_income_label()),
            description: format!("Photo by: {}", record.photo_by),
            country: record.country.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_controls, load_failure, overview, ImageCard, PopupDetail};
    use crate::domain::{Income, RecordKind};
    use crate::record::Record;
    use crate::scene::IMAGE_SCENES;

    fn record(kind: &str, income: &str, country: &str) -> Record {
        Record {
            kind: kind.to_string(),
            income: income.to_string(),
            country: country.to_string(),
            continent: "Africa".to_string(),
            monthly_income: "41".to_string(),
            image: format!("img/{country}.jpg"),
            photo_by: "Luc Forsyth".to_string(),
        }
    }

    #[test]
    fn load_failure_shows_message_and_locks_navigation() {
        let failure = load_failure();
        assert_eq!(
            failure.markup(),
            "<p class=\"load-error\">Unable to load data. Please refresh the page.</p>"
        );
        assert!(failure.nav.buttons().iter().all(|&(_, disabled)| disabled));
        assert_eq!(failure.nav.progress, None);
    }

    #[test]
    fn overview_cards_count_each_tier() {
        let records = vec![
            record("toothbrush", "low", "Kenya"),
            record("beds", "low", "Burundi"),
            record("families", "high", "Kenya"),
        ];
        let view = overview(&records);
        let summary = view
            .cards
            .iter()
            .map(|card| (card.income, card.count_label()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            [
                (Income::Low, "2 examples".to_string()),
                (Income::Mid, "0 examples".to_string()),
                (Income::High, "1 examples".to_string()),
            ]
        );
        assert_eq!(view.cards[1].average, "$500~$1,000/month");
        assert_eq!(view.cards[2].class_name(), "income-card high");
    }

    #[test]
    fn country_control_starts_with_all() {
        let records = vec![
            record("beds", "low", "Kenya"),
            record("beds", "mid", "Burundi"),
            record("toothbrush", "mid", "Spain"),
        ];
        let controls = filter_controls(&records, RecordKind::Beds);
        let countries = controls
            .country
            .iter()
            .map(|option| option.value.as_str())
            .collect::<Vec<_>>();
        assert_eq!(countries, ["all", "Burundi", "Kenya"]);
        assert_eq!(controls.country[0].label, "All Countries");
        assert_eq!(controls.income.len(), 4);
        assert_eq!(controls.income[1].label, "High Income");
    }

    #[test]
    fn image_card_uses_scene_copy() {
        let record = record("beds", "mid", "Kenya");
        let card = ImageCard::new(&IMAGE_SCENES[1], 7, &record);
        assert_eq!(card.index, 7);
        assert_eq!(card.alt, "bedroom from Kenya");
        assert_eq!(card.badge, "MID INCOME");
        assert_eq!(card.badge_class, "income-label mid-income");
        assert_eq!(card.monthly_income, "$41/month");
        assert!(card.annotation.starts_with("Basic beds"));
        assert_eq!(card.tooltip_location, "Kenya, Africa");
    }

    #[test]
    fn popup_reflects_record_verbatim() {
        let record = record("families", "high", "Burundi");
        let detail = PopupDetail::from_record(&record);
        assert_eq!(detail.image, "img/Burundi.jpg");
        assert_eq!(detail.location, "Burundi, Africa");
        assert_eq!(detail.income, "Income: $41/month");
        assert_eq!(detail.description, "Photo by: Luc Forsyth");
        assert_eq!(detail.country, "Burundi");
    }
}
