use serde::{Deserialize, Deserializer};

use crate::domain::{Income, RecordKind};
use crate::error::{Result, StreetError};

/// Rank given to records whose income is not one of the three tiers.
pub const UNRANKED_INCOME: u8 = 4;

/// One photographed household entry, as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(rename = "type")]
    pub kind: String,
    pub income: String,
    pub country: String,
    #[serde(default)]
    pub continent: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub monthly_income: String,
    pub image: String,
    #[serde(default)]
    pub photo_by: String,
}

impl Record {
    pub fn record_kind(&self) -> Option<RecordKind> {
        RecordKind::parse(&self.kind)
    }

    pub fn income_tier(&self) -> Option<Income> {
        Income::parse(&self.income)
    }

    pub fn income_rank(&self) -> u8 {
        self.income_tier().map_or(UNRANKED_INCOME, Income::rank)
    }

    /// The dataset continent, or the built-in lookup when the field is blank.
    pub fn continent(&self) -> &str {
        if self.continent.trim().is_empty() {
            continent_for(&self.country)
        } else {
            &self.continent
        }
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.country, self.continent())
    }

    pub fn monthly_income_label(&self) -> String {
        format!("${}/month", self.monthly_income)
    }
}

pub fn continent_for(country: &str) -> &'static str {
    match country {
        "United States" | "Brazil" | "Colombia" => "The Americas",
        "France" | "Spain" | "Czech Republic" => "Europe",
        "India" | "South Korea" => "Asia",
        "Kenya" | "Burkina Faso" | "Burundi" => "Africa",
        _ => "Unknown",
    }
}

fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Integer(value) => value.to_string(),
        TextOrNumber::Float(value) => value.to_string(),
    })
}

/// The full record list, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn from_json_str(payload: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(payload).map_err(StreetError::Dataset)?;
        log::debug!("decoded {} dataset records", dataset.len());
        Ok(dataset)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
