use std::collections::BTreeSet;

use crate::domain::{Income, RecordKind};
use crate::record::Record;

/// Value carried by the "all" option of both filter controls.
pub const ALL_VALUE: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomeFilter {
    #[default]
    All,
    Only(Income),
}

impl IncomeFilter {
    /// Options in the order the income control lists them.
    pub const OPTIONS: [Self; 4] = [
        Self::All,
        Self::Only(Income::High),
        Self::Only(Income::Mid),
        Self::Only(Income::Low),
    ];

    /// Unrecognised values widen to `All`.
    pub fn from_value(value: &str) -> Self {
        Income::parse(value).map_or(Self::All, Self::Only)
    }

    pub const fn value(self) -> &'static str {
        match self {
            Self::All => ALL_VALUE,
            Self::Only(income) => income.as_str(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Income Levels",
            Self::Only(income) => income.label(),
        }
    }

    pub fn matches(self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Only(income) => record.income_tier() == Some(income),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CountryFilter {
    #[default]
    All,
    Only(String),
}

impl CountryFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_VALUE {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_VALUE,
            Self::Only(country) => country,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Only(country) => record.country == *country,
        }
    }
}

/// The two filter controls' current values for the active scene.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub income: IncomeFilter,
    pub country: CountryFilter,
}

impl FilterSelection {
    pub fn matches(&self, kind: RecordKind, record: &Record) -> bool {
        record.record_kind() == Some(kind)
            && self.income.matches(record)
            && self.country.matches(record)
    }
}

/// Dataset positions of the records a scene shows, ordered by income rank.
///
/// The sort is stable, so records of one tier keep their dataset order.
pub fn select_indices(
    records: &[Record],
    kind: RecordKind,
    selection: &FilterSelection,
) -> Vec<usize> {
    let mut indices = records
        .iter()
        .enumerate()
        .filter(|(_, record)| selection.matches(kind, record))
        .map(|(index, _)| index)
        .collect::<Vec<_>>();
    indices.sort_by_key(|&index| records[index].income_rank());
    indices
}

pub fn select_records<'a>(
    records: &'a [Record],
    kind: RecordKind,
    selection: &FilterSelection,
) -> Vec<&'a Record> {
    select_indices(records, kind, selection)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

/// Distinct countries among records of `kind`, alphabetically.
pub fn country_options(records: &[Record], kind: RecordKind) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.record_kind() == Some(kind))
        .map(|record| record.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IncomeCounts {
    pub low: usize,
    pub mid: usize,
    pub high: usize,
}

impl IncomeCounts {
    pub const fn get(&self, income: Income) -> usize {
        match income {
            Income::Low => self.low,
            Income::Mid => self.mid,
            Income::High => self.high,
        }
    }
}

/// Records per tier across the whole dataset, regardless of kind.
pub fn income_counts(records: &[Record]) -> IncomeCounts {
    records
        .iter()
        .fold(IncomeCounts::default(), |mut counts, record| {
            match record.income_tier() {
                Some(Income::Low) => counts.low += 1,
                Some(Income::Mid) => counts.mid += 1,
                Some(Income::High) => counts.high += 1,
                None => {}
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::{
        country_options, income_counts, select_indices, select_records, CountryFilter,
        FilterSelection, IncomeFilter,
    };
    use crate::domain::{Income, RecordKind};
    use crate::record::Record;

    fn record(kind: &str, income: &str, country: &str, image: &str) -> Record {
        Record {
            kind: kind.to_string(),
            income: income.to_string(),
            country: country.to_string(),
            continent: String::new(),
            monthly_income: "100".to_string(),
            image: image.to_string(),
            photo_by: String::new(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("toothbrush", "high", "France", "t-high"),
            record("toothbrush", "low", "Kenya", "t-low-1"),
            record("beds", "low", "India", "b-low"),
            record("toothbrush", "mid", "India", "t-mid"),
            record("toothbrush", "low", "Burundi", "t-low-2"),
            record("families", "mid", "Spain", "f-mid"),
        ]
    }

    fn images(records: &[&Record]) -> Vec<String> {
        records.iter().map(|record| record.image.clone()).collect()
    }

    #[test]
    fn default_selection_keeps_kind_and_sorts_by_rank() {
        let records = sample();
        let selection = FilterSelection::default();
        let selected = select_records(&records, RecordKind::Toothbrush, &selection);
        assert_eq!(images(&selected), ["t-low-1", "t-low-2", "t-mid", "t-high"]);
    }

    #[test]
    fn income_filter_keeps_relative_order() {
        let records = sample();
        let selection = FilterSelection {
            income: IncomeFilter::Only(Income::Low),
            country: CountryFilter::All,
        };
        assert_eq!(select_indices(&records, RecordKind::Toothbrush, &selection), [1, 4]);
    }

    #[test]
    fn country_filter_combines_with_income() {
        let records = sample();
        let selection = FilterSelection {
            income: IncomeFilter::from_value("mid"),
            country: CountryFilter::from_value("India"),
        };
        let selected = select_records(&records, RecordKind::Toothbrush, &selection);
        assert_eq!(images(&selected), ["t-mid"]);

        let selection = FilterSelection {
            income: IncomeFilter::Only(Income::High),
            country: CountryFilter::from_value("India"),
        };
        assert!(select_records(&records, RecordKind::Toothbrush, &selection).is_empty());
    }

    #[test]
    fn unknown_filter_values_widen_to_all() {
        assert_eq!(IncomeFilter::from_value("all"), IncomeFilter::All);
        assert_eq!(IncomeFilter::from_value("upper"), IncomeFilter::All);
        assert_eq!(CountryFilter::from_value("all"), CountryFilter::All);
        assert_eq!(CountryFilter::from_value("Kenya").value(), "Kenya");
    }

    #[test]
    fn income_options_list_all_then_high_to_low() {
        let values = IncomeFilter::OPTIONS.map(IncomeFilter::value);
        assert_eq!(values, ["all", "high", "mid", "low"]);
        assert_eq!(IncomeFilter::All.label(), "All Income Levels");
    }

    #[test]
    fn country_options_are_distinct_and_sorted() {
        let records = sample();
        assert_eq!(
            country_options(&records, RecordKind::Toothbrush),
            ["Burundi", "France", "India", "Kenya"]
        );
        assert_eq!(country_options(&records, RecordKind::Families), ["Spain"]);
    }

    #[test]
    fn kind_and_income_match_exact_spelling() {
        let records = vec![
            record("toothbrush", "low", "Kenya", "exact"),
            record("Toothbrush", "low", "Peru", "capitalised-kind"),
            record("toothbrush", " LOW ", "Chad", "padded-income"),
        ];
        let selection = FilterSelection {
            income: IncomeFilter::Only(Income::Low),
            country: CountryFilter::All,
        };
        let selected = select_records(&records, RecordKind::Toothbrush, &selection);
        assert_eq!(images(&selected), ["exact"]);

        let all = select_records(&records, RecordKind::Toothbrush, &FilterSelection::default());
        assert_eq!(images(&all), ["exact", "padded-income"]);
        assert_eq!(country_options(&records, RecordKind::Toothbrush), ["Chad", "Kenya"]);
        assert_eq!(income_counts(&records).low, 2);
    }

    #[test]
    fn counts_span_every_kind() {
        let mut records = sample();
        records.push(record("beds", "unknown", "Spain", "b-odd"));
        let counts = income_counts(&records);
        assert_eq!((counts.low, counts.mid, counts.high), (3, 2, 1));
        assert_eq!(counts.get(Income::Mid), 2);
    }
}
