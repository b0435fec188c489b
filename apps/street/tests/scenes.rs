use dollar_street::filter::{select_records, FilterSelection};
use dollar_street::view::PopupDetail;
use dollar_street::{AppState, Dataset, Income, RecordKind, Scene, StreetError};

const HOUSEHOLDS: &str = r#"[
    {"type": "toothbrush", "income": "high", "country": "South Korea", "continent": "Asia",
     "monthlyIncome": "2980", "image": "img/kr-toothbrush.jpg", "photoBy": "Luc Forsyth"},
    {"type": "toothbrush", "income": "low", "country": "Burundi", "continent": "Africa",
     "monthlyIncome": "27", "image": "img/bi-toothbrush.jpg", "photoBy": "Johan Eriksson"},
    {"type": "toothbrush", "income": "mid", "country": "Colombia", "continent": "The Americas",
     "monthlyIncome": "604", "image": "img/co-toothbrush.jpg", "photoBy": "Zoriah Miller"},
    {"type": "toothbrush", "income": "low", "country": "India", "continent": "Asia",
     "monthlyIncome": "31", "image": "img/in-toothbrush.jpg", "photoBy": "AJ Sharma"}
]"#;

fn state() -> Result<AppState, StreetError> {
    Ok(AppState::new(Dataset::from_json_str(HOUSEHOLDS)?))
}

#[test]
fn low_income_toothbrushes_keep_dataset_order() -> Result<(), StreetError> {
    let mut state = state()?;
    assert!(state.next());
    assert_eq!(state.scene(), Scene::Toothbrushes);

    state.set_income_filter("low");
    let countries = state
        .visible_records()
        .map(|record| record.country.as_str())
        .collect::<Vec<_>>();
    assert_eq!(countries, ["Burundi", "India"]);
    Ok(())
}

#[test]
fn mixed_case_records_stay_out_of_scenes_and_counts() -> Result<(), StreetError> {
    let dataset = Dataset::from_json_str(
        r#"[
        {"type": "toothbrush", "income": "low", "country": "Malawi",
         "monthlyIncome": "29", "image": "a.jpg"},
        {"type": "Toothbrush", "income": "low", "country": "Malawi",
         "monthlyIncome": "30", "image": "b.jpg"},
        {"type": "toothbrush", "income": " LOW ", "country": "Malawi",
         "monthlyIncome": "31", "image": "c.jpg"}
    ]"#,
    )?;
    let mut state = AppState::new(dataset);
    assert_eq!(state.overview().cards[0].count, 2);

    state.next();
    state.set_income_filter("low");
    let images = state
        .visible_records()
        .map(|record| record.image.as_str())
        .collect::<Vec<_>>();
    assert_eq!(images, ["a.jpg"]);
    Ok(())
}

#[test]
fn empty_scenes_render_no_cards() -> Result<(), StreetError> {
    let mut state = state()?;
    state.next();
    state.next();
    assert_eq!(state.scene(), Scene::Beds);
    assert!(state.image_cards().is_empty());

    let controls = state.filter_controls();
    assert_eq!(controls.map(|controls| controls.country.len()), Some(1));
    Ok(())
}

#[test]
fn visible_list_matches_filter_definition() -> Result<(), StreetError> {
    let mut state = state()?;
    state.next();

    for income in ["all", "low", "mid", "high"] {
        for country in ["all", "Burundi", "India", "South Korea", "Peru"] {
            state.set_income_filter(income);
            state.set_country_filter(country);

            let expected = state
                .dataset()
                .records()
                .iter()
                .filter(|record| record.kind == "toothbrush")
                .filter(|record| income == "all" || record.income == income)
                .filter(|record| country == "all" || record.country == country)
                .collect::<Vec<_>>();
            let mut expected_sorted = expected.clone();
            expected_sorted.sort_by_key(|record| record.income_rank());

            let visible = state.visible_records().collect::<Vec<_>>();
            assert_eq!(visible, expected_sorted, "income={income} country={country}");
            assert!(visible
                .windows(2)
                .all(|pair| pair[0].income_rank() <= pair[1].income_rank()));
        }
    }
    Ok(())
}

#[test]
fn overview_counts_match_tiers() -> Result<(), StreetError> {
    let state = state()?;
    let overview = state.overview();
    let counts = overview
        .cards
        .iter()
        .map(|card| (card.income, card.count))
        .collect::<Vec<_>>();
    assert_eq!(
        counts,
        [(Income::Low, 2), (Income::Mid, 1), (Income::High, 1)]
    );
    Ok(())
}

#[test]
fn clicking_a_card_opens_its_record() -> Result<(), StreetError> {
    let mut state = state()?;
    state.next();

    for card in state.image_cards() {
        let expected = state
            .dataset()
            .get(card.index)
            .map(PopupDetail::from_record);
        let opened = state.open_popup(card.index).cloned();
        assert_eq!(opened, expected);

        let Some(detail) = opened else {
            panic!("card {} has a record", card.index);
        };
        assert!(detail.location.starts_with(&card.country));
        assert!(detail.income.contains(&card.monthly_income));
    }
    Ok(())
}

#[test]
fn selection_helpers_agree_with_app_state() -> Result<(), StreetError> {
    let mut state = state()?;
    state.next();
    let direct = select_records(
        state.dataset().records(),
        RecordKind::Toothbrush,
        &FilterSelection::default(),
    );
    let through_state = state.visible_records().collect::<Vec<_>>();
    assert_eq!(direct, through_state);
    Ok(())
}
