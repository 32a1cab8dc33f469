//! End-to-end checks of the page controller over a small in-memory dataset

use volcano_core::{
    render_page, AnalysisMode, AnalysisView, Dataset, FilterMode, FilterStep, IndividualStage,
    SelectionError, SelectionState, TypeExplanation, VolcanoRecord, VolcanoTable,
};

fn record(
    country: &str,
    region: &str,
    name: &str,
    volcano_type: &str,
    (latitude, longitude): (f64, f64),
    elevation: f64,
) -> VolcanoRecord {
    VolcanoRecord {
        country: country.to_string(),
        name: name.to_string(),
        volcano_type: volcano_type.to_string(),
        region: region.to_string(),
        latitude,
        longitude,
        elevation,
        last_eruption: "Unknown".to_string(),
    }
}

fn dataset() -> Dataset {
    let mut records = vec![
        record("Chile", "Chile-S", "Villarrica", "Stratovolcano", (-39.4, -71.9), 2847.0),
        record("Chile", "Chile-N", "Lascar", "Stratovolcano", (-23.4, -67.7), 5592.0),
        record("Chile", "Chile-N", "Cerro Azul", "Caldera", (-35.6, -70.8), 3788.0),
        record("Italy", "Italy", "Etna", "Stratovolcano", (37.7, 15.0), 3295.0),
        record("Italy", "Italy", "Vesuvius", "Somma", (40.8, 14.4), 1281.0),
        record("Japan", "Honshu", "Fuji", "Stratovolcano", (35.4, 138.7), 3776.0),
        record("United States", "Alaska", "Redoubt", "Stratovolcano", (60.5, -152.7), 3108.0),
        record("United States", "US-West", "Yellowstone", "Caldera", (44.4, -110.7), 2805.0),
        record("United States", "US-West", "Rainier", "Stratovolcano", (46.9, -121.8), 4392.0),
    ];
    // Enough Japanese volcanoes to exercise the top-10 cut
    for i in 0..12 {
        records.push(record(
            "Japan",
            "Kyushu",
            &format!("Kyushu {i:02}"),
            if i % 2 == 0 { "Stratovolcano" } else { "Shield" },
            (31.0 + i as f64 * 0.1, 130.0),
            500.0 + i as f64 * 100.0,
        ));
    }
    Dataset::new(VolcanoTable::from_records(records))
}

#[test]
fn test_intro_section_uses_defaults() {
    let dataset = dataset();
    let selection = SelectionState::new(dataset.index());
    let page = render_page(&dataset, &selection);

    assert_eq!(page.title, "An Intro to Volcanoes Around the World");
    assert_eq!(page.overview.request.topic, "volcano");
    assert_eq!(page.overview.request.sentences, 4);

    let description = page.volcano_description.expect("volcano description");
    assert_eq!(description.request.topic, "Yellowstone Volcano");
    assert_eq!(description.request.sentences, 3);

    assert_eq!(page.full_table.len(), dataset.table().len());
    assert_eq!(page.country_counts.len(), 4);

    // Centered on the United States, plotting everything
    let center = page.map.center.expect("map center");
    assert!((center.latitude - (60.5 + 44.4 + 46.9) / 3.0).abs() < 1e-9);
    assert!((center.longitude - (-152.7 - 110.7 - 121.8) / 3.0).abs() < 1e-9);
    assert_eq!(page.map.points.len(), dataset.table().len());
}

#[test]
fn test_region_flow_shows_results_for_first_country() {
    let dataset = dataset();
    let mut selection = SelectionState::new(dataset.index());
    selection.set_region("Chile-N");
    let page = render_page(&dataset, &selection);

    let AnalysisView::Individual(view) = page.analysis else {
        panic!("expected individual analysis");
    };
    assert_eq!(view.stage, IndividualStage::ShowResults);
    match &view.filter {
        FilterStep::ByRegion { region, countries, .. } => {
            assert_eq!(region.as_deref(), Some("Chile-N"));
            assert_eq!(countries, &vec!["Chile".to_string()]);
        }
        other => panic!("unexpected filter step: {other:?}"),
    }

    let results = view.results.expect("results");
    assert_eq!(results.country, "Chile");
    // Every Chilean volcano, tallest first
    let names: Vec<&str> = results.bar.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(names, vec!["Lascar", "Cerro Azul", "Villarrica"]);
    assert_eq!(results.pie.slices.len(), 2);
    assert_eq!(results.type_options, vec!["Caldera", "Stratovolcano"]);
    assert_eq!(results.volcano_type.as_deref(), Some("Caldera"));
    assert_eq!(
        results.type_description.map(|p| p.request.topic).as_deref(),
        Some("Caldera volcano")
    );
}

#[test]
fn test_stale_country_falls_back_to_region_default() {
    let dataset = dataset();
    let mut selection = SelectionState::new(dataset.index());
    selection.set_region("Honshu");
    selection.analysis_country = Some("Chile".to_string());
    let page = render_page(&dataset, &selection);

    let AnalysisView::Individual(view) = page.analysis else {
        panic!("expected individual analysis");
    };
    assert_eq!(view.country.as_deref(), Some("Japan"));
}

#[test]
fn test_tallest_ten_of_country() {
    let dataset = dataset();
    let mut selection = SelectionState::new(dataset.index());
    selection.set_filter_mode(FilterMode::Country);
    selection.set_analysis_country("Japan");
    let page = render_page(&dataset, &selection);

    let AnalysisView::Individual(view) = page.analysis else {
        panic!("expected individual analysis");
    };
    assert_eq!(view.stage, IndividualStage::ShowResults);
    let results = view.results.expect("results");

    assert_eq!(results.tallest.len(), 10);
    assert_eq!(results.bar.bars.len(), 10);
    let heights: Vec<f64> = results.bar.bars.iter().map(|b| b.value).collect();
    assert!(heights.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(heights[0], 3776.0);
    assert!(results.tallest.rows.iter().all(|row| row[0] == "Japan"));

    // Pie covers the whole country, not just the top ten
    assert_eq!(results.pie.total, 13);
    let percent: f64 = results.pie.slices.iter().map(|s| s.fraction * 100.0).sum();
    assert!((percent - 100.0).abs() < 1e-9);

    let center = results.map.center.expect("center");
    let japan = dataset.table().filter_country("Japan");
    let mean_lat = japan.iter().map(|r| r.latitude).sum::<f64>() / japan.len() as f64;
    assert!((center.latitude - mean_lat).abs() < 1e-9);
    assert_eq!(results.map.points.len(), dataset.table().len());
}

#[test]
fn test_type_explanation_opt_out() {
    let dataset = dataset();
    let mut selection = SelectionState::new(dataset.index());
    selection.set_explain_types(TypeExplanation::No);
    let page = render_page(&dataset, &selection);

    let AnalysisView::Individual(view) = page.analysis else {
        panic!("expected individual analysis");
    };
    let results = view.results.expect("results");
    assert_eq!(results.volcano_type, None);
    assert_eq!(results.type_description, None);
}

#[test]
fn test_comparative_with_three_countries() {
    let dataset = dataset();
    let mut selection = SelectionState::new(dataset.index());
    selection.set_mode(AnalysisMode::Comparative);
    selection.set_comparison(vec!["Japan".into(), "Chile".into(), "Italy".into()]);
    let page = render_page(&dataset, &selection);

    let AnalysisView::Comparative(view) = page.analysis else {
        panic!("expected comparative analysis");
    };
    let tables = view.outcome.expect("tables");
    assert_eq!(tables.counts.len(), 3);
    assert_eq!(tables.elevation.len(), 3);
    assert_eq!(tables.counts.rows[0], vec!["Chile", "3"]);
    assert_eq!(tables.elevation.rows[1], vec!["Italy", "1281", "3295", "2288"]);
}

#[test]
fn test_comparative_needs_exactly_three() {
    let dataset = dataset();
    let mut selection = SelectionState::new(dataset.index());
    selection.set_mode(AnalysisMode::Comparative);

    for picked in [
        vec!["Japan", "Chile"],
        vec!["Japan", "Chile", "Italy", "United States"],
    ] {
        selection.set_comparison(picked.iter().map(|c| c.to_string()).collect());
        let page = render_page(&dataset, &selection);
        let AnalysisView::Comparative(view) = page.analysis else {
            panic!("expected comparative analysis");
        };
        let err = view.outcome.expect_err("should warn");
        assert_eq!(
            err,
            SelectionError::WrongCountryCount {
                expected: 3,
                actual: picked.len()
            }
        );
        assert_eq!(err.to_string(), "Please select 3 countries.");
    }
}

#[test]
fn test_unknown_sidebar_country_falls_back() {
    let dataset = dataset();
    let mut selection = SelectionState::new(dataset.index());
    selection.set_country("Atlantis");
    let page = render_page(&dataset, &selection);
    assert_eq!(page.sidebar.country.as_deref(), Some("Chile"));
    assert!(page.map.center.is_some());
}
