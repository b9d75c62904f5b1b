use solar_model::{Country, DistributionPoint, DistributionProjection, RankingResult};

#[test]
fn country_filenames_match_export_names() {
    assert_eq!(Country::Benin.data_filename(), "benin_clean.csv");
    assert_eq!(Country::SierraLeone.data_filename(), "sierraleone_clean.csv");
    assert_eq!(Country::Togo.data_filename(), "togo_clean.csv");
}

#[test]
fn country_display_names() {
    assert_eq!(Country::Benin.to_string(), "Benin");
    assert_eq!(Country::SierraLeone.to_string(), "Sierra Leone");
    assert_eq!(Country::Togo.to_string(), "Togo");
}

#[test]
fn country_parse_rejects_unknown() {
    assert!("Atlantis".parse::<Country>().is_err());
    assert!("".parse::<Country>().is_err());
}

#[test]
fn no_data_markers_are_distinct() {
    assert_ne!(RankingResult::Unavailable, RankingResult::NoQualifyingRows);
}

#[test]
fn projection_round_trips_through_json() {
    let projection = DistributionProjection {
        metric: "GHI".to_string(),
        points: vec![
            DistributionPoint {
                entity: "Benin".to_string(),
                value: Some(120.5),
            },
            DistributionPoint {
                entity: "Benin".to_string(),
                value: None,
            },
        ],
    };
    let json = serde_json::to_string(&projection).expect("serialize projection");
    let round: DistributionProjection =
        serde_json::from_str(&json).expect("deserialize projection");
    assert_eq!(round, projection);
}
