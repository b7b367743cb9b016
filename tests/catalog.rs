use std::collections::HashSet;

use esaf_financial_model::{
    params::CapexSchedule,
    scenario::{StepSet, StepToken, CATALOG},
};

#[test]
fn catalog_has_all_business_combinations() {
    assert_eq!(CATALOG.len(), 32);
    let labels: HashSet<&str> = CATALOG.iter().map(|d| d.label).collect();
    assert_eq!(labels.len(), CATALOG.len(), "duplicate labels");
    for def in CATALOG {
        assert!(!def.description.is_empty(), "{}", def.label);
        assert!(
            !StepSet::parse(def.label).is_empty(),
            "label {} parses to nothing",
            def.label
        );
    }
}

#[test]
fn token_labels_round_trip() {
    let tokens = [
        StepToken::Electricity,
        StepToken::Water,
        StepToken::Electrolysis,
        StepToken::Co2Capture,
        StepToken::Conversion,
        StepToken::HydrogenHandling,
    ];
    for token in tokens {
        assert_eq!(StepToken::from_label(token.label()), Some(token));
    }
    assert_eq!(StepToken::from_label("e"), None);
    assert_eq!(StepToken::from_label("ESAF"), None);
}

#[test]
fn annualized_capex_per_scenario() {
    let capex = CapexSchedule::default();
    let charge = |label: &str| {
        CATALOG
            .iter()
            .find(|d| d.label == label)
            .unwrap_or_else(|| panic!("missing scenario {label}"))
            .annualized_capex(&capex)
    };
    // 상각비: 수전해(전해조+저장)=150k, CO2 포집=80k, eSAF 설비=200k
    assert_eq!(charge("E"), 0.0);
    assert_eq!(charge("EP"), 150_000.0);
    assert_eq!(charge("CO2"), 80_000.0);
    assert_eq!(charge("C"), 200_000.0);
    assert_eq!(charge("EP + CO2"), 230_000.0);
    assert_eq!(charge("EP + CO2 + C"), 430_000.0);
    assert_eq!(charge("H + CO2 + C"), 280_000.0);
    // 수기 카탈로그의 예외 항목: CO2 포집 상각비를 부담하지 않는다.
    assert_eq!(charge("E + W + EP + CO2"), 150_000.0);
}

#[test]
fn capital_steps_follow_token_membership_except_listed_exception() {
    for def in CATALOG {
        if def.label == "E + W + EP + CO2" {
            continue;
        }
        let steps = StepSet::parse(def.label);
        for token in [
            StepToken::Electrolysis,
            StepToken::Co2Capture,
            StepToken::Conversion,
        ] {
            assert_eq!(
                steps.contains(token),
                def.capital_steps.contains(&token),
                "{}: token {:?}",
                def.label,
                token
            );
        }
    }
}
