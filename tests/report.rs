use esaf_financial_model::{
    evaluator::evaluate_catalog,
    params::{CapexSchedule, ParameterSet},
    report,
    scenario::CATALOG,
};

#[test]
fn result_table_has_one_row_per_scenario() {
    let results = evaluate_catalog(&ParameterSet::default(), &CapexSchedule::default());
    let table = report::result_table(&results);
    assert_eq!(table.lines().count(), CATALOG.len() + 1);
    assert!(table.starts_with("Scenario"));
    assert!(table.contains("E + W + EP + CO2 + C"));
}

#[test]
fn payback_table_marks_loss_scenarios_as_infinite() {
    let results = evaluate_catalog(&ParameterSet::default(), &CapexSchedule::default());
    let table = report::payback_table(&results);
    // 기본값에서 전환 시나리오는 상각비 때문에 적자라 회수 불가로 표시된다.
    let c_row = table
        .lines()
        .find(|line| line.starts_with("C "))
        .expect("row for scenario C");
    assert!(c_row.contains("inf"), "row={c_row}");
}

#[test]
fn profit_chart_draws_one_bar_per_scenario() {
    let results = evaluate_catalog(&ParameterSet::default(), &CapexSchedule::default());
    let chart = report::profit_chart(&results);
    assert_eq!(chart.lines().count(), CATALOG.len());
    for line in chart.lines() {
        assert!(line.contains('|'), "line={line}");
    }
    // 적자 시나리오 막대는 '-'로 그려진다.
    assert!(chart.lines().any(|l| l.contains("|--")));
}

#[test]
fn format_payback_renders_infinity_as_inf() {
    assert_eq!(report::format_payback(f64::INFINITY), "inf");
    assert_eq!(report::format_payback(1234.56), "1234.6");
}

#[test]
fn csv_quotes_descriptions_with_commas() {
    let results = evaluate_catalog(&ParameterSet::default(), &CapexSchedule::default());
    let csv = report::to_csv(&results);
    assert_eq!(csv.lines().count(), CATALOG.len() + 1);
    let header = csv.lines().next().expect("header");
    assert_eq!(header.split(',').count(), 11);
    let multi = csv
        .lines()
        .find(|l| l.starts_with("E + W + EP,"))
        .expect("row for E + W + EP");
    assert!(
        multi.contains("\"Supplying electricity, water, and producing hydrogen\""),
        "row={multi}"
    );
    // 적자 시나리오의 회수기간은 inf로 기록된다.
    assert!(csv.lines().any(|l| l.ends_with(",inf")));
}
