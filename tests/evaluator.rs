use esaf_financial_model::{
    evaluator::{evaluate, evaluate_catalog, evaluate_scenario, payback_period_days},
    params::{CapexSchedule, ParameterSet},
    scenario::{StepSet, CATALOG},
};

const EPS: f64 = 1e-9;

fn params_with_water() -> ParameterSet {
    ParameterSet {
        water_price_per_m3: 2.0,
        ..ParameterSet::default()
    }
}

#[test]
fn electricity_only_sells_power_and_pays_fractionation() {
    let params = ParameterSet::default();
    let acc = evaluate(&StepSet::parse("E"), &params);
    // 판매 수익은 두 규칙에서 모두 발생하고, 분별 전력 비용이 남는다.
    assert!((acc.revenue - 2750.0).abs() < EPS, "revenue={}", acc.revenue);
    assert!(
        (acc.electricity_cost - 625.0).abs() < EPS,
        "electricity_cost={}",
        acc.electricity_cost
    );
    assert_eq!(acc.hydrogen_cost, 0.0);
    assert_eq!(acc.co2_cost, 0.0);
    assert_eq!(acc.water_cost, 0.0);
}

#[test]
fn conversion_with_purchased_hydrogen() {
    let params = ParameterSet::default();
    let acc = evaluate(&StepSet::parse("C"), &params);
    assert!((acc.hydrogen_cost - 1500.0).abs() < EPS);
    assert!((acc.co2_cost - 900.0).abs() < EPS);
    assert!((acc.electricity_cost - 625.0).abs() < EPS);
    assert!((acc.revenue - 2750.0).abs() < EPS);
}

#[test]
fn electrolysis_sells_hydrogen_when_not_converting() {
    let params = ParameterSet::default();
    let acc = evaluate(&StepSet::parse("EP"), &params);
    assert!((acc.electricity_cost - 1375.0).abs() < EPS);
    assert_eq!(acc.hydrogen_cost, 0.0);
    assert_eq!(acc.water_cost, 0.0); // 용수 단가 기본값 0
    assert!((acc.revenue - 1500.0).abs() < EPS);
}

#[test]
fn electrolysis_suppresses_hydrogen_purchase_in_conversion() {
    let params = ParameterSet::default();
    let acc = evaluate(&StepSet::parse("EP + C"), &params);
    assert_eq!(acc.hydrogen_cost, 0.0);
    // 수전해 전력 + 분별 전력이 합산된다.
    assert!((acc.electricity_cost - 2000.0).abs() < EPS);
    assert!((acc.co2_cost - 900.0).abs() < EPS);
    assert!((acc.revenue - 2750.0).abs() < EPS);
}

#[test]
fn token_matching_is_whole_token_only() {
    let params = ParameterSet::default();
    // "EP"는 "E" 규칙을 건드리지 않는다: 전력 판매 수익이 없어야 한다.
    let ep = evaluate(&StepSet::parse("EP"), &params);
    assert!((ep.revenue - 1500.0).abs() < EPS, "revenue={}", ep.revenue);
    // "CO2"는 "C" 규칙을 건드리지 않는다: eSAF 매출이 없어야 한다.
    let co2 = evaluate(&StepSet::parse("CO2"), &params);
    assert!((co2.revenue - 900.0).abs() < EPS, "revenue={}", co2.revenue);
    assert_eq!(co2.co2_cost, 0.0);
    assert_eq!(co2.electricity_cost, 0.0);
    assert_eq!(co2.hydrogen_cost, 0.0);
}

#[test]
fn unknown_tokens_fall_through_to_zero() {
    let params = ParameterSet::default();
    let steps = StepSet::parse("X + Q");
    assert!(steps.is_empty());
    let acc = evaluate(&steps, &params);
    assert_eq!(acc.revenue, 0.0);
    assert_eq!(
        acc.electricity_cost + acc.hydrogen_cost + acc.co2_cost + acc.water_cost,
        0.0
    );
}

#[test]
fn water_is_charged_twice_for_electrolysis_without_water_supply() {
    // 참조 모델의 동작 그대로: W 없는 EP 시나리오는 용수 비용이 두 번 잡힌다.
    let params = params_with_water();
    let ep = evaluate(&StepSet::parse("EP"), &params);
    assert!((ep.water_cost - 28.0).abs() < EPS, "water_cost={}", ep.water_cost);
    let w_ep = evaluate(&StepSet::parse("W + EP"), &params);
    assert!((w_ep.water_cost - 14.0).abs() < EPS, "water_cost={}", w_ep.water_cost);
}

#[test]
fn water_supply_without_electrolysis_earns_revenue() {
    let params = params_with_water();
    let acc = evaluate(&StepSet::parse("W"), &params);
    assert!((acc.revenue - 14.0).abs() < EPS);
    assert_eq!(acc.water_cost, 0.0);
}

#[test]
fn cost_and_profit_invariants_hold_for_every_scenario() {
    let capex = CapexSchedule::default();
    let param_sets = [
        ParameterSet::default(),
        params_with_water(),
        ParameterSet {
            electricity_price_per_mwh: 80.0,
            esaf_selling_price: 1900.0,
            co2_price_per_ton: -50.0, // 음수 입력도 산술적으로 일관돼야 한다
            ..ParameterSet::default()
        },
    ];
    for params in &param_sets {
        let results = evaluate_catalog(params, &capex);
        assert_eq!(results.len(), CATALOG.len());
        for r in &results {
            let itemized = r.electricity_cost
                + r.hydrogen_cost
                + r.co2_cost
                + r.water_cost
                + r.annualized_capex;
            assert!(
                (r.total_cost - itemized).abs() < EPS,
                "{}: total={} itemized={}",
                r.label,
                r.total_cost,
                itemized
            );
            assert!(
                (r.profit - (r.revenue - r.total_cost)).abs() < EPS,
                "{}: profit={} revenue={} total={}",
                r.label,
                r.profit,
                r.revenue,
                r.total_cost
            );
            if r.profit > 0.0 {
                let expected =
                    r.annualized_capex * capex.useful_life_years / r.profit;
                assert!(
                    (r.payback_period_days - expected).abs() < 1e-6,
                    "{}: payback={} expected={}",
                    r.label,
                    r.payback_period_days,
                    expected
                );
            } else {
                assert!(
                    r.payback_period_days.is_infinite(),
                    "{}: payback={} profit={}",
                    r.label,
                    r.payback_period_days,
                    r.profit
                );
            }
        }
    }
}

#[test]
fn payback_is_infinite_on_non_positive_profit() {
    assert!(payback_period_days(100_000.0, 10.0, 0.0, 1.0).is_infinite());
    assert!(payback_period_days(100_000.0, 10.0, -250.0, 1.0).is_infinite());
    let days = payback_period_days(100_000.0, 10.0, 500.0, 1.0);
    assert!((days - 2000.0).abs() < EPS, "days={days}");
    // 이익 집계 기간이 길어지면 일일 이익이 줄어 회수기간이 늘어난다.
    let days_weekly = payback_period_days(100_000.0, 10.0, 500.0, 7.0);
    assert!((days_weekly - 14_000.0).abs() < 1e-6, "days={days_weekly}");
}

#[test]
fn zero_profit_scenario_reports_infinite_payback() {
    // 용수 단가 0이면 "W" 시나리오는 비용도 매출도 없다.
    let params = ParameterSet::default();
    let capex = CapexSchedule::default();
    let def = CATALOG.iter().find(|d| d.label == "W").expect("W scenario");
    let r = evaluate_scenario(def, &params, &capex);
    assert_eq!(r.profit, 0.0);
    assert!(r.payback_period_days.is_infinite());
}

#[test]
fn conversion_scenario_loses_money_under_default_capex() {
    let params = ParameterSet::default();
    let capex = CapexSchedule::default();
    let def = CATALOG.iter().find(|d| d.label == "C").expect("C scenario");
    let r = evaluate_scenario(def, &params, &capex);
    assert!((r.annualized_capex - 200_000.0).abs() < EPS);
    assert!((r.total_cost - 203_025.0).abs() < EPS, "total={}", r.total_cost);
    assert!((r.profit + 200_275.0).abs() < EPS, "profit={}", r.profit);
    assert!(r.payback_period_days.is_infinite());
}
