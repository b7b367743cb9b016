use crate::params::{CapexSchedule, ParameterSet};
use crate::scenario::{ScenarioDefinition, StepSet, StepToken, CATALOG};

/// 단일 시나리오 평가 결과.
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub label: String,
    pub description: String,
    /// 전력 비용 [€]
    pub electricity_cost: f64,
    /// 수소 비용 [€]
    pub hydrogen_cost: f64,
    /// CO2 비용 [€]
    pub co2_cost: f64,
    /// 용수 비용 [€]
    pub water_cost: f64,
    /// 연간 상각비 [€]
    pub annualized_capex: f64,
    /// 총 생산 비용 [€]
    pub total_cost: f64,
    /// 매출 [€]
    pub revenue: f64,
    /// 이익 = 매출 − 총 비용 [€]
    pub profit: f64,
    /// 투자 회수기간 [일]. 이익이 0 이하이면 무한대.
    pub payback_period_days: f64,
}

/// 비용/매출 누산기. 규칙은 고정된 순서로 적용되며 뒤의 규칙이 앞에서
/// 채운 버킷을 덮어쓸 수 있다. 순서를 바꾸면 합계가 달라진다.
#[derive(Debug, Clone, Default)]
pub struct CostRevenue {
    pub electricity_cost: f64,
    pub hydrogen_cost: f64,
    pub co2_cost: f64,
    pub water_cost: f64,
    pub revenue: f64,
}

/// 토큰 집합에 따라 비용/매출 규칙을 순서대로 적용한다.
///
/// 입력 검증은 하지 않는다. 음수 입력은 음수이지만 산술적으로 일관된
/// 결과를 낳는다. 인식되는 토큰이 하나도 없으면 전부 0으로 남는다.
pub fn evaluate(steps: &StepSet, params: &ParameterSet) -> CostRevenue {
    use StepToken::*;
    let mut acc = CostRevenue::default();

    // 수전해로 수소를 직접 생산: 구매 수소 비용은 0이 된다.
    if steps.contains(Electrolysis) {
        acc.electricity_cost += params.electricity_cost(params.electrolysis_energy_mwh);
        acc.water_cost += params.water_cost();
        acc.hydrogen_cost = 0.0;
    }

    // 용수를 외부에 공급하거나, 수전해용으로 자체 소비한다.
    if steps.contains(Water) && !steps.contains(Electrolysis) {
        acc.revenue += params.water_cost();
        acc.water_cost = 0.0;
    } else if !steps.contains(Water) && steps.contains(Electrolysis) {
        acc.water_cost += params.water_cost();
    }

    // 전력을 외부에 판매: 생산 비용 없음.
    if steps.contains(Electricity) && !steps.contains(Electrolysis) {
        acc.revenue += params.electricity_cost(params.electrolysis_energy_mwh);
        acc.electricity_cost = 0.0;
    }

    // 전력은 쓰지만 전환까지는 가지 않는 구성.
    if steps.contains(Electricity) && !steps.contains(Conversion) {
        acc.revenue += params.electricity_cost(params.electrolysis_energy_mwh);
        acc.electricity_cost += params.electricity_cost(params.fractionation_energy_mwh);
    }

    // 생산한 수소를 전환하지 않고 판매.
    if steps.contains(Electrolysis) && !steps.contains(Conversion) {
        acc.revenue += params.hydrogen_cost();
    }

    // CO2를 인수해 되판다.
    if steps.contains(Co2Capture) && !steps.contains(Conversion) {
        acc.revenue += params.co2_cost();
        acc.co2_cost = 0.0;
    }

    // eSAF 전환: 분별 전력과 CO2가 들고, 수소를 자체 생산하지 않으면 구매한다.
    if steps.contains(Conversion) {
        acc.electricity_cost += params.electricity_cost(params.fractionation_energy_mwh);
        acc.co2_cost += params.co2_cost();
        acc.revenue += params.esaf_selling_price;
        if !steps.contains(Electrolysis) {
            acc.hydrogen_cost += params.hydrogen_cost();
        }
    }

    // 외부 수소 취급: 매출만 더하므로 앞 규칙들과 순서 간섭이 없다.
    if steps.contains(HydrogenHandling) && !steps.contains(Electrolysis) {
        acc.revenue += params.hydrogen_cost();
    }

    acc
}

/// 회수기간 [일] = 총 투자액 ÷ 일일 이익. 이익이 0 이하이면 무한대.
pub fn payback_period_days(
    annualized_capex: f64,
    useful_life_years: f64,
    profit: f64,
    profit_duration_days: f64,
) -> f64 {
    let daily_profit = profit / profit_duration_days;
    if daily_profit > 0.0 {
        annualized_capex * useful_life_years / daily_profit
    } else {
        f64::INFINITY
    }
}

/// 단일 시나리오를 평가해 결과 레코드를 만든다.
pub fn evaluate_scenario(
    def: &ScenarioDefinition,
    params: &ParameterSet,
    capex: &CapexSchedule,
) -> ScenarioResult {
    let steps = StepSet::parse(def.label);
    let acc = evaluate(&steps, params);
    let annualized_capex = def.annualized_capex(capex);
    let total_cost = acc.electricity_cost
        + acc.hydrogen_cost
        + acc.co2_cost
        + acc.water_cost
        + annualized_capex;
    let profit = acc.revenue - total_cost;
    let payback = payback_period_days(
        annualized_capex,
        capex.useful_life_years,
        profit,
        capex.profit_duration_days,
    );
    ScenarioResult {
        label: def.label.to_string(),
        description: def.description.to_string(),
        electricity_cost: acc.electricity_cost,
        hydrogen_cost: acc.hydrogen_cost,
        co2_cost: acc.co2_cost,
        water_cost: acc.water_cost,
        annualized_capex,
        total_cost,
        revenue: acc.revenue,
        profit,
        payback_period_days: payback,
    }
}

/// 카탈로그 전체를 순서대로 평가한다. 시나리오 간 의존성은 없다.
pub fn evaluate_catalog(params: &ParameterSet, capex: &CapexSchedule) -> Vec<ScenarioResult> {
    CATALOG
        .iter()
        .map(|def| evaluate_scenario(def, params, capex))
        .collect()
}
