//! 평가 결과를 표/차트/CSV로 렌더링하는 표현 계층. 계산 로직은 없다.

use crate::evaluator::ScenarioResult;

/// 회수기간을 표시용 문자열로 만든다. 무한대는 "inf"로 적는다.
pub fn format_payback(days: f64) -> String {
    if days.is_finite() {
        format!("{days:.1}")
    } else {
        "inf".to_string()
    }
}

/// 시나리오별 비용/매출/이익 표를 정렬된 텍스트로 만든다.
pub fn result_table(results: &[ScenarioResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<22} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14} {:>12} {:>12}\n",
        "Scenario",
        "Elec [€]",
        "H2 [€]",
        "CO2 [€]",
        "Water [€]",
        "CAPEX [€]",
        "Total [€]",
        "Revenue [€]",
        "Profit [€]",
    ));
    for r in results {
        out.push_str(&format!(
            "{:<22} {:>12.1} {:>12.1} {:>12.1} {:>12.1} {:>12.1} {:>14.1} {:>12.1} {:>12.1}\n",
            r.label,
            r.electricity_cost,
            r.hydrogen_cost,
            r.co2_cost,
            r.water_cost,
            r.annualized_capex,
            r.total_cost,
            r.revenue,
            r.profit,
        ));
    }
    out
}

/// 시나리오별 이익을 수평 막대로 그린다. 최대 절대값 기준으로 스케일한다.
pub fn profit_chart(results: &[ScenarioResult]) -> String {
    const WIDTH: usize = 50;
    let max_abs = results
        .iter()
        .map(|r| r.profit.abs())
        .fold(0.0_f64, f64::max);
    let mut out = String::new();
    for r in results {
        let len = if max_abs > 0.0 {
            ((r.profit.abs() / max_abs) * WIDTH as f64).round() as usize
        } else {
            0
        };
        let sign = if r.profit < 0.0 { '-' } else { '#' };
        let bar: String = std::iter::repeat(sign).take(len).collect();
        out.push_str(&format!("{:<22} {:>12.1} |{bar}\n", r.label, r.profit));
    }
    out
}

/// 시나리오별 회수기간 표.
pub fn payback_table(results: &[ScenarioResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<22} {:>16}\n", "Scenario", "Payback [days]"));
    for r in results {
        out.push_str(&format!(
            "{:<22} {:>16}\n",
            r.label,
            format_payback(r.payback_period_days)
        ));
    }
    out
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// 전체 결과를 CSV 문자열로 만든다. GUI 내보내기와 공용.
pub fn to_csv(results: &[ScenarioResult]) -> String {
    let mut out = String::from(
        "scenario,description,electricity_cost,hydrogen_cost,co2_cost,water_cost,annualized_capex,total_cost,revenue,profit,payback_period_days\n",
    );
    for r in results {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{}\n",
            csv_field(&r.label),
            csv_field(&r.description),
            r.electricity_cost,
            r.hydrogen_cost,
            r.co2_cost,
            r.water_cost,
            r.annualized_capex,
            r.total_cost,
            r.revenue,
            r.profit,
            if r.payback_period_days.is_finite() {
                r.payback_period_days.to_string()
            } else {
                "inf".to_string()
            },
        ));
    }
    out
}
