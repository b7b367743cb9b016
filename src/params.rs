use serde::{Deserialize, Serialize};

/// 시장/기술 파라미터. 한 번 입력되면 계산 중 변경되지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSet {
    /// 전력 단가 [€/MWh]
    pub electricity_price_per_mwh: f64,
    /// 수전해에 필요한 에너지 [MWh]
    pub electrolysis_energy_mwh: f64,
    /// 수소 단가 [€/kg]
    pub hydrogen_price_per_kg: f64,
    /// 수소 생산량 [kg]
    pub hydrogen_quantity_kg: f64,
    /// 분별(fractionation) 공정에 필요한 에너지 [MWh]
    pub fractionation_energy_mwh: f64,
    /// CO2 단가 [€/ton]
    pub co2_price_per_ton: f64,
    /// CO2 소요량 [ton]
    pub co2_quantity_ton: f64,
    /// 공업용수 단가 [€/m³]
    pub water_price_per_m3: f64,
    /// 공업용수 소요량 [m³]
    pub water_quantity_m3: f64,
    /// eSAF 판매 단가 [€/m³]
    pub esaf_selling_price: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            electricity_price_per_mwh: 50.0,
            electrolysis_energy_mwh: 27.5,
            hydrogen_price_per_kg: 6.0,
            hydrogen_quantity_kg: 250.0,
            fractionation_energy_mwh: 12.5,
            co2_price_per_ton: 500.0,
            co2_quantity_ton: 1.8,
            water_price_per_m3: 0.0,
            water_quantity_m3: 7.0,
            esaf_selling_price: 2750.0,
        }
    }
}

impl ParameterSet {
    /// 전력 비용 = 단가 × 소요 에너지 [€]
    pub fn electricity_cost(&self, energy_mwh: f64) -> f64 {
        self.electricity_price_per_mwh * energy_mwh
    }

    /// 수소 구매 비용 [€]
    pub fn hydrogen_cost(&self) -> f64 {
        self.hydrogen_price_per_kg * self.hydrogen_quantity_kg
    }

    /// CO2 조달 비용 [€]
    pub fn co2_cost(&self) -> f64 {
        self.co2_price_per_ton * self.co2_quantity_ton
    }

    /// 용수 비용 [€]
    pub fn water_cost(&self) -> f64 {
        self.water_price_per_m3 * self.water_quantity_m3
    }
}

/// 설비별 CAPEX와 상각 조건.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapexSchedule {
    /// 수전해 설비 투자비 [€]
    pub capex_electrolyser: f64,
    /// 수소 저장 설비 투자비 [€]
    pub capex_hydrogen_storage: f64,
    /// CO2 포집 설비 투자비 [€]
    pub capex_co2_capture: f64,
    /// eSAF 생산(ATJ) 설비 투자비 [€]
    pub capex_esaf_plant: f64,
    /// 설비 내용연수 [년]
    pub useful_life_years: f64,
    /// 이익 집계 기간 [일]. 회수기간 계산 시 이익을 일 단위로 환산한다.
    pub profit_duration_days: f64,
}

impl Default for CapexSchedule {
    fn default() -> Self {
        Self {
            capex_electrolyser: 1_000_000.0,
            capex_hydrogen_storage: 500_000.0,
            capex_co2_capture: 800_000.0,
            capex_esaf_plant: 2_000_000.0,
            useful_life_years: 10.0,
            profit_duration_days: 1.0,
        }
    }
}

impl CapexSchedule {
    /// 수전해 단계의 연간 상각비(전해조 + 수소 저장) [€/년]
    pub fn annualized_electrolysis(&self) -> f64 {
        (self.capex_electrolyser + self.capex_hydrogen_storage) / self.useful_life_years
    }

    /// CO2 포집 설비의 연간 상각비 [€/년]
    pub fn annualized_co2_capture(&self) -> f64 {
        self.capex_co2_capture / self.useful_life_years
    }

    /// eSAF 생산 설비의 연간 상각비 [€/년]
    pub fn annualized_esaf_plant(&self) -> f64 {
        self.capex_esaf_plant / self.useful_life_years
    }
}
