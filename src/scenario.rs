use crate::params::CapexSchedule;

/// 시나리오 라벨을 구성하는 공급 단계 토큰.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepToken {
    /// E: 전력 공급
    Electricity,
    /// W: 용수 공급
    Water,
    /// EP: 수전해를 통한 수소 생산
    Electrolysis,
    /// CO2: CO2 인수
    Co2Capture,
    /// C: eSAF 전환
    Conversion,
    /// H: 외부 수소 취급/판매
    HydrogenHandling,
}

impl StepToken {
    /// 라벨 문자열에서 토큰을 복원한다. 모르는 토큰은 None.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "E" => Some(StepToken::Electricity),
            "W" => Some(StepToken::Water),
            "EP" => Some(StepToken::Electrolysis),
            "CO2" => Some(StepToken::Co2Capture),
            "C" => Some(StepToken::Conversion),
            "H" => Some(StepToken::HydrogenHandling),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepToken::Electricity => "E",
            StepToken::Water => "W",
            StepToken::Electrolysis => "EP",
            StepToken::Co2Capture => "CO2",
            StepToken::Conversion => "C",
            StepToken::HydrogenHandling => "H",
        }
    }
}

/// 시나리오 라벨에서 파싱한 토큰 집합.
///
/// 라벨은 `+` 로 구분된 토큰 나열("E + EP + C")이며, 토큰 전체 일치로만
/// 판정한다. "EP"가 "E" 규칙을, "CO2"가 "C" 규칙을 건드리는 일이 없다.
#[derive(Debug, Clone, Default)]
pub struct StepSet {
    tokens: Vec<StepToken>,
}

impl StepSet {
    /// `+` 구분자로 라벨을 잘라 토큰 집합을 만든다. 모르는 토큰은 무시한다.
    pub fn parse(label: &str) -> Self {
        let tokens = label
            .split('+')
            .filter_map(|part| StepToken::from_label(part.trim()))
            .collect();
        Self { tokens }
    }

    pub fn contains(&self, token: StepToken) -> bool {
        self.tokens.contains(&token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// 시나리오 정의: 라벨, 설명, 상각비를 부담하는 설비 단계 목록.
///
/// 상각 대상 단계(capital_steps)는 토큰 집합에서 기계적으로 유도하지 않고
/// 항목별로 명시한다. 사업 카탈로그가 수기로 열거된 것이라 토큰 구성과
/// 상각 구성이 어긋나는 항목이 존재한다.
#[derive(Debug, Clone)]
pub struct ScenarioDefinition {
    pub label: &'static str,
    pub description: &'static str,
    pub capital_steps: &'static [StepToken],
}

impl ScenarioDefinition {
    /// 이 시나리오가 부담하는 연간 상각비 합계 [€/년]
    pub fn annualized_capex(&self, capex: &CapexSchedule) -> f64 {
        self.capital_steps
            .iter()
            .map(|step| match step {
                StepToken::Electrolysis => capex.annualized_electrolysis(),
                StepToken::Co2Capture => capex.annualized_co2_capture(),
                StepToken::Conversion => capex.annualized_esaf_plant(),
                _ => 0.0,
            })
            .sum()
    }
}

use StepToken::{Co2Capture as CO2, Conversion as C, Electrolysis as EP};

/// 사업에서 실제로 검토하는 시나리오 카탈로그. 표시 순서 고정.
pub const CATALOG: &[ScenarioDefinition] = &[
    ScenarioDefinition {
        label: "E",
        description: "Supplying only electricity",
        capital_steps: &[],
    },
    ScenarioDefinition {
        label: "W",
        description: "Supplying only water for electrolysis",
        capital_steps: &[],
    },
    ScenarioDefinition {
        label: "EP",
        description: "Producing hydrogen through electrolysis",
        capital_steps: &[EP],
    },
    ScenarioDefinition {
        label: "CO2",
        description: "Acquiring and selling CO2",
        capital_steps: &[CO2],
    },
    ScenarioDefinition {
        label: "C",
        description: "Converting hydrogen and CO2 to eSAF",
        capital_steps: &[C],
    },
    ScenarioDefinition {
        label: "E + W",
        description: "Supplying electricity and water for electrolysis",
        capital_steps: &[],
    },
    ScenarioDefinition {
        label: "E + EP",
        description: "Supplying electricity and producing hydrogen",
        capital_steps: &[EP],
    },
    ScenarioDefinition {
        label: "E + CO2",
        description: "Supplying electricity and acquiring CO2",
        capital_steps: &[CO2],
    },
    ScenarioDefinition {
        label: "E + C",
        description: "Supplying electricity and converting to eSAF",
        capital_steps: &[C],
    },
    ScenarioDefinition {
        label: "W + EP",
        description: "Supplying water and producing hydrogen",
        capital_steps: &[EP],
    },
    ScenarioDefinition {
        label: "W + CO2",
        description: "Supplying water and acquiring CO2",
        capital_steps: &[CO2],
    },
    ScenarioDefinition {
        label: "W + C",
        description: "Supplying water and converting to eSAF",
        capital_steps: &[C],
    },
    ScenarioDefinition {
        label: "EP + CO2",
        description: "Producing hydrogen and acquiring CO2",
        capital_steps: &[EP, CO2],
    },
    ScenarioDefinition {
        label: "EP + C",
        description: "Producing hydrogen and converting to eSAF",
        capital_steps: &[EP, C],
    },
    ScenarioDefinition {
        label: "CO2 + C",
        description: "Acquiring CO2 and converting to eSAF",
        capital_steps: &[CO2, C],
    },
    ScenarioDefinition {
        label: "E + W + EP",
        description: "Supplying electricity, water, and producing hydrogen",
        capital_steps: &[EP],
    },
    ScenarioDefinition {
        label: "E + W + CO2",
        description: "Supplying electricity, water, and acquiring CO2",
        capital_steps: &[CO2],
    },
    ScenarioDefinition {
        label: "E + W + C",
        description: "Supplying electricity, water, and converting to eSAF",
        capital_steps: &[C],
    },
    ScenarioDefinition {
        label: "E + EP + CO2",
        description: "Supplying electricity, producing hydrogen, and acquiring CO2",
        capital_steps: &[EP, CO2],
    },
    ScenarioDefinition {
        label: "E + EP + C",
        description: "Supplying electricity, producing hydrogen, and converting to eSAF",
        capital_steps: &[EP, C],
    },
    ScenarioDefinition {
        label: "E + CO2 + C",
        description: "Supplying electricity, acquiring CO2, and converting to eSAF",
        capital_steps: &[CO2, C],
    },
    ScenarioDefinition {
        label: "W + EP + CO2",
        description: "Supplying water, producing hydrogen, and acquiring CO2",
        capital_steps: &[EP, CO2],
    },
    ScenarioDefinition {
        label: "W + EP + C",
        description: "Supplying water, producing hydrogen, and converting to eSAF",
        capital_steps: &[EP, C],
    },
    ScenarioDefinition {
        label: "W + CO2 + C",
        description: "Supplying water, acquiring CO2, and converting to eSAF",
        capital_steps: &[CO2, C],
    },
    ScenarioDefinition {
        label: "EP + CO2 + C",
        description: "Producing hydrogen, acquiring CO2, and converting to eSAF",
        capital_steps: &[EP, CO2, C],
    },
    ScenarioDefinition {
        label: "H + CO2 + C",
        description: "Handling hydrogen, acquiring CO2, and converting to eSAF",
        capital_steps: &[CO2, C],
    },
    // 아래 항목은 CO2 포집 설비를 인수 상대측이 보유하는 구성이라
    // CO2 상각비를 부담하지 않는다.
    ScenarioDefinition {
        label: "E + W + EP + CO2",
        description: "Supplying electricity, water, producing hydrogen, and acquiring CO2",
        capital_steps: &[EP],
    },
    ScenarioDefinition {
        label: "E + W + EP + C",
        description: "Supplying electricity, water, producing hydrogen, and converting to eSAF",
        capital_steps: &[EP, C],
    },
    ScenarioDefinition {
        label: "E + W + CO2 + C",
        description: "Supplying electricity, water, acquiring CO2, and converting to eSAF",
        capital_steps: &[CO2, C],
    },
    ScenarioDefinition {
        label: "E + EP + CO2 + C",
        description: "Supplying electricity, producing hydrogen, acquiring CO2, and converting to eSAF",
        capital_steps: &[EP, CO2, C],
    },
    ScenarioDefinition {
        label: "W + EP + CO2 + C",
        description: "Supplying water, producing hydrogen, acquiring CO2, and converting to eSAF",
        capital_steps: &[EP, CO2, C],
    },
    ScenarioDefinition {
        label: "E + W + EP + CO2 + C",
        description: "Supplying electricity, water, producing hydrogen, acquiring CO2, and converting to eSAF",
        capital_steps: &[EP, CO2, C],
    },
];
