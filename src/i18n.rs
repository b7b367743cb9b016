use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RUN: &str = "main_menu.run";
    pub const MAIN_MENU_PARAMS: &str = "main_menu.params";
    pub const MAIN_MENU_CAPEX: &str = "main_menu.capex";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const RUN_TABLE_TITLE: &str = "run.table_title";
    pub const RUN_CHART_TITLE: &str = "run.chart_title";
    pub const RUN_PAYBACK_TITLE: &str = "run.payback_title";

    pub const PARAMS_HEADING: &str = "params.heading";
    pub const PARAMS_KEEP_NOTE: &str = "params.keep_note";
    pub const PROMPT_ELECTRICITY_PRICE: &str = "params.electricity_price";
    pub const PROMPT_ELECTROLYSIS_ENERGY: &str = "params.electrolysis_energy";
    pub const PROMPT_HYDROGEN_PRICE: &str = "params.hydrogen_price";
    pub const PROMPT_HYDROGEN_QUANTITY: &str = "params.hydrogen_quantity";
    pub const PROMPT_FRACTIONATION_ENERGY: &str = "params.fractionation_energy";
    pub const PROMPT_CO2_PRICE: &str = "params.co2_price";
    pub const PROMPT_CO2_QUANTITY: &str = "params.co2_quantity";
    pub const PROMPT_WATER_PRICE: &str = "params.water_price";
    pub const PROMPT_WATER_QUANTITY: &str = "params.water_quantity";
    pub const PROMPT_ESAF_PRICE: &str = "params.esaf_price";

    pub const CAPEX_HEADING: &str = "capex.heading";
    pub const PROMPT_CAPEX_ELECTROLYSER: &str = "capex.electrolyser";
    pub const PROMPT_CAPEX_STORAGE: &str = "capex.hydrogen_storage";
    pub const PROMPT_CAPEX_CO2: &str = "capex.co2_capture";
    pub const PROMPT_CAPEX_PLANT: &str = "capex.esaf_plant";
    pub const PROMPT_USEFUL_LIFE: &str = "capex.useful_life";
    pub const PROMPT_PROFIT_DURATION: &str = "capex.profit_duration";

    pub const GUI_EVALUATE: &str = "gui.evaluate";
    pub const GUI_EXPORT_CSV: &str = "gui.export_csv";
    pub const GUI_SAVE_CONFIG: &str = "gui.save_config";
    pub const GUI_PARAMS_SECTION: &str = "gui.params_section";
    pub const GUI_CAPEX_SECTION: &str = "gui.capex_section";
    pub const GUI_RESULTS_SECTION: &str = "gui.results_section";
    pub const GUI_CHART_SECTION: &str = "gui.chart_section";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== eSAF Financial Model ===",
        MAIN_MENU_RUN => "1) 시나리오 평가 실행",
        MAIN_MENU_PARAMS => "2) 시장/기술 파라미터 입력",
        MAIN_MENU_CAPEX => "3) CAPEX/상각 조건 입력",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        RUN_TABLE_TITLE => "\n-- 시나리오별 비용/매출/이익 --",
        RUN_CHART_TITLE => "\n-- 시나리오별 이익 차트 --",
        RUN_PAYBACK_TITLE => "\n-- 시나리오별 회수기간 --",
        PARAMS_HEADING => "\n-- 시장/기술 파라미터 --",
        PARAMS_KEEP_NOTE => "엔터만 입력하면 현재 값을 유지합니다.",
        PROMPT_ELECTRICITY_PRICE => "전력 단가 [€/MWh]",
        PROMPT_ELECTROLYSIS_ENERGY => "수전해 소요 에너지 [MWh]",
        PROMPT_HYDROGEN_PRICE => "수소 단가 [€/kg]",
        PROMPT_HYDROGEN_QUANTITY => "수소 생산량 [kg]",
        PROMPT_FRACTIONATION_ENERGY => "분별 공정 소요 에너지 [MWh]",
        PROMPT_CO2_PRICE => "CO2 단가 [€/ton]",
        PROMPT_CO2_QUANTITY => "CO2 소요량 [ton]",
        PROMPT_WATER_PRICE => "용수 단가 [€/m3]",
        PROMPT_WATER_QUANTITY => "용수 소요량 [m3]",
        PROMPT_ESAF_PRICE => "eSAF 판매 단가 [€/m3]",
        CAPEX_HEADING => "\n-- CAPEX/상각 조건 --",
        PROMPT_CAPEX_ELECTROLYSER => "수전해 설비 CAPEX [€]",
        PROMPT_CAPEX_STORAGE => "수소 저장 설비 CAPEX [€]",
        PROMPT_CAPEX_CO2 => "CO2 포집 설비 CAPEX [€]",
        PROMPT_CAPEX_PLANT => "eSAF 생산(ATJ) 설비 CAPEX [€]",
        PROMPT_USEFUL_LIFE => "설비 내용연수 [년]",
        PROMPT_PROFIT_DURATION => "이익 집계 기간 [일]",
        GUI_EVALUATE => "평가 실행",
        GUI_EXPORT_CSV => "CSV 내보내기",
        GUI_SAVE_CONFIG => "설정 저장",
        GUI_PARAMS_SECTION => "시장/기술 파라미터",
        GUI_CAPEX_SECTION => "CAPEX/상각 조건",
        GUI_RESULTS_SECTION => "시나리오별 결과",
        GUI_CHART_SECTION => "시나리오별 이익",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== eSAF Financial Model ===",
        MAIN_MENU_RUN => "1) Evaluate scenarios",
        MAIN_MENU_PARAMS => "2) Market/technical parameters",
        MAIN_MENU_CAPEX => "3) CAPEX / depreciation inputs",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        RUN_TABLE_TITLE => "\n-- Costs / revenue / profit per scenario --",
        RUN_CHART_TITLE => "\n-- Profit per scenario --",
        RUN_PAYBACK_TITLE => "\n-- Payback period per scenario --",
        PARAMS_HEADING => "\n-- Market/technical parameters --",
        PARAMS_KEEP_NOTE => "Press enter to keep the current value.",
        PROMPT_ELECTRICITY_PRICE => "Electricity price [€/MWh]",
        PROMPT_ELECTROLYSIS_ENERGY => "Energy for electrolysis [MWh]",
        PROMPT_HYDROGEN_PRICE => "Hydrogen price [€/kg]",
        PROMPT_HYDROGEN_QUANTITY => "Hydrogen quantity [kg]",
        PROMPT_FRACTIONATION_ENERGY => "Energy for fractionation [MWh]",
        PROMPT_CO2_PRICE => "CO2 price [€/ton]",
        PROMPT_CO2_QUANTITY => "CO2 quantity [ton]",
        PROMPT_WATER_PRICE => "Water price [€/m3]",
        PROMPT_WATER_QUANTITY => "Water quantity [m3]",
        PROMPT_ESAF_PRICE => "eSAF selling price [€/m3]",
        CAPEX_HEADING => "\n-- CAPEX / depreciation inputs --",
        PROMPT_CAPEX_ELECTROLYSER => "CAPEX for the electrolyser [€]",
        PROMPT_CAPEX_STORAGE => "CAPEX for hydrogen storage [€]",
        PROMPT_CAPEX_CO2 => "CAPEX for CO2 capture [€]",
        PROMPT_CAPEX_PLANT => "CAPEX for the ATJ factory [€]",
        PROMPT_USEFUL_LIFE => "Useful life of the assets [years]",
        PROMPT_PROFIT_DURATION => "Profit duration [days]",
        GUI_EVALUATE => "Evaluate",
        GUI_EXPORT_CSV => "Export CSV",
        GUI_SAVE_CONFIG => "Save config",
        GUI_PARAMS_SECTION => "Market/technical parameters",
        GUI_CAPEX_SECTION => "CAPEX / depreciation",
        GUI_RESULTS_SECTION => "Results per scenario",
        GUI_CHART_SECTION => "Profit per scenario",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Korean  2) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => return None,
    })
}
