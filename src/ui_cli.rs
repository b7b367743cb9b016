use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::evaluator;
use crate::i18n::{keys, Translator};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RunModel,
    EditParameters,
    EditCapex,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_RUN));
    println!("{}", tr.t(keys::MAIN_MENU_PARAMS));
    println!("{}", tr.t(keys::MAIN_MENU_CAPEX));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::RunModel),
            "2" => return Ok(MenuChoice::EditParameters),
            "3" => return Ok(MenuChoice::EditCapex),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 카탈로그 전체를 평가하고 표/차트/회수기간을 출력한다.
pub fn handle_run_model(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let results = evaluator::evaluate_catalog(&cfg.params, &cfg.capex);
    println!("{}", tr.t(keys::RUN_TABLE_TITLE));
    print!("{}", report::result_table(&results));
    println!("{}", tr.t(keys::RUN_CHART_TITLE));
    print!("{}", report::profit_chart(&results));
    println!("{}", tr.t(keys::RUN_PAYBACK_TITLE));
    print!("{}", report::payback_table(&results));
    Ok(())
}

/// 시장/기술 파라미터 입력 메뉴를 처리한다.
pub fn handle_parameters(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PARAMS_HEADING));
    println!("{}", tr.t(keys::PARAMS_KEEP_NOTE));
    let p = &mut cfg.params;
    p.electricity_price_per_mwh =
        read_f64_default(tr, keys::PROMPT_ELECTRICITY_PRICE, p.electricity_price_per_mwh)?;
    p.electrolysis_energy_mwh =
        read_f64_default(tr, keys::PROMPT_ELECTROLYSIS_ENERGY, p.electrolysis_energy_mwh)?;
    p.hydrogen_price_per_kg =
        read_f64_default(tr, keys::PROMPT_HYDROGEN_PRICE, p.hydrogen_price_per_kg)?;
    p.hydrogen_quantity_kg =
        read_f64_default(tr, keys::PROMPT_HYDROGEN_QUANTITY, p.hydrogen_quantity_kg)?;
    p.fractionation_energy_mwh =
        read_f64_default(tr, keys::PROMPT_FRACTIONATION_ENERGY, p.fractionation_energy_mwh)?;
    p.co2_price_per_ton = read_f64_default(tr, keys::PROMPT_CO2_PRICE, p.co2_price_per_ton)?;
    p.co2_quantity_ton = read_f64_default(tr, keys::PROMPT_CO2_QUANTITY, p.co2_quantity_ton)?;
    p.water_price_per_m3 = read_f64_default(tr, keys::PROMPT_WATER_PRICE, p.water_price_per_m3)?;
    p.water_quantity_m3 =
        read_f64_default(tr, keys::PROMPT_WATER_QUANTITY, p.water_quantity_m3)?;
    p.esaf_selling_price = read_f64_default(tr, keys::PROMPT_ESAF_PRICE, p.esaf_selling_price)?;
    Ok(())
}

/// CAPEX/상각 조건 입력 메뉴를 처리한다.
pub fn handle_capex(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CAPEX_HEADING));
    println!("{}", tr.t(keys::PARAMS_KEEP_NOTE));
    let c = &mut cfg.capex;
    c.capex_electrolyser =
        read_f64_default(tr, keys::PROMPT_CAPEX_ELECTROLYSER, c.capex_electrolyser)?;
    c.capex_hydrogen_storage =
        read_f64_default(tr, keys::PROMPT_CAPEX_STORAGE, c.capex_hydrogen_storage)?;
    c.capex_co2_capture = read_f64_default(tr, keys::PROMPT_CAPEX_CO2, c.capex_co2_capture)?;
    c.capex_esaf_plant = read_f64_default(tr, keys::PROMPT_CAPEX_PLANT, c.capex_esaf_plant)?;
    c.useful_life_years = read_f64_default(tr, keys::PROMPT_USEFUL_LIFE, c.useful_life_years)?;
    c.profit_duration_days =
        read_f64_default(tr, keys::PROMPT_PROFIT_DURATION, c.profit_duration_days)?;
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어 변경은 재시작 후 적용된다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.language = "ko".to_string(),
        "2" => cfg.language = "en".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 기본값을 보여주며 숫자를 읽는다. 빈 입력은 기본값 유지.
fn read_f64_default(tr: &Translator, label_key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{default}]: ", tr.t(label_key)))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
