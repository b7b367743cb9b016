#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use esaf_financial_model::{
    config,
    evaluator::{self, ScenarioResult},
    i18n::{self, keys},
    report,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1180.0, 760.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "eSAF Financial Model",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui에 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 시스템 폰트를 탐색해 적용한다.
/// 1) Windows 시스템 폰트(맑은 고딕/굴림 등)
/// 2) Linux/macOS의 Nanum/Noto 계열
/// 3) 모두 실패하면 Err를 반환하고 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts_dir = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunbd.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts_dir.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }
    let unix_candidates = [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ];
    for cand in unix_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; falling back to default fonts.".into())
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    results: Vec<ScenarioResult>,
    export_status: Option<String>,
    save_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new(&lang);
        let results = evaluator::evaluate_catalog(&config.params, &config.capex);
        Self {
            config,
            tr,
            results,
            export_status: None,
            save_status: None,
        }
    }

    fn evaluate(&mut self) {
        self.results = evaluator::evaluate_catalog(&self.config.params, &self.config.capex);
    }

    fn export_csv(&mut self) {
        let Some(path) = FileDialog::new()
            .set_file_name("esaf_scenarios.csv")
            .save_file()
        else {
            return;
        };
        let csv = report::to_csv(&self.results);
        self.export_status = match fs::write(&path, csv) {
            Ok(()) => Some(format!("CSV → {}", path.display())),
            Err(e) => Some(format!("CSV export failed: {e}")),
        };
    }

    fn set_language(&mut self, code: &str) {
        self.config.language = code.to_string();
        self.tr = i18n::Translator::new(code);
    }

    fn params_panel(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::GUI_PARAMS_SECTION));
        egui::Grid::new("params_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                let p = &mut self.config.params;
                ui.label(tr.t(keys::PROMPT_ELECTRICITY_PRICE));
                ui.add(egui::DragValue::new(&mut p.electricity_price_per_mwh).speed(1.0));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_ELECTROLYSIS_ENERGY));
                ui.add(egui::DragValue::new(&mut p.electrolysis_energy_mwh).speed(0.5));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_HYDROGEN_PRICE));
                ui.add(egui::DragValue::new(&mut p.hydrogen_price_per_kg).speed(0.1));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_HYDROGEN_QUANTITY));
                ui.add(egui::DragValue::new(&mut p.hydrogen_quantity_kg).speed(5.0));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_FRACTIONATION_ENERGY));
                ui.add(egui::DragValue::new(&mut p.fractionation_energy_mwh).speed(0.5));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_CO2_PRICE));
                ui.add(egui::DragValue::new(&mut p.co2_price_per_ton).speed(5.0));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_CO2_QUANTITY));
                ui.add(egui::DragValue::new(&mut p.co2_quantity_ton).speed(0.1));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_WATER_PRICE));
                ui.add(egui::DragValue::new(&mut p.water_price_per_m3).speed(0.1));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_WATER_QUANTITY));
                ui.add(egui::DragValue::new(&mut p.water_quantity_m3).speed(0.5));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_ESAF_PRICE));
                ui.add(egui::DragValue::new(&mut p.esaf_selling_price).speed(10.0));
                ui.end_row();
            });
        ui.separator();
        ui.heading(tr.t(keys::GUI_CAPEX_SECTION));
        egui::Grid::new("capex_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                let c = &mut self.config.capex;
                ui.label(tr.t(keys::PROMPT_CAPEX_ELECTROLYSER));
                ui.add(egui::DragValue::new(&mut c.capex_electrolyser).speed(10_000.0));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_CAPEX_STORAGE));
                ui.add(egui::DragValue::new(&mut c.capex_hydrogen_storage).speed(10_000.0));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_CAPEX_CO2));
                ui.add(egui::DragValue::new(&mut c.capex_co2_capture).speed(10_000.0));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_CAPEX_PLANT));
                ui.add(egui::DragValue::new(&mut c.capex_esaf_plant).speed(10_000.0));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_USEFUL_LIFE));
                ui.add(egui::DragValue::new(&mut c.useful_life_years).speed(1.0));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_PROFIT_DURATION));
                ui.add(egui::DragValue::new(&mut c.profit_duration_days).speed(1.0));
                ui.end_row();
            });
    }

    fn results_table(&self, ui: &mut egui::Ui) {
        egui::Grid::new("results_grid")
            .num_columns(11)
            .striped(true)
            .spacing([10.0, 3.0])
            .show(ui, |ui| {
                for head in [
                    "Scenario", "Elec [€]", "H2 [€]", "CO2 [€]", "Water [€]", "CAPEX [€]",
                    "Total [€]", "Revenue [€]", "Profit [€]", "Payback [d]", "Description",
                ] {
                    ui.strong(head);
                }
                ui.end_row();
                for r in &self.results {
                    ui.monospace(&r.label);
                    ui.monospace(format!("{:.1}", r.electricity_cost));
                    ui.monospace(format!("{:.1}", r.hydrogen_cost));
                    ui.monospace(format!("{:.1}", r.co2_cost));
                    ui.monospace(format!("{:.1}", r.water_cost));
                    ui.monospace(format!("{:.1}", r.annualized_capex));
                    ui.monospace(format!("{:.1}", r.total_cost));
                    ui.monospace(format!("{:.1}", r.revenue));
                    ui.monospace(format!("{:.1}", r.profit));
                    ui.monospace(report::format_payback(r.payback_period_days));
                    ui.label(&r.description);
                    ui.end_row();
                }
            });
    }

    /// 시나리오별 이익 수평 막대 차트. 양수는 초록, 음수는 붉은색.
    fn profit_chart(&self, ui: &mut egui::Ui) {
        const ROW_H: f32 = 18.0;
        const LABEL_W: f32 = 170.0;
        let max_abs = self
            .results
            .iter()
            .map(|r| r.profit.abs())
            .fold(0.0_f64, f64::max);
        let height = ROW_H * self.results.len() as f32;
        let width = ui.available_width().max(400.0);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
        let rect = response.rect;
        let bar_max_w = (rect.width() - LABEL_W - 90.0).max(50.0);
        for (idx, r) in self.results.iter().enumerate() {
            let y = rect.top() + idx as f32 * ROW_H;
            painter.text(
                egui::pos2(rect.left(), y + ROW_H * 0.5),
                egui::Align2::LEFT_CENTER,
                &r.label,
                egui::FontId::monospace(12.0),
                ui.visuals().text_color(),
            );
            let frac = if max_abs > 0.0 {
                (r.profit.abs() / max_abs) as f32
            } else {
                0.0
            };
            let bar_w = bar_max_w * frac;
            let color = if r.profit < 0.0 {
                egui::Color32::from_rgb(200, 80, 70)
            } else {
                egui::Color32::from_rgb(80, 160, 90)
            };
            let bar_rect = egui::Rect::from_min_size(
                egui::pos2(rect.left() + LABEL_W, y + 3.0),
                egui::vec2(bar_w, ROW_H - 6.0),
            );
            painter.rect_filled(bar_rect, 2.0, color);
            painter.text(
                egui::pos2(rect.left() + LABEL_W + bar_w + 6.0, y + ROW_H * 0.5),
                egui::Align2::LEFT_CENTER,
                format!("{:.0}", r.profit),
                egui::FontId::monospace(11.0),
                ui.visuals().text_color(),
            );
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("eSAF Financial Model");
                ui.separator();
                if ui.button(self.tr.t(keys::GUI_EVALUATE)).clicked() {
                    self.evaluate();
                }
                if ui.button(self.tr.t(keys::GUI_EXPORT_CSV)).clicked() {
                    self.export_csv();
                }
                if ui.button(self.tr.t(keys::GUI_SAVE_CONFIG)).clicked() {
                    self.save_status = match self.config.save() {
                        Ok(()) => Some("config.toml ✓".to_string()),
                        Err(e) => Some(format!("{e}")),
                    };
                }
                ui.separator();
                let mut lang = self.config.language.clone();
                egui::ComboBox::from_id_source("lang_select")
                    .selected_text(&lang)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut lang, "ko".to_string(), "한국어");
                        ui.selectable_value(&mut lang, "en".to_string(), "English");
                    });
                if lang != self.config.language {
                    self.set_language(&lang);
                }
                if let Some(status) = &self.export_status {
                    ui.label(status);
                }
                if let Some(status) = &self.save_status {
                    ui.label(status);
                }
            });
        });
        egui::SidePanel::left("params_panel")
            .min_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.params_panel(ui);
                });
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.heading(self.tr.t(keys::GUI_RESULTS_SECTION));
                self.results_table(ui);
                ui.separator();
                ui.heading(self.tr.t(keys::GUI_CHART_SECTION));
                self.profit_chart(ui);
            });
        });
    }
}
