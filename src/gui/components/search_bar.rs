// src/gui/components/search_bar.rs
//
// Search terms, page count and field set, plus SCRAPE / STOP.

use eframe::egui;

use crate::{gui::app::App, record::FieldSet};

const MAX_PAGES: u32 = 50;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.running();

    ui.add_enabled_ui(!running, |ui| {
        let scrape = &mut app.state.options.scrape;
        ui.horizontal(|ui| {
            ui.label("Job title:");
            ui.add(egui::TextEdit::singleline(&mut scrape.query.title).desired_width(180.0));
            ui.label("Location:");
            ui.add(egui::TextEdit::singleline(&mut scrape.query.location).desired_width(140.0));

            ui.label("Pages:");
            let before = scrape.pages;
            ui.add(egui::DragValue::new(&mut scrape.pages).range(1..=MAX_PAGES));
            if scrape.pages != before {
                logd!("UI: pages → {}", scrape.pages);
            }

            let mut with_exp = scrape.fields.has_experience();
            if ui.checkbox(&mut with_exp, "Experience column").changed() {
                scrape.fields = if with_exp { FieldSet::WithExperience } else { FieldSet::Standard };
                logf!("UI: fields → {:?}", scrape.fields);
            }

            let mut visible = !scrape.headless;
            if ui.checkbox(&mut visible, "Show browser").changed() {
                scrape.headless = !visible;
            }
        });
    });

    ui.horizontal(|ui| {
        let url = app.state.options.scrape.base_url();
        ui.label(egui::RichText::new(url).monospace().weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if running {
                if ui.button("STOP").clicked() {
                    logf!("UI: Stop requested");
                    app.stop_scrape();
                }
                ui.spinner();
            } else {
                let red = egui::Color32::from_rgb(220, 30, 30);
                let black = egui::Color32::BLACK;
                let blank = app.state.options.scrape.query.title.trim().is_empty()
                    || app.state.options.scrape.query.location.trim().is_empty();
                let clicked = ui
                    .add_enabled(
                        !blank,
                        egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(red),
                    )
                    .clicked();
                if clicked {
                    let ctx = ui.ctx().clone();
                    app.start_scrape(&ctx);
                }
            }
        });
    });
}
