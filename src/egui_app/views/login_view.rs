//! Login screen.

use eframe::egui;

use crate::egui_app::state::{AppState, Screen};
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space((available_rect.height() - 300.0).max(0.0) / 2.0);

            ui.label(
                egui::RichText::new("🍙 코드 김밥")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("블로그 스터디 기록장")
                    .size(14.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(20.0);

            if let Some(error) = state.login.error() {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("이메일").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.login.email)
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("비밀번호").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.login.password)
                        .password(true)
                        .text_color(colors::TEXT_LIGHT),
                );
            });

            ui.add_space(20.0);

            let submitting = state.login.is_submitting();
            ui.horizontal(|ui| {
                let button_width = 120.0;
                ui.add_space((available_rect.width() - button_width * 2.0 - 10.0) / 2.0);

                let login = egui::Button::new(
                    egui::RichText::new("로그인").color(colors::BG_DARK),
                )
                .fill(colors::ACCENT);
                if ui.add_enabled(!submitting, login.min_size([button_width, 32.0].into())).clicked() {
                    state.handle_login();
                }

                ui.add_space(10.0);
                if ui
                    .add_sized(
                        [button_width, 32.0],
                        egui::Button::new(
                            egui::RichText::new("회원가입").color(colors::TEXT_SECONDARY),
                        ),
                    )
                    .clicked()
                {
                    state.screen = Screen::Signup;
                }
            });

            if submitting {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("로그인 중...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}
