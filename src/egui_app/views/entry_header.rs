//! Entry screen header.
//!
//! Pure presentation over externally supplied state: a loading skeleton while
//! the first user read is in flight, an inline name editor, or a greeting
//! with a "set your name" prompt when the display name is still the
//! email-derived default.

use eframe::egui;

use crate::egui_app::state::{AppState, UserSlot};
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.add_space(24.0);

        match state.current_user.clone() {
            UserSlot::Loading => render_skeleton(ui),
            UserSlot::Ready(None) => {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("로그인이 필요합니다.").color(colors::TEXT_SECONDARY),
                    );
                });
            }
            UserSlot::Ready(Some(user)) => {
                if state.name_edit.is_some() {
                    render_name_editor(ui, state);
                } else {
                    render_greeting(ui, state, &user);
                }
            }
        }
    });
}

/// Greyed-out bars standing in for the greeting while loading.
fn render_skeleton(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.spinner();
        ui.add_space(8.0);
        let (rect, _) = ui.allocate_exact_size([220.0, 18.0].into(), egui::Sense::hover());
        ui.painter().rect_filled(rect, 4.0, colors::PANEL_BG);
        ui.add_space(6.0);
        let (rect, _) = ui.allocate_exact_size([140.0, 14.0].into(), egui::Sense::hover());
        ui.painter().rect_filled(rect, 4.0, colors::PANEL_BG);
    });
}

fn render_greeting(ui: &mut egui::Ui, state: &mut AppState, user: &crate::shared::User) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("안녕하세요, {}님!", user.name))
                .size(24.0)
                .color(colors::TEXT_LIGHT),
        );

        if let Some(period) = state.periods.current() {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!("{} 진행 중", period.label))
                    .color(colors::TEXT_SECONDARY),
            );
        }

        if state.saving_name {
            ui.add_space(6.0);
            ui.label(egui::RichText::new("저장 중...").color(colors::TEXT_SECONDARY));
        } else if user.has_default_name() {
            ui.add_space(8.0);
            if ui
                .button(egui::RichText::new("이름을 설정해주세요 ✏").color(colors::ACCENT))
                .clicked()
            {
                state.begin_name_edit();
            }
        } else if ui
            .small_button(egui::RichText::new("이름 수정").color(colors::TEXT_SECONDARY))
            .clicked()
        {
            state.begin_name_edit();
        }
    });
}

fn render_name_editor(ui: &mut egui::Ui, state: &mut AppState) {
    let mut save_clicked = false;
    let mut cancel_clicked = false;

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("이름 설정").size(18.0).color(colors::TEXT_LIGHT));
        ui.add_space(8.0);

        if let Some(buffer) = &mut state.name_edit {
            ui.add_sized(
                [220.0, 28.0],
                egui::TextEdit::singleline(buffer).text_color(colors::TEXT_LIGHT),
            );
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - 170.0).max(0.0) / 2.0);
            let save = egui::Button::new(egui::RichText::new("저장").color(colors::BG_DARK))
                .fill(colors::ACCENT);
            if ui.add_sized([80.0, 28.0], save).clicked() {
                save_clicked = true;
            }
            ui.add_space(10.0);
            if ui.add_sized([80.0, 28.0], egui::Button::new("취소")).clicked() {
                cancel_clicked = true;
            }
        });
    });

    if save_clicked {
        state.save_name();
    } else if cancel_clicked {
        state.cancel_name_edit();
    }
}
