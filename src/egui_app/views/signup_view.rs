//! Signup screen.
//!
//! Renders the form while it is idle, submitting or in error, and the
//! confirmation screen with the resend action after a successful
//! registration.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::forms::SignupPhase;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space((available_rect.height() - 420.0).max(0.0) / 2.0);

            if let SignupPhase::Success { email } = state.signup.phase.clone() {
                render_success(ui, state, &email);
                return;
            }

            ui.label(
                egui::RichText::new("회원가입")
                    .size(24.0)
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            if let Some(error) = state.signup.error() {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;

            field(ui, available_rect.width(), label_width, input_width, "이름", |ui, w| {
                ui.add_sized(
                    [w, 28.0],
                    egui::TextEdit::singleline(&mut state.signup.name)
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            field(ui, available_rect.width(), label_width, input_width, "이메일", |ui, w| {
                ui.add_sized(
                    [w, 28.0],
                    egui::TextEdit::singleline(&mut state.signup.email)
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            field(ui, available_rect.width(), label_width, input_width, "비밀번호", |ui, w| {
                ui.add_sized(
                    [w, 28.0],
                    egui::TextEdit::singleline(&mut state.signup.password)
                        .password(true)
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            field(ui, available_rect.width(), label_width, input_width, "비밀번호 확인", |ui, w| {
                ui.add_sized(
                    [w, 28.0],
                    egui::TextEdit::singleline(&mut state.signup.confirm)
                        .password(true)
                        .text_color(colors::TEXT_LIGHT),
                );
            });

            ui.add_space(20.0);

            let submitting = state.signup.is_submitting();
            ui.horizontal(|ui| {
                let button_width = 120.0;
                ui.add_space((available_rect.width() - button_width * 2.0 - 10.0) / 2.0);

                let submit = egui::Button::new(
                    egui::RichText::new("가입하기").color(colors::BG_DARK),
                )
                .fill(colors::ACCENT);
                if ui.add_enabled(!submitting, submit.min_size([button_width, 32.0].into())).clicked() {
                    state.handle_signup();
                }

                ui.add_space(10.0);
                if ui
                    .add_sized(
                        [button_width, 32.0],
                        egui::Button::new(
                            egui::RichText::new("로그인으로").color(colors::TEXT_SECONDARY),
                        ),
                    )
                    .clicked()
                {
                    state.screen = crate::egui_app::state::Screen::Login;
                }
            });

            if submitting {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("가입 중...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}

/// Confirmation screen after a successful registration.
fn render_success(ui: &mut egui::Ui, state: &mut AppState, email: &str) {
    ui.label(
        egui::RichText::new("가입이 완료되었습니다! 🎉")
            .size(24.0)
            .color(colors::SUCCESS),
    );
    ui.add_space(12.0);
    ui.label(
        egui::RichText::new(format!("{email} 으로 확인 이메일을 보냈습니다."))
            .color(colors::TEXT_LIGHT),
    );
    ui.label(
        egui::RichText::new("메일함에서 링크를 눌러 가입을 마무리해주세요.")
            .color(colors::TEXT_SECONDARY),
    );
    ui.add_space(16.0);

    if let Some(notice) = &state.resend_notice {
        ui.label(egui::RichText::new(notice).color(colors::TEXT_SECONDARY));
        ui.add_space(8.0);
    }

    ui.horizontal(|ui| {
        let total = 150.0 * 2.0 + 10.0;
        ui.add_space((ui.available_width() - total).max(0.0) / 2.0);
        if ui
            .add_sized([150.0, 32.0], egui::Button::new("확인 이메일 다시 보내기"))
            .clicked()
        {
            state.handle_resend(email.to_string());
        }
        ui.add_space(10.0);
        if ui
            .add_sized([150.0, 32.0], egui::Button::new("로그인하러 가기"))
            .clicked()
        {
            state.screen = crate::egui_app::state::Screen::Login;
        }
    });
}

fn field(
    ui: &mut egui::Ui,
    total_width: f32,
    label_width: f32,
    input_width: f32,
    label: &str,
    add_input: impl FnOnce(&mut egui::Ui, f32),
) {
    ui.horizontal(|ui| {
        ui.add_space((total_width - input_width - label_width - 20.0) / 2.0);
        ui.add_sized(
            [label_width, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        add_input(ui, input_width);
    });
    ui.add_space(8.0);
}
