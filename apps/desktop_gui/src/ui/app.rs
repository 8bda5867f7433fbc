use std::time::Duration;

use client_core::routes::Route;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::RichText;
use shared::domain::UserFilter;

use crate::backend_bridge::commands::{BackendCommand, ListCommand};
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::ScreenState;
use crate::ui::widgets::{
    pagination,
    user_table::{self, RowAction},
};

pub struct UsuariosApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    screen: ScreenState,
}

impl UsuariosApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            screen: ScreenState::default(),
        };
        app.dispatch(BackendCommand::MountList);
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.screen.status);
    }

    fn dispatch_all(&mut self, commands: Vec<BackendCommand>) {
        for cmd in commands {
            self.dispatch(cmd);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            let commands = self.screen.apply(event);
            self.dispatch_all(commands);
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = ui.label(RichText::new(&self.screen.status).weak());
            if let Some(err) = &self.screen.last_error {
                status.on_hover_text(format!(
                    "{:?} / {:?}: {}",
                    err.category(),
                    err.context(),
                    err.message()
                ));
            }
        });
    }

    fn show_list_screen(&mut self, ctx: &egui::Context) {
        let enabled = !self.screen.is_modal();
        let list = &self.screen.list;

        let commands = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let mut commands: Vec<ListCommand> = Vec::new();
                ui.heading("Usuarios");
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    let mut selected = list.filter;
                    ui.add_enabled_ui(enabled, |ui| {
                        egui::ComboBox::from_id_salt("user_filter")
                            .selected_text(selected.label())
                            .show_ui(ui, |ui| {
                                for option in UserFilter::OPTIONS {
                                    ui.selectable_value(&mut selected, option, option.label());
                                }
                            });
                    });
                    if selected != list.filter {
                        commands.push(ListCommand::Filter {
                            raw: selected.selector_value().to_string(),
                        });
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add_enabled(enabled, egui::Button::new("Nuevo usuario"))
                            .clicked()
                        {
                            commands.push(ListCommand::CreateUser);
                        }
                    });
                });
                ui.separator();

                let table_height = (ui.available_height() - 48.0).max(120.0);
                egui::ScrollArea::vertical()
                    .max_height(table_height)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        match user_table::show(ui, &list.users, enabled) {
                            Some(RowAction::Edit(user_id)) => {
                                commands.push(ListCommand::EditUser { user_id });
                            }
                            Some(RowAction::Delete(user_id)) => {
                                commands.push(ListCommand::DeleteUser { user_id });
                            }
                            None => {}
                        }
                    });

                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.add_enabled_ui(enabled, |ui| {
                        if let Some(page) =
                            pagination::show(ui, list.current_page, list.total_pages)
                        {
                            commands.push(ListCommand::Paginate { page });
                        }
                    });
                });

                commands
            })
            .inner;

        self.dispatch_all(commands.into_iter().map(BackendCommand::from).collect());
    }

    fn show_route_placeholder(&mut self, ctx: &egui::Context, title: String) {
        let back = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.heading(title);
                ui.add_space(8.0);
                ui.label("El formulario de usuario se gestiona fuera de este listado.");
                ui.add_space(8.0);
                ui.button("Volver al listado").clicked()
            })
            .inner;

        if back {
            let commands = self.screen.navigate(Route::UserList);
            self.dispatch_all(commands);
        }
    }

    fn show_confirm_dialog(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.screen.confirmations.front() else {
            return;
        };
        let message = pending.message.clone();
        let mut answer = None;

        egui::Window::new("Confirmar")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Aceptar").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Cancelar").clicked() {
                        answer = Some(false);
                    }
                });
            });

        if let Some(accepted) = answer {
            self.screen.answer_confirmation(accepted);
        }
    }

    fn show_alert_dialog(&mut self, ctx: &egui::Context) {
        if !self.screen.confirmations.is_empty() {
            return;
        }
        let Some(message) = self.screen.alerts.front().map(|alert| alert.message.clone()) else {
            return;
        };
        let mut dismissed = false;

        egui::Window::new("Aviso")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("Aceptar").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.screen.dismiss_alert();
        }
    }
}

impl eframe::App for UsuariosApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_status_bar(ctx);

        match self.screen.route {
            Route::UserList => self.show_list_screen(ctx),
            Route::CreateUser => self.show_route_placeholder(ctx, "Nuevo usuario".to_string()),
            Route::EditUser(user_id) => {
                self.show_route_placeholder(ctx, format!("Editar usuario {user_id}"))
            }
        }

        self.show_confirm_dialog(ctx);
        self.show_alert_dialog(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
