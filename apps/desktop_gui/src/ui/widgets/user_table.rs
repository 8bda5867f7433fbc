use eframe::egui;
use shared::domain::{User, UserId};

pub const COLUMNS: [&str; 5] = ["Nombre", "Apellido", "Email", "Rol", "Acciones"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(UserId),
    Delete(UserId),
}

pub fn row_cells(user: &User) -> [&str; 4] {
    [
        user.nombre.as_str(),
        user.apellido.as_str(),
        user.email.as_str(),
        user.rol.as_str(),
    ]
}

/// One row per user plus an actions cell bound to the row's id.
pub fn show(ui: &mut egui::Ui, users: &[User], enabled: bool) -> Option<RowAction> {
    let mut action = None;

    egui::Grid::new("users_table")
        .num_columns(COLUMNS.len())
        .striped(true)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            for title in COLUMNS {
                ui.label(egui::RichText::new(title).strong());
            }
            ui.end_row();

            for user in users {
                for cell in row_cells(user) {
                    ui.label(cell);
                }
                ui.horizontal(|ui| {
                    if ui.add_enabled(enabled, egui::Button::new("Editar")).clicked() {
                        action = Some(RowAction::Edit(user.id));
                    }
                    if ui
                        .add_enabled(enabled, egui::Button::new("Eliminar"))
                        .clicked()
                    {
                        action = Some(RowAction::Delete(user.id));
                    }
                });
                ui.end_row();
            }
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_column_order() {
        let user = User {
            id: UserId(3),
            nombre: "Jorge".into(),
            apellido: "López".into(),
            email: "jorge@example.com".into(),
            rol: "supervisor".into(),
        };
        assert_eq!(
            row_cells(&user),
            ["Jorge", "López", "jorge@example.com", "supervisor"]
        );
        assert_eq!(COLUMNS.len(), row_cells(&user).len() + 1);
    }
}
