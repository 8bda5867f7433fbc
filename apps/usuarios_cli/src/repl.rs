//! Command parsing and plain-text rendering for the terminal list screen.

use client_core::{ListEvent, ListSnapshot};
use shared::domain::UserId;
use tokio::sync::broadcast::{self, error::TryRecvError};

pub const HELP: &str = "\
comandos:
  page N              ir a la página N
  filter todos|1|0    filtrar por estado (todos, activos, inactivos)
  delete ID           eliminar el usuario ID
  new                 nuevo usuario
  edit ID             editar el usuario ID
  show                volver a mostrar la tabla
  help                esta ayuda
  quit                salir";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Page(u32),
    Filter(String),
    Delete(UserId),
    New,
    Edit(UserId),
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(Command::Show);
    };
    let arg = parts.next();

    match (verb.to_ascii_lowercase().as_str(), arg) {
        ("page" | "p", Some(n)) => n
            .parse()
            .map(Command::Page)
            .map_err(|_| format!("página inválida: {n}")),
        ("filter" | "f", value) => Ok(Command::Filter(value.unwrap_or("all").to_string())),
        ("delete" | "d", Some(id)) => parse_id(id).map(Command::Delete),
        ("edit" | "e", Some(id)) => parse_id(id).map(Command::Edit),
        ("new" | "n", None) => Ok(Command::New),
        ("show" | "s", None) => Ok(Command::Show),
        ("help" | "h" | "?", None) => Ok(Command::Help),
        ("quit" | "q" | "exit", None) => Ok(Command::Quit),
        _ => Err(format!("comando no reconocido: {}", line.trim())),
    }
}

fn parse_id(raw: &str) -> Result<UserId, String> {
    raw.parse()
        .map(UserId)
        .map_err(|_| format!("id inválido: {raw}"))
}

const HEADERS: [&str; 5] = ["ID", "Nombre", "Apellido", "Email", "Rol"];

pub fn render_table(snapshot: &ListSnapshot) -> String {
    let rows: Vec<[String; 5]> = snapshot
        .users
        .iter()
        .map(|user| {
            [
                user.id.to_string(),
                user.nombre.clone(),
                user.apellido.clone(),
                user.email.clone(),
                user.rol.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    if rows.is_empty() {
        out.push_str("(sin usuarios)\n");
    }
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&format!(
        "Filtro: {} | Página {} de {}\n",
        snapshot.filter, snapshot.current_page, snapshot.total_pages
    ));
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

/// Failure notices for every listing error queued since the last call.
/// Skips past lag so a burst of events never leaves a backlog behind.
pub fn drain_failures(events: &mut broadcast::Receiver<ListEvent>) -> Vec<String> {
    let mut lines = Vec::new();
    loop {
        match events.try_recv() {
            Ok(ListEvent::FetchFailed { query, message }) => lines.push(format!(
                "no se pudo cargar la página {} ({}): {message}",
                query.page, query.filter
            )),
            Ok(_) => {}
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "list events lagged");
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::{User, UserFilter};

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(parse_command("page 3"), Ok(Command::Page(3)));
        assert_eq!(parse_command("p 2"), Ok(Command::Page(2)));
        assert_eq!(parse_command("filter 1"), Ok(Command::Filter("1".into())));
        assert_eq!(parse_command("filter"), Ok(Command::Filter("all".into())));
        assert_eq!(parse_command("delete 7"), Ok(Command::Delete(UserId(7))));
        assert_eq!(parse_command("edit 12"), Ok(Command::Edit(UserId(12))));
        assert_eq!(parse_command("NEW"), Ok(Command::New));
        assert_eq!(parse_command("   "), Ok(Command::Show));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_command("page x").is_err());
        assert!(parse_command("delete").is_err());
        assert!(parse_command("edit abc").is_err());
        assert!(parse_command("launch").is_err());
    }

    #[test]
    fn table_lists_rows_and_pagination_footer() {
        let snapshot = ListSnapshot {
            users: vec![User {
                id: UserId(7),
                nombre: "Lucía".into(),
                apellido: "Díaz".into(),
                email: "lucia@example.com".into(),
                rol: "admin".into(),
            }],
            current_page: 2,
            total_pages: 3,
            filter: UserFilter::Active,
        };

        let table = render_table(&snapshot);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "ID | Nombre | Apellido | Email             | Rol");
        assert_eq!(lines[2], "7  | Lucía  | Díaz     | lucia@example.com | admin");
        assert_eq!(lines[3], "Filtro: Activos | Página 2 de 3");
    }

    #[test]
    fn empty_table_says_so() {
        let table = render_table(&ListSnapshot::default());
        assert!(table.contains("(sin usuarios)"));
        assert!(table.contains("Página 1 de 1"));
    }

    fn failure(page: u32) -> ListEvent {
        ListEvent::FetchFailed {
            query: client_core::ListQuery {
                page,
                filter: UserFilter::Active,
            },
            message: "server responded 500".into(),
        }
    }

    #[test]
    fn drains_failures_past_lag() {
        let (tx, mut rx) = broadcast::channel(2);
        for page in 1..=4 {
            tx.send(failure(page)).expect("send");
        }

        let lines = drain_failures(&mut rx);

        assert_eq!(
            lines,
            vec![
                "no se pudo cargar la página 3 (Activos): server responded 500",
                "no se pudo cargar la página 4 (Activos): server responded 500",
            ]
        );
        assert!(drain_failures(&mut rx).is_empty());
    }

    #[test]
    fn ignores_events_other_than_failures() {
        let (tx, mut rx) = broadcast::channel(8);
        tx.send(ListEvent::StateChanged(ListSnapshot::default()))
            .expect("send");
        tx.send(failure(2)).expect("send");

        assert_eq!(drain_failures(&mut rx).len(), 1);
    }
}
