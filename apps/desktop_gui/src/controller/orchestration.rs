//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "La cola de comandos está llena; reintente".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "El proceso de fondo se detuvo; reinicie la aplicación".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend_bridge::commands::ListCommand;
    use crossbeam_channel::bounded;

    #[test]
    fn queues_command_and_leaves_status() {
        let (tx, rx) = bounded(1);
        let mut status = String::from("ok");

        dispatch_backend_command(&tx, ListCommand::Paginate { page: 2 }.into(), &mut status);

        assert_eq!(rx.try_recv(), Ok(BackendCommand::List(ListCommand::Paginate { page: 2 })));
        assert_eq!(status, "ok");
    }

    #[test]
    fn full_queue_reports_status() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::MountList, &mut status);
        dispatch_backend_command(&tx, BackendCommand::MountList, &mut status);

        assert!(status.contains("llena"));
    }

    #[test]
    fn disconnected_backend_reports_status() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();

        dispatch_backend_command(&tx, ListCommand::CreateUser.into(), &mut status);

        assert!(status.contains("detuvo"));
    }
}
