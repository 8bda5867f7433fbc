use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Parser;
use client_core::{
    config::load_settings, HttpUsuariosApi, ListEvent, Navigator, ResponseOrdering,
    UserInteraction, UserListController,
};
use tokio::{
    io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin},
    sync::{broadcast, Mutex},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod repl;

use repl::{drain_failures, parse_command, render_table, Command, HELP};

type SharedInput = Arc<Mutex<Lines<BufReader<Stdin>>>>;

#[derive(Parser, Debug)]
#[command(about = "Administración de usuarios desde la terminal")]
struct Args {
    /// Base URL of the API (overrides usuarios.toml and environment)
    #[arg(long)]
    api_url: Option<String>,
    /// last_resolved or latest_issued
    #[arg(long)]
    ordering: Option<ResponseOrdering>,
    /// Answer yes to every delete confirmation
    #[arg(long)]
    yes: bool,
}

struct TerminalInteraction {
    input: SharedInput,
    assume_yes: bool,
}

#[async_trait]
impl UserInteraction for TerminalInteraction {
    async fn confirm(&self, message: &str) -> bool {
        println!("{message} [s/N]");
        if self.assume_yes {
            return true;
        }
        match self.input.lock().await.next_line().await {
            Ok(Some(answer)) => matches!(
                answer.trim().to_lowercase().as_str(),
                "s" | "si" | "sí" | "y" | "yes"
            ),
            _ => false,
        }
    }

    async fn notify(&self, message: &str) {
        println!("{message}");
    }
}

struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, path: &str) {
        println!("-> {path}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.api_url {
        settings.api_base_url = url;
    }
    if let Some(ordering) = args.ordering {
        settings.response_ordering = ordering;
    }

    info!(api = %settings.api_base_url, ordering = ?settings.response_ordering, "starting");
    let api = HttpUsuariosApi::new(&settings.api_base_url)
        .with_context(|| format!("invalid API url {}", settings.api_base_url))?;
    let input: SharedInput = Arc::new(Mutex::new(BufReader::new(stdin()).lines()));
    let controller = UserListController::with_ordering(
        Arc::new(api),
        Arc::new(TerminalInteraction {
            input: input.clone(),
            assume_yes: args.yes,
        }),
        Arc::new(PrintNavigator),
        settings.response_ordering,
    );
    let mut events = controller.subscribe();

    controller.mount().await;
    report_failures(&mut events);
    print!("{}", render_table(&controller.snapshot().await));
    println!("{HELP}");

    loop {
        let line = input
            .lock()
            .await
            .next_line()
            .await
            .context("failed to read stdin")?;
        let Some(line) = line else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::Page(page) => {
                if let Err(err) = controller.paginate(page).await {
                    println!("{err}");
                }
            }
            Command::Filter(raw) => {
                if let Err(err) = controller.handle_filter(&raw).await {
                    println!("{err}");
                }
            }
            Command::Delete(user_id) => {
                controller.handle_delete_user(user_id).await;
            }
            Command::New => {
                controller.redirect_to_create();
                continue;
            }
            Command::Edit(user_id) => {
                controller.redirect_to_edit(user_id);
                continue;
            }
            Command::Show => {}
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }

        report_failures(&mut events);
        print!("{}", render_table(&controller.snapshot().await));
    }

    Ok(())
}

fn report_failures(events: &mut broadcast::Receiver<ListEvent>) {
    for line in drain_failures(events) {
        println!("{line}");
    }
}
