use anyhow::Result;
use std::process::ExitCode;
use std::sync::Arc;

use translator_client::{ClientConfig, GeminiConnector};
use translator_core::modules::config::FilePreferenceStore;
use translator_core::{render, Direction, Host, TranslationFlow, ViewState};

use crate::cli::{ConfigCommands, TranslateArgs};
use crate::config_commands;
use crate::terminal::{print_view, ConsoleNotifier, TerminalSelection};

pub async fn handle_translate(direction: Direction, args: TranslateArgs) -> Result<ExitCode> {
    let store = FilePreferenceStore::from_default_location()?;
    let connector = GeminiConnector::new(ClientConfig {
        timeout_secs: args.timeout,
        ..ClientConfig::default()
    });
    let host = Host::new(
        Arc::new(store),
        Arc::new(TerminalSelection::new(args.text)),
        Arc::new(ConsoleNotifier::new(args.quiet)),
    )
    .with_connector(Arc::new(connector));

    let mut flow = TranslationFlow::new(direction, host);
    let state = flow.start().await;
    let view = render(direction, &state);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else if args.raw {
        if let Some(text) = state.result_text() {
            println!("{}", text);
        }
    } else {
        print_view(&view);
    }

    Ok(exit_code(&state))
}

pub fn handle_config_command(cmd: ConfigCommands) -> Result<()> {
    let store = FilePreferenceStore::from_default_location()?;
    match cmd {
        ConfigCommands::Show { json } => config_commands::show_config(&store, json),
        ConfigCommands::Get { key } => config_commands::get_config_value(&store, &key),
        ConfigCommands::Set { key, value } => {
            config_commands::set_config_value(&store, &key, &value)
        }
        ConfigCommands::Path => config_commands::show_path(&store),
    }
}

fn exit_code(state: &ViewState) -> ExitCode {
    match state {
        ViewState::Result(_) => ExitCode::SUCCESS,
        ViewState::Loading | ViewState::Error(_) => ExitCode::FAILURE,
    }
}
