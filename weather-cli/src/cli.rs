use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use std::process::ExitCode;
use weather_core::{AppState, Config, Controller, Key, Outcome, UiEvent, WeatherApiClient};

use crate::terminal::TerminalSurface;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for any location")]
pub struct Cli {
    /// Defaults to `interactive` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show current weather for a location and exit.
    Show {
        /// Location name, e.g. "Paris" or "New York".
        location: String,
    },

    /// Look up locations one after another until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => {
                let mut config = Config::load()?;
                configure(&mut config)?;
            }
            Command::Show { location } => return show(location).await,
            Command::Interactive => interactive().await?,
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let api_key = Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .with_help_message("Get a free key at https://www.weatherapi.com/")
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        return Err(anyhow!("API key must not be empty"));
    }

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn controller(config: &Config) -> anyhow::Result<Controller<TerminalSurface, WeatherApiClient>> {
    let app = AppState::init(TerminalSurface::default(), config.endpoint()?)?;
    Ok(Controller::new(app, WeatherApiClient::new()))
}

/// The surface has already shown any failure, so only the exit code is left.
fn exit_code(outcome: Option<&Outcome>) -> ExitCode {
    if lookup_succeeded(outcome) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn lookup_succeeded(outcome: Option<&Outcome>) -> bool {
    outcome.is_some_and(Outcome::is_displayed)
}

async fn show(location: String) -> anyhow::Result<ExitCode> {
    let mut ctl = controller(&Config::load()?)?;
    ctl.app_mut().surface_mut().set_input(location);

    let outcome = ctl.dispatch(UiEvent::Key(Key::Enter)).await;
    Ok(exit_code(outcome.as_ref()))
}

async fn interactive() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if !config.is_configured() {
        eprintln!("No API key configured yet.");
        configure(&mut config)?;
    }

    let mut ctl = controller(&config)?;

    loop {
        let line = match Text::new("Location:").with_help_message("Esc to quit").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read location"),
        };

        ctl.app_mut().surface_mut().set_input(line);
        ctl.dispatch(UiEvent::Key(Key::Enter)).await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::{DisplayFragment, ValidationError};

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["weather"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_takes_a_location() {
        let cli = Cli::try_parse_from(["weather", "show", "New York"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Show { location }) if location == "New York"));
    }

    #[test]
    fn only_a_displayed_result_counts_as_success() {
        let fragment = DisplayFragment {
            temperature: "18°C".into(),
            place: "Paris, France".into(),
            condition: "Sunny".into(),
            emoji: "☀️",
            observed_at: None,
        };
        let rejected = Outcome::Rejected(ValidationError::EmptyQuery.into());

        assert!(lookup_succeeded(Some(&Outcome::Displayed(fragment))));
        assert!(!lookup_succeeded(Some(&rejected)));
        assert!(!lookup_succeeded(None));
    }

    #[test]
    fn show_requires_a_location() {
        assert!(Cli::try_parse_from(["weather", "show"]).is_err());
    }
}
