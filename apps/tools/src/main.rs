use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use session_core::{navigation_items, AppState, Session, SessionEvent};
use shared::{
    cases::sample_feed,
    domain::{Role, ViewId},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "medcases-tools", about = "Inspect MedCases session behavior")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply steps (`login:<role>:<name>`, `logout`, `navigate:<view>`) to a
    /// fresh state and print the outcome of each.
    Replay {
        #[arg(required = true)]
        steps: Vec<String>,
        /// Print the final state as JSON instead of one line per step.
        #[arg(long)]
        json: bool,
    },
    /// Print the navigation table for a role (logged out if omitted).
    Nav {
        #[arg(long)]
        role: Option<Role>,
    },
    /// Print the sample case feed.
    Feed,
}

#[derive(Debug, Serialize)]
struct ReplayReport<'a> {
    session: &'a Session,
    requested: ViewId,
    rendered: Option<ViewId>,
}

impl<'a> ReplayReport<'a> {
    fn of(state: &'a AppState) -> Self {
        Self {
            session: state.session(),
            requested: state.requested(),
            rendered: state.rendered_view(),
        }
    }
}

fn parse_step(step: &str) -> Result<SessionEvent> {
    let mut parts = step.splitn(3, ':');
    let kind = parts.next().unwrap_or_default();
    match kind {
        "login" => {
            let role = parts
                .next()
                .with_context(|| format!("step '{step}' is missing a role"))?
                .parse::<Role>()?;
            let name = parts.next().unwrap_or_default().trim();
            if name.is_empty() {
                bail!("step '{step}' is missing a display name");
            }
            Ok(SessionEvent::login(role, name))
        }
        "logout" => Ok(SessionEvent::Logout),
        "navigate" => {
            let view = parts
                .next()
                .with_context(|| format!("step '{step}' is missing a view"))?
                .parse::<ViewId>()?;
            Ok(SessionEvent::navigate(view))
        }
        other => bail!("unknown step kind '{other}'"),
    }
}

fn describe(state: &AppState) -> String {
    let who = match state.session().role() {
        Some(role) => format!("{} ({role})", state.session().display_name()),
        None => "anonymous".to_string(),
    };
    let rendered = state
        .rendered_view()
        .map(|view| view.to_string())
        .unwrap_or_else(|| "none".to_string());
    format!(
        "session={who} requested={} rendered={rendered}",
        state.requested()
    )
}

fn replay(steps: &[String]) -> Result<(AppState, Vec<String>)> {
    let events = steps
        .iter()
        .map(|step| parse_step(step))
        .collect::<Result<Vec<_>>>()?;

    let mut state = AppState::new();
    let mut lines = Vec::with_capacity(events.len());
    for (step, event) in steps.iter().zip(events) {
        let transition = state.dispatch(event);
        tracing::debug!(step = %step, ?transition, "applied step");
        lines.push(format!("{step:<28} {}", describe(&state)));
    }
    Ok((state, lines))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Replay { steps, json } => {
            let (state, lines) = replay(&steps)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ReplayReport::of(&state))?
                );
            } else {
                for line in lines {
                    println!("{line}");
                }
            }
        }
        Command::Nav { role } => {
            println!("{}", serde_json::to_string_pretty(&navigation_items(role))?);
        }
        Command::Feed => {
            println!("{}", serde_json::to_string_pretty(&sample_feed(Utc::now()))?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|step| step.to_string()).collect()
    }

    #[test]
    fn parses_every_step_kind() {
        assert_eq!(
            parse_step("login:doctor:Dr. A: Smith").expect("login"),
            SessionEvent::login(Role::Doctor, "Dr. A: Smith")
        );
        assert_eq!(parse_step("logout").expect("logout"), SessionEvent::Logout);
        assert_eq!(
            parse_step("navigate:Profile").expect("navigate"),
            SessionEvent::navigate(ViewId::Profile)
        );
    }

    #[test]
    fn rejects_malformed_steps() {
        assert!(parse_step("login:doctor").is_err());
        assert!(parse_step("login:nurse:Pat").is_err());
        assert!(parse_step("navigate").is_err());
        assert!(parse_step("navigate:settings").is_err());
        assert!(parse_step("jump").is_err());
    }

    #[test]
    fn replay_reports_hidden_upload_for_students() {
        let (state, lines) =
            replay(&steps(&["login:student:Alex", "navigate:upload"])).expect("replay");
        assert_eq!(state.rendered_view(), None);
        assert!(lines[1].ends_with("requested=upload rendered=none"));
    }

    #[test]
    fn replay_stops_before_applying_anything_on_bad_step() {
        assert!(replay(&steps(&["login:doctor:Dr. A", "navigate:nowhere"])).is_err());
    }

    #[test]
    fn report_serializes_rendered_view() {
        let (state, _) = replay(&steps(&["logout", "navigate:feed"])).expect("replay");
        let value = serde_json::to_value(ReplayReport::of(&state)).expect("json");
        assert_eq!(value["requested"], "feed");
        assert_eq!(value["rendered"], "auth");
    }
}
