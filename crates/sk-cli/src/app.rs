use crate::{
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliErrorResult},
    logger,
};

use sk_config::Config;
use sk_core::{ExperienceLevel, RegisterRequest, SessionEvent, SessionState, UserUpdate};
use sk_session::{SessionController, SessionError};

use std::collections::BTreeSet;

use log::info;
use serde_json::{Value, json};
use tokio::sync::broadcast;

/// Load configuration, start logging and run one command.
pub async fn run(cli: Cli) -> CliErrorResult<Value> {
    let config = load_config(&cli)?;

    logger::initialize(
        config.logging.level,
        config.log_file_path(),
        config.logging.colored,
    )?;

    info!("Starting sk v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let session = SessionController::from_config(&config)?;
    let mut events = session.subscribe_events();

    let result = execute(&session, cli.command).await;
    report_events(&mut events);

    result
}

fn load_config(cli: &Cli) -> CliErrorResult<Config> {
    let mut config = match cli.config_dir {
        Some(ref dir) => Config::load_in(dir)?,
        None => Config::load()?,
    };

    if let Some(ref server) = cli.server {
        config.api.base_url = server.clone();
    }

    config.validate()?;
    Ok(config)
}

async fn execute(session: &SessionController, command: Commands) -> CliErrorResult<Value> {
    match command {
        Commands::Login { email, password } => {
            let user = session.login(&email, &password).await?;
            Ok(serde_json::to_value(user)?)
        }

        Commands::Register {
            first_name,
            last_name,
            email,
            password,
        } => {
            let registration = RegisterRequest {
                first_name,
                last_name,
                email,
                password,
            };
            let user = session.register(&registration).await?;
            Ok(serde_json::to_value(user)?)
        }

        Commands::Logout => {
            let state = session.logout();
            Ok(state_json(&state))
        }

        Commands::Whoami => match session.initialize().await {
            SessionState::Authenticated(user) => Ok(serde_json::to_value(user)?),
            _ => Err(SessionError::not_authenticated().into()),
        },

        Commands::Refresh => {
            session.refresh().await?;
            Ok(json!({ "refreshed": true }))
        }

        Commands::Update {
            first_name,
            last_name,
            email,
            skills,
            interests,
            experience_level,
        } => {
            let update = build_update(
                first_name,
                last_name,
                email,
                skills,
                interests,
                experience_level.as_deref(),
            )?;

            session.initialize().await;
            let user = session.update_user(&update).await?;
            Ok(serde_json::to_value(user)?)
        }

        Commands::Get { path } => {
            let value = session
                .client()
                .get_json(&api_path(&path))
                .await
                .map_err(SessionError::from)?;
            Ok(value)
        }

        Commands::Post { path, data } => {
            let body = request_body(data.as_deref())?;
            let value = session
                .client()
                .post_json(&api_path(&path), &body)
                .await
                .map_err(SessionError::from)?;
            Ok(value)
        }

        Commands::Put { path, data } => {
            let body = request_body(data.as_deref())?;
            let value = session
                .client()
                .put_json(&api_path(&path), &body)
                .await
                .map_err(SessionError::from)?;
            Ok(value)
        }
    }
}

pub(crate) fn request_body(data: Option<&str>) -> CliErrorResult<Value> {
    match data {
        Some(raw) => serde_json::from_str(raw).map_err(CliError::body),
        None => Ok(json!({})),
    }
}

pub(crate) fn build_update(
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    skills: Vec<String>,
    interests: Vec<String>,
    experience_level: Option<&str>,
) -> CliErrorResult<UserUpdate> {
    let experience_level = experience_level
        .map(str::parse::<ExperienceLevel>)
        .transpose()?;

    Ok(UserUpdate {
        email,
        first_name,
        last_name,
        skills: non_empty_set(skills),
        interests: non_empty_set(interests),
        experience_level,
    })
}

fn non_empty_set(values: Vec<String>) -> Option<BTreeSet<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.into_iter().collect())
    }
}

/// Accept `recommendations` as well as `/recommendations`
pub(crate) fn api_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

pub(crate) fn state_json(state: &SessionState) -> Value {
    match state {
        SessionState::Error { message } => json!({ "state": state.label(), "message": message }),
        _ => json!({ "state": state.label() }),
    }
}

/// Print redirect signals raised while the command ran
fn report_events(events: &mut broadcast::Receiver<SessionEvent>) {
    while let Ok(event) = events.try_recv() {
        if let SessionEvent::Invalidated {
            redirect_to,
            reason,
        } = event
        {
            eprintln!("Session invalidated ({reason}); sign in again at {redirect_to}");
        }
    }
}
