//! Operator CLI for the member administration backend.
//!
//! Lists, shows, edits and deletes members through the REST API, and
//! manages the locally stored session and theme preference.

mod cli;
mod render;

use anyhow::Context;
use clap::Parser;

use member_admin_client::listing::render_members;
use member_admin_client::{HttpGateway, MemberEditor, MemberGateway};
use member_admin_core::config::AdminConfig;
use member_admin_core::model::RowField;
use member_admin_core::notification::Dialog;
use member_admin_core::session::{
    SessionStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_EMAIL_KEY, USER_ROLE_KEY,
};
use member_admin_core::theme::ThemePreference;
use member_admin_core::viewer::DetailViewer;

use cli::{Cli, Commands, SessionAction, ThemeAction};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let config = AdminConfig {
        base_url: cli.base_url,
        members_path: cli.members_path,
        request_timeout_ms: cli.request_timeout_ms,
        session_file: cli.session_file,
        require_phone: cli.require_phone,
        use_system_proxy: !cli.no_proxy,
    };

    let mut session = SessionStore::open(&config.session_file)
        .with_context(|| format!("Failed to open session {}", config.session_file.display()))?;

    match cli.command {
        Commands::List => {
            let gateway = gateway(&config, &session)?;
            let members = gateway.list().await.context("Failed to load members")?;
            print!("{}", render_members(&members));
        }
        Commands::Show { url } => {
            let gateway = gateway(&config, &session)?;
            let mut viewer = DetailViewer::new();
            viewer.open(url.as_str());
            let target = viewer.current_url().unwrap_or(url.as_str());
            let member = gateway.fetch(target).await.context("Failed to load member")?;
            render::print_member(&viewer, &member);
        }
        Commands::Edit {
            url,
            name,
            email,
            phone,
            role,
        } => {
            let gateway = gateway(&config, &session)?;
            let current = gateway.fetch(&url).await.context("Failed to load member")?;
            let mut editor = MemberEditor::new(gateway, config.validation_policy());
            editor.insert_row(url.as_str(), current.to_row_values());
            editor.begin_edit(&url)?;

            let changes = [
                (RowField::Name, name),
                (RowField::Email, email),
                (RowField::PhoneNumber, phone),
                (RowField::Role, role),
            ];
            for (field, value) in changes {
                if let Some(value) = value {
                    editor.edit_field(&url, field, value)?;
                }
            }

            let result = editor.save(&url).await;
            render::print_dialog(editor.surface().current());
            result?;
        }
        Commands::Delete { url, yes } => {
            let gateway = gateway(&config, &session)?;
            let values = match gateway.fetch(&url).await {
                Ok(member) => member.to_row_values(),
                Err(e) => {
                    tracing::warn!("Could not load {} before delete: {}", url, e);
                    Default::default()
                }
            };
            let mut editor = MemberEditor::new(gateway, config.validation_policy());
            editor.insert_row(url.as_str(), values);
            editor.request_delete(&url)?;

            let prompt = match editor.surface().current() {
                Some(Dialog::ConfirmDelete(c)) => c.prompt(),
                _ => format!("Delete {}?", url),
            };
            let accepted = yes || render::ask_confirmation(&prompt)?;
            if !accepted {
                editor.cancel_delete();
                println!("Delete cancelled.");
                return Ok(());
            }

            let result = editor.confirm_delete().await;
            render::print_dialog(editor.surface().current());
            result?;
        }
        Commands::Theme { action } => {
            let mut preference = ThemePreference::new(&mut session);
            let theme = match action {
                ThemeAction::Show => preference.current(),
                ThemeAction::Toggle => preference.toggle()?,
            };
            println!("{} {} ({})", theme.icon(), theme, theme.toggle_label());
        }
        Commands::Session { action } => match action {
            SessionAction::Show => {
                for (key, value) in session.entries() {
                    let shown = if key == ACCESS_TOKEN_KEY || key == REFRESH_TOKEN_KEY {
                        render::mask(value)
                    } else {
                        value.to_string()
                    };
                    println!("{}: {}", key, shown);
                }
            }
            SessionAction::Login {
                access_token,
                refresh_token,
                email,
                role,
            } => {
                session.set(ACCESS_TOKEN_KEY, access_token);
                if let Some(refresh_token) = refresh_token {
                    session.set(REFRESH_TOKEN_KEY, refresh_token);
                }
                if let Some(email) = email {
                    session.set(USER_EMAIL_KEY, email);
                }
                if let Some(role) = role {
                    session.set(USER_ROLE_KEY, role);
                }
                session.save()?;
                println!("Session stored in {}", session.path().display());
            }
            SessionAction::Logout => {
                session.clear_auth();
                session.save()?;
                println!("Logged out.");
            }
        },
    }

    Ok(())
}

fn gateway(config: &AdminConfig, session: &SessionStore) -> anyhow::Result<HttpGateway> {
    let token = session.access_token().map(str::to_string);
    if token.is_none() {
        tracing::debug!("No access token stored; requests are unauthenticated");
    }
    Ok(HttpGateway::new(config.clone(), token)?)
}
