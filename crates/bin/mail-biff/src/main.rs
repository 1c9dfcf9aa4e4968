//! Main entrypoint.

use std::{process::ExitCode, sync::Arc};

use color_eyre::eyre::{Context as _, eyre};
use config_bringup::Account;
use notify_core::{APP_NAME, Notifier, NotifyRequest};
use supervisor::PanicPolicy;
use tracing_subscriber::EnvFilter;

/// Watch every configured account until killed.
///
/// Exits non-zero when an account has no password or a watcher dies.
#[tokio::main]
async fn main() -> color_eyre::eyre::Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let policy = panic_policy()?;
    let notifier: Arc<dyn Notifier> = Arc::new(notify_desktop::DesktopNotifier);

    let config = config_load::with_default_env_var().await?;
    tracing::info!(
        path = %config.path.display(),
        accounts = config.payload.accounts.len(),
        "loaded config"
    );
    let config = config.payload;

    let bringup = tokio::task::spawn_blocking(move || {
        config_bringup::bringup_accounts(&config, keyring_password::lookup)
    })
    .await
    .wrap_err("credential lookup task failed")?;

    let accounts = match bringup {
        Ok(accounts) => accounts,
        Err(error) => {
            tracing::error!(%error, "configuration error");
            notifier.notify(NotifyRequest::new(APP_NAME, error.to_string(), APP_NAME));
            return Ok(ExitCode::FAILURE);
        }
    };

    if accounts.is_empty() {
        tracing::warn!("no accounts configured, nothing to watch");
        return Ok(ExitCode::SUCCESS);
    }

    let mut engine = watch_engine::spawn_watchers(watch_engine::SpawnParams {
        items: &accounts,
        name: Account::address,
        work: {
            let notifier = Arc::clone(&notifier);
            move |account: &Account| {
                mail_watcher::Watcher::new(
                    identity(account),
                    imap_mailbox::ImapConnector::new(account.clone()),
                    Arc::clone(&notifier),
                )
                .run()
            }
        },
        policy,
    })?;

    tracing::info!(watchers = engine.names().len(), ?policy, "watching");

    let fatal = engine
        .next_fatal()
        .await
        .ok_or_else(|| eyre!("all watchers stopped"))?;

    notifier.notify(NotifyRequest::new(
        format!("[{}] watcher stopped", fatal.name),
        fatal.reason,
        fatal.name,
    ));

    Ok(ExitCode::FAILURE)
}

/// What the watcher needs to know about an account.
fn identity(account: &Account) -> mail_watcher::Identity {
    mail_watcher::Identity {
        hostname: account.hostname.clone(),
        username: account.username.clone(),
        mailbox: account.mailbox.clone(),
        label: account.label.clone(),
        idle_timeout: account.idle_timeout,
    }
}

/// Read the panic policy from the environment.
fn panic_policy() -> color_eyre::eyre::Result<PanicPolicy> {
    match std::env::var(supervisor::POLICY_ENV_VAR) {
        Ok(value) => value
            .parse()
            .wrap_err_with(|| format!("invalid {}", supervisor::POLICY_ENV_VAR)),
        Err(std::env::VarError::NotPresent) => Ok(PanicPolicy::default()),
        Err(error) => {
            Err(error).wrap_err_with(|| format!("invalid {}", supervisor::POLICY_ENV_VAR))
        }
    }
}
