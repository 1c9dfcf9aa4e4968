//! CLI utility for storing a keyring password.

use color_eyre::eyre::{Context, bail, eyre};
use std::io::Read;

/// Store a keyring password for a configured account.
#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let [address] = args.as_slice() else {
        bail!("Usage: keyring-set <username@hostname>");
    };
    let (username, hostname) = address
        .rsplit_once('@')
        .ok_or_else(|| eyre!("Expected <username@hostname>, got '{address}'"))?;

    let config = config_load::with_default_env_var().await?;

    let account = config
        .payload
        .accounts
        .iter()
        .find(|account| account.hostname == hostname && account.username == username)
        .ok_or_else(|| eyre!("No account '{address}' in {}", config.path.display()))?;
    if account.password.as_deref().is_some_and(|password| !password.is_empty()) {
        eprintln!(
            "Note: the config sets a password for '{address}', \
             the keyring entry will not be used"
        );
    }

    let password = read_password_from_stdin()?;
    keyring_password::set(&account.hostname, &account.username, &password)
        .wrap_err("Failed to store password in keyring")?;

    println!(
        "Stored password for account '{}' (service '{}', account '{}')",
        address, account.hostname, account.username
    );

    Ok(())
}

/// Read a password from stdin, trimming trailing newlines.
fn read_password_from_stdin() -> color_eyre::eyre::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .wrap_err("Failed to read password from stdin")?;

    let password = input.trim_end_matches(['\n', '\r']).to_string();
    if password.is_empty() {
        bail!("No password provided on stdin");
    }

    Ok(password)
}
