//! GreenMail container helpers.

use testcontainers::{
    ContainerAsync, GenericImage, ImageExt as _, TestcontainersError,
    core::{IntoContainerPort as _, WaitFor},
    runners::AsyncRunner as _,
};

/// Plain-text IMAP port inside the GreenMail container.
pub const IMAP_PORT: u16 = 3143;

/// A running GreenMail server with a single user.
pub struct MailServer {
    /// Keeps the container alive.
    _container: ContainerAsync<GenericImage>,

    /// Host the IMAP port is reachable on.
    pub host: String,

    /// Mapped IMAP port.
    pub port: u16,

    /// Login of the provisioned user.
    pub user: String,

    /// Password of the provisioned user.
    pub password: String,
}

impl MailServer {
    /// Start GreenMail with one user.
    pub async fn start(user: &str, password: &str) -> Result<Self, TestcontainersError> {
        let container = GenericImage::new("greenmail/standalone", "latest")
            .with_exposed_port(IMAP_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stdout(
                "Starting GreenMail API server at",
            ))
            .with_env_var("GREENMAIL_USERS", format!("{user}:{password}"))
            .start()
            .await?;

        let host = container.get_host().await?.to_string();
        let port = container.get_host_port_ipv4(IMAP_PORT).await?;

        Ok(Self {
            _container: container,
            host,
            port,
            user: user.to_owned(),
            password: password.to_owned(),
        })
    }

    /// Log in, retrying while the server warms up.
    pub async fn login(
        &self,
    ) -> Result<async_imap::Session<tokio::net::TcpStream>, std::io::Error> {
        crate::login_with_retry(&self.host, self.port, &self.user, &self.password).await
    }
}
