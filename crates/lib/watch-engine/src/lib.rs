//! Watch engine.
//!
//! Runs every account's watcher on its own OS thread with its own
//! single-threaded runtime, so a stuck or panicking account never affects
//! the others, and reports watchers that die for good.

use std::{convert::Infallible, sync::Arc, thread};

use supervisor::{Outcome, PanicPolicy, SupervisorEvent};
use tokio::sync::mpsc;

/// A watcher that stopped for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fatal {
    /// Name of the watcher, usually `username@hostname`.
    pub name: String,

    /// What happened.
    pub reason: String,
}

/// Errors returned while spawning watchers.
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    /// The OS refused to create a thread.
    #[error("unable to spawn the thread for {name}: {source}")]
    Thread {
        /// Name of the watcher.
        name: String,

        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Parameters for spawning watchers.
pub struct SpawnParams<'a, Item, Name, Work> {
    /// One entry per watcher.
    pub items: &'a [Item],

    /// Produces the display and thread name of an item.
    pub name: Name,

    /// Produces the watch future for an item; called again on restart.
    pub work: Work,

    /// What to do when a watcher panics.
    pub policy: PanicPolicy,
}

/// Handle to the running watchers.
#[derive(Debug)]
pub struct Engine {
    /// Names of the spawned watchers, in spawn order.
    names: Vec<String>,

    /// Receives watchers that stopped for good.
    fatal_rx: mpsc::UnboundedReceiver<Fatal>,
}

impl Engine {
    /// Names of the spawned watchers, in spawn order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Wait for the next watcher to stop for good.
    ///
    /// Returns `None` once every watcher thread is gone.
    pub async fn next_fatal(&mut self) -> Option<Fatal> {
        self.fatal_rx.recv().await
    }
}

/// Spawn one thread per item.
///
/// Threads are started in item order; each starts watching right away.
pub fn spawn_watchers<Item, Name, Work, WorkFut>(
    params: SpawnParams<'_, Item, Name, Work>,
) -> Result<Engine, SpawnError>
where
    Item: Clone + Send + 'static,
    Name: FnMut(&Item) -> String,
    Work: Fn(&Item) -> WorkFut + Send + Sync + 'static,
    WorkFut: Future<Output = Infallible>,
{
    let SpawnParams {
        items,
        mut name,
        work,
        policy,
    } = params;

    let work = Arc::new(work);
    let (fatal_tx, fatal_rx) = mpsc::unbounded_channel();
    let mut names = Vec::with_capacity(items.len());

    for item in items {
        let watcher_name = (name)(item);
        let item = item.clone();
        let work = Arc::clone(&work);
        let fatal_tx = fatal_tx.clone();
        let thread_name = watcher_name.clone();

        thread::Builder::new()
            .name(format!("watch:{watcher_name}"))
            .spawn(move || {
                let reason = match supervise(&thread_name, &item, &*work, policy) {
                    Ok(reason) => reason,
                    Err(error) => format!("unable to start the runtime: {error}"),
                };
                tracing::error!(watcher = %thread_name, %reason, "watcher stopped");
                let _ = fatal_tx.send(Fatal {
                    name: thread_name,
                    reason,
                });
            })
            .map_err(|source| SpawnError::Thread {
                name: watcher_name.clone(),
                source,
            })?;

        tracing::debug!(watcher = %watcher_name, "spawned");
        names.push(watcher_name);
    }

    Ok(Engine { names, fatal_rx })
}

/// Run one watcher to its end on the current thread.
///
/// Returns the reason it ended.
fn supervise<Item, Work, WorkFut>(
    name: &str,
    item: &Item,
    work: &Work,
    policy: PanicPolicy,
) -> Result<String, std::io::Error>
where
    Work: Fn(&Item) -> WorkFut,
    WorkFut: Future<Output = Infallible>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(supervisor::run(supervisor::Params {
        work: || work(item),
        notifier: |event| match event {
            SupervisorEvent::Started => {
                tracing::debug!(watcher = %name, "watcher started");
            }
            SupervisorEvent::Panicked {
                message,
                next_retry_in: Some(delay),
            } => {
                tracing::error!(watcher = %name, %message, ?delay, "watcher panicked, restarting");
            }
            SupervisorEvent::Panicked {
                message,
                next_retry_in: None,
            } => {
                tracing::error!(watcher = %name, %message, "watcher panicked");
            }
        },
        sleep: tokio::time::sleep,
        policy,
    }));

    Ok(match outcome {
        Outcome::Done(never) => match never {},
        Outcome::Panicked { message } => format!("panicked: {message}"),
    })
}
