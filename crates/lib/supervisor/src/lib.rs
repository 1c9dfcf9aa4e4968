//! Lightweight async harness running work that must never end, with a
//! choice of what to do when it panics.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::future::Future;
use core::time::Duration;
use futures_util::FutureExt;

/// The panic payload type alias.
type PanicPayload = alloc::boxed::Box<dyn core::any::Any + Send + 'static>;

/// Environment variable selecting the [`PanicPolicy`].
pub const POLICY_ENV_VAR: &str = "MAIL_BIFF_PANIC_POLICY";

/// Pause before restarting panicked work under [`PanicPolicy::Restart`].
pub const RESTART_DELAY: Duration = Duration::from_secs(5);

/// What to do when the supervised work panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanicPolicy {
    /// Stop and report the panic to the caller.
    #[default]
    FailFast,

    /// Run the work again after a pause.
    Restart {
        /// The pause before the next attempt.
        delay: Duration,
    },
}

/// Error parsing a [`PanicPolicy`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl core::fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "unknown panic policy {:?}, expected \"fail-fast\" or \"restart\"",
            self.0
        )
    }
}

impl core::error::Error for UnknownPolicy {}

impl core::str::FromStr for PanicPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fail-fast" => Ok(Self::FailFast),
            "restart" => Ok(Self::Restart {
                delay: RESTART_DELAY,
            }),
            other => Err(UnknownPolicy(other.to_owned())),
        }
    }
}

/// Event sent to the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupervisorEvent {
    /// The work is about to be invoked.
    Started,

    /// The work panicked.
    Panicked {
        /// The panic message, if the payload carried one.
        message: String,

        /// The time to wait before the next attempt; `None` if the work
        /// will not be restarted.
        next_retry_in: Option<Duration>,
    },
}

/// How supervision ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The work completed.
    Done(T),

    /// The work panicked and the policy said to stop.
    Panicked {
        /// The panic message.
        message: String,
    },
}

/// Parameters for `run`. Generic over the work, notifier and sleep closure
/// types.
pub struct Params<Work, Notifier, Sleep> {
    /// The work to run. Called again for every restart.
    pub work: Work,

    /// Notifier for events.
    pub notifier: Notifier,

    /// Sleep timer.
    pub sleep: Sleep,

    /// What to do on panic.
    pub policy: PanicPolicy,
}

/// Run the work, restarting it after panics as long as the policy allows.
pub async fn run<Work, WorkFut, Notifier, Sleep, SleepFut, Value>(
    mut params: Params<Work, Notifier, Sleep>,
) -> Outcome<Value>
where
    Work: FnMut() -> WorkFut,
    WorkFut: Future<Output = Value>,
    Notifier: FnMut(SupervisorEvent),
    Sleep: FnMut(Duration) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    loop {
        (params.notifier)(SupervisorEvent::Started);

        // Run the work and catch panics coming from the future.
        let work_future = core::panic::AssertUnwindSafe(async { (params.work)().await });
        let panic_payload = match work_future.catch_unwind().await {
            Ok(value) => return Outcome::Done(value),
            Err(panic_payload) => panic_payload,
        };

        let message = panic_message(&panic_payload);

        let delay = match params.policy {
            PanicPolicy::FailFast => {
                (params.notifier)(SupervisorEvent::Panicked {
                    message: message.clone(),
                    next_retry_in: None,
                });
                return Outcome::Panicked { message };
            }
            PanicPolicy::Restart { delay } => delay,
        };

        (params.notifier)(SupervisorEvent::Panicked {
            message,
            next_retry_in: Some(delay),
        });

        (params.sleep)(delay).await;
    }
}

/// Extract the message from a panic payload.
pub fn panic_message(payload: &PanicPayload) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_owned()
    }
}
