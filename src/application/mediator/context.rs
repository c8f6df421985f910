// src/application/mediator/context.rs
use std::time::Duration;
use tokio::{sync::watch, time::Instant};
use uuid::Uuid;

/// Per-request values threaded explicitly through dispatch.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: Uuid,
    cancellation: Cancellation,
}

impl RequestContext {
    pub const fn new(request_id: Uuid, cancellation: Cancellation) -> Self {
        Self {
            request_id,
            cancellation,
        }
    }

    /// Fresh request id and a cancellation that never fires.
    pub fn detached() -> Self {
        Self::new(Uuid::new_v4(), Cancellation::never())
    }

    pub const fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub const fn cancellation(&self) -> &Cancellation {
        &self.cancellation
    }
}

/// Read side of a cancellation signal. Fires when the paired
/// [`CancellationHandle`] is cancelled or the optional deadline passes.
#[derive(Debug, Clone)]
pub struct Cancellation {
    signal: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

/// Write side of a [`Cancellation`].
#[derive(Debug)]
pub struct CancellationHandle {
    sender: watch::Sender<bool>,
}

impl CancellationHandle {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl Cancellation {
    pub const fn never() -> Self {
        Self {
            signal: None,
            deadline: None,
        }
    }

    pub fn new() -> (CancellationHandle, Self) {
        let (sender, receiver) = watch::channel(false);
        (
            CancellationHandle { sender },
            Self {
                signal: Some(receiver),
                deadline: None,
            },
        )
    }

    /// A cancellation that fires once `timeout` has elapsed. A timeout past
    /// the clock's range leaves only the handle able to cancel.
    pub fn with_timeout(timeout: Duration) -> (CancellationHandle, Self) {
        let (handle, mut cancellation) = Self::new();
        cancellation.deadline = Instant::now().checked_add(timeout);
        (handle, cancellation)
    }

    pub fn is_cancelled(&self) -> bool {
        let signalled = self.signal.as_ref().is_some_and(|rx| *rx.borrow());
        let expired = self.deadline.is_some_and(|d| Instant::now() >= d);
        signalled || expired
    }

    /// Resolves once cancellation fires; pending forever for [`Cancellation::never`].
    pub async fn cancelled(&self) {
        let signal = async {
            match self.signal.clone() {
                Some(mut rx) => {
                    // A dropped handle can no longer cancel.
                    let closed = rx.wait_for(|cancelled| *cancelled).await.is_err();
                    if closed {
                        std::future::pending::<()>().await;
                    }
                }
                None => std::future::pending::<()>().await,
            }
        };
        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            () = signal => {}
            () = deadline => {}
        }
    }
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::never()
    }
}
