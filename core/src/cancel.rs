//! Cancelable wrapper around an in-flight plan call.
//!
//! # Design
//! `CancelablePlan` resolves to `Some(result)` when the call completes and to
//! `None` once canceled. A canceled call delivers neither a plan nor an
//! error. After `cancel()` the inner future is never polled again, and it is
//! dropped together with the `CancelablePlan`, which aborts the request held by
//! the transport.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{AbortHandle, Abortable, Aborted, BoxFuture};

use crate::error::ApiError;
use crate::types::PlanResponse;

/// Detached handle that cancels a `CancelablePlan` from elsewhere, e.g. a
/// signal handler or another task.
#[derive(Debug, Clone)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    /// Idempotent; has no effect once the plan already resolved.
    pub fn cancel(&self) {
        self.0.abort();
    }

    pub fn is_canceled(&self) -> bool {
        self.0.is_aborted()
    }
}

/// Future returned by `PlanApi::plan`.
#[must_use = "futures do nothing unless polled"]
pub struct CancelablePlan {
    inner: Abortable<BoxFuture<'static, Result<PlanResponse, ApiError>>>,
    handle: AbortHandle,
}

impl CancelablePlan {
    pub fn new<F>(call: F) -> Self
    where
        F: Future<Output = Result<PlanResponse, ApiError>> + Send + 'static,
    {
        let (handle, registration) = AbortHandle::new_pair();
        Self {
            inner: Abortable::new(Box::pin(call), registration),
            handle,
        }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_canceled(&self) -> bool {
        self.handle.is_aborted()
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.handle.clone())
    }
}

impl Future for CancelablePlan {
    type Output = Option<Result<PlanResponse, ApiError>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.inner).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(Some(result)),
            Poll::Ready(Err(Aborted)) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl std::fmt::Debug for CancelablePlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelablePlan")
            .field("canceled", &self.is_canceled())
            .finish()
    }
}
