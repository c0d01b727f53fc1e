use std::future::Future;

use anyhow::Context;
use plan_core::{ApiError, CancelablePlan, PlanResponse};

/// Await `plan` unless `interrupt` fires first, in which case the plan is
/// canceled and `None` is returned. A failure to set up the interrupt source
/// is an error, not a cancel.
pub async fn plan_or_interrupt<S>(
    plan: CancelablePlan,
    interrupt: S,
) -> anyhow::Result<Option<Result<PlanResponse, ApiError>>>
where
    S: Future<Output = std::io::Result<()>>,
{
    let cancel = plan.cancel_handle();
    tokio::select! {
        outcome = plan => Ok(outcome),
        signal = interrupt => {
            cancel.cancel();
            signal.context("installing Ctrl-C handler")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::{pending, ready};
    use std::io;

    use serde_json::json;

    use super::*;

    fn pending_plan() -> CancelablePlan {
        CancelablePlan::new(pending())
    }

    #[tokio::test]
    async fn completed_plan_is_delivered() {
        let plan = CancelablePlan::new(ready(Ok(PlanResponse::new(json!({"itineraries": [{}]})))));
        let outcome = plan_or_interrupt(plan, pending()).await.unwrap();
        assert_eq!(outcome.unwrap().unwrap().itineraries().len(), 1);
    }

    #[tokio::test]
    async fn interrupt_cancels_the_plan() {
        let outcome = plan_or_interrupt(pending_plan(), ready(Ok(()))).await.unwrap();
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn signal_setup_failure_is_an_error_not_a_cancel() {
        let failed = ready(Err(io::Error::new(io::ErrorKind::Other, "signals unavailable")));
        let err = plan_or_interrupt(pending_plan(), failed).await.unwrap_err();
        assert!(err.to_string().contains("Ctrl-C handler"));
    }
}
