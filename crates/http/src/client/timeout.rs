use crate::client::TransportError;
use futures::future::{self, Either};
use std::future::Future;
use std::pin::pin;
use std::time::Duration;

/// Race `fut` against a timer; the browser fetch API has no native deadline
pub(crate) async fn with_timeout<F>(budget: Duration, fut: F) -> Result<F::Output, TransportError>
where
    F: Future,
{
    let fut = pin!(fut);
    let timer = pin!(sleep(budget));

    match future::select(fut, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(TransportError::Timeout(budget)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}
