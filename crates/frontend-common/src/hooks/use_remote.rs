//! Fetch-on-mount hook for the list screens

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use vera_http::ClientError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Result of a remote read
#[derive(Debug)]
pub enum Remote<T> {
    Loading,
    Ready(Rc<T>),
    Failed(String),
}

impl<T> Clone for Remote<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Loading => Self::Loading,
            Self::Ready(value) => Self::Ready(Rc::clone(value)),
            Self::Failed(message) => Self::Failed(message.clone()),
        }
    }
}

impl<T> PartialEq for Remote<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Loading, Self::Loading) => true,
            (Self::Ready(a), Self::Ready(b)) => Rc::ptr_eq(a, b),
            (Self::Failed(a), Self::Failed(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Remote<T> {
    fn settle(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => Self::Ready(Rc::new(value)),
            // A lost session redirects to login; keep the spinner until it does
            Err(e) if e.is_session_lost() => Self::Loading,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Bumped on every reload; each bump reruns the fetch effect
#[derive(Debug, Default, PartialEq)]
struct Generation(u32);

impl Reducible for Generation {
    type Action = ();

    fn reduce(self: Rc<Self>, (): ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

pub struct RemoteHandle<T> {
    pub data: Remote<T>,
    /// Refetch with the same inputs, keeping current data on screen meanwhile
    pub reload: Callback<()>,
}

/// Run `fetch` whenever `deps` change or `reload` is emitted.
///
/// Responses that arrive after the component unmounted, or after `deps`
/// moved on, are dropped.
#[hook]
pub fn use_remote<T, D, F, Fut>(deps: D, fetch: F) -> RemoteHandle<T>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let data = use_state(|| Remote::Loading);
    let generation = use_reducer(Generation::default);

    {
        let data = data.clone();
        use_effect_with(deps.clone(), move |_| data.set(Remote::Loading));
    }

    {
        let data = data.clone();
        use_effect_with((deps, generation.0), move |(deps, _)| {
            let live = Rc::new(Cell::new(true));
            let guard = Rc::clone(&live);
            let request = fetch(deps.clone());
            spawn_local(async move {
                let result = request.await;
                if guard.get() {
                    data.set(Remote::settle(result));
                }
            });
            move || live.set(false)
        });
    }

    let reload = {
        let dispatcher = generation.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(()))
    };

    RemoteHandle {
        data: (*data).clone(),
        reload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reload_bumps_generation() {
        let generation = Rc::new(Generation::default())
            .reduce(())
            .reduce(());
        assert_eq!(*generation, Generation(2));
    }

    #[test]
    fn session_loss_keeps_loading() {
        let remote: Remote<u8> = Remote::settle(Err(ClientError::Unauthenticated));
        assert_eq!(remote, Remote::Loading);
    }

    #[test]
    fn other_failures_carry_message() {
        let remote: Remote<u8> = Remote::settle(Err(ClientError::Request {
            status: 500,
            body: "boom".to_string(),
        }));
        assert_eq!(
            remote,
            Remote::Failed("Request failed with status 500: boom".to_string())
        );
    }
}
