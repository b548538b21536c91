//! Session context and provider

use crate::config::AuthConfig;
use crate::navigation::BrowserNavigator;
use crate::storage::LocalStorageTokenStore;
use serde::Deserialize;
use std::rc::Rc;
use vera_core::{Claims, Session, SessionState};
use vera_http::{ClientError, ServiceConfig, VeraClient};
use yew::prelude::*;
use yew_router::prelude::*;

/// Session state as seen by the component tree
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionContextData {
    pub state: SessionState,
}

pub enum SessionAction {
    Loading,
    Settled(SessionState),
    /// A request renewed the token; ignored unless signed in
    Refreshed(Session),
    /// The gateway sent the user to the login screen
    Lost,
}

impl Reducible for SessionContextData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Loading => Rc::new(Self {
                state: SessionState::Loading,
            }),
            SessionAction::Settled(state) => Rc::new(Self { state }),
            SessionAction::Refreshed(session) => match self.state {
                SessionState::Authenticated(_) => Rc::new(Self {
                    state: SessionState::Authenticated(session),
                }),
                _ => self,
            },
            SessionAction::Lost => match self.state {
                SessionState::Authenticated(_) => Rc::new(Self {
                    state: SessionState::Unauthenticated,
                }),
                _ => self,
            },
        }
    }
}

/// Handle exposed to descendants through [`use_session`]
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    data: UseReducerHandle<SessionContextData>,
    client: VeraClient,
}

impl SessionContext {
    pub fn state(&self) -> &SessionState {
        &self.data.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.state.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.data.state.is_loading()
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.data.state.claims()
    }

    pub fn client(&self) -> &VeraClient {
        &self.client
    }

    pub fn logout(&self) {
        let state = self.client.logout();
        self.data.dispatch(SessionAction::Settled(state));
    }
}

#[derive(Deserialize)]
struct CallbackQuery {
    access_token: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub config: ServiceConfig,
    pub children: Children,
}

/// Builds the client, resolves the session on mount and adopts tokens
/// delivered by the login callback. Must be mounted inside the router.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let data = use_reducer(SessionContextData::default);
    let navigator = use_memo((), |_| BrowserNavigator::new());
    let client = {
        let navigator = Rc::clone(&navigator);
        let dispatcher = data.dispatcher();
        use_memo(props.config.clone(), move |config| {
            VeraClient::builder()
                .config(config.clone())
                .store(Rc::new(LocalStorageTokenStore))
                .navigator(navigator)
                .on_refresh(Rc::new(move |session: &Session| {
                    dispatcher.dispatch(SessionAction::Refreshed(session.clone()));
                }))
                .build()
        })
    };

    // Hand the router to the navigator and hear about login redirects
    {
        let navigator = Rc::clone(&navigator);
        let dispatcher = data.dispatcher();
        let router = use_navigator();
        use_effect_with(router, move |router| {
            if let Some(router) = router {
                navigator.attach_router(router.clone());
            }
            navigator.on_login_navigation(Callback::from(move |()| {
                dispatcher.dispatch(SessionAction::Lost);
            }));
            move || navigator.detach_router()
        });
    }

    let callback_token = use_location()
        .and_then(|location| location.query::<CallbackQuery>().ok())
        .and_then(|query| query.access_token)
        .filter(|token| !token.is_empty());

    {
        let data = data.clone();
        let client = Rc::clone(&client);
        use_effect_with(callback_token, move |token| {
            if let Ok(client) = &*client {
                match token {
                    Some(token) => {
                        tracing::debug!(
                            param = AuthConfig::TOKEN_QUERY_PARAM,
                            "Token received from login callback"
                        );
                        data.dispatch(SessionAction::Settled(client.accept_token(token)));
                    }
                    None if data.state == SessionState::Uninitialized => {
                        data.dispatch(SessionAction::Loading);
                        let client = client.clone();
                        let dispatcher = data.dispatcher();
                        wasm_bindgen_futures::spawn_local(async move {
                            let state = client.load_session().await;
                            dispatcher.dispatch(SessionAction::Settled(state));
                        });
                    }
                    None => {}
                }
            }
        });
    }

    match &*client {
        Ok(client) => {
            let context = SessionContext {
                data,
                client: client.clone(),
            };
            html! {
                <ContextProvider<SessionContext> context={context}>
                    {props.children.clone()}
                </ContextProvider<SessionContext>>
            }
        }
        Err(error) => html! { <ConfigurationError error={error.to_string()} /> },
    }
}

#[derive(Properties, PartialEq)]
struct ConfigurationErrorProps {
    error: String,
}

#[function_component(ConfigurationError)]
fn configuration_error(props: &ConfigurationErrorProps) -> Html {
    tracing::error!(error = %props.error, "Client could not be configured");
    html! {
        <div class="flex h-screen items-center justify-center p-6">
            <div class="max-w-md rounded-lg bg-red-50 p-4 text-sm text-red-700">
                {&props.error}
            </div>
        </div>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Error text for a failed call; session losses redirect instead of showing one
pub fn describe_error(error: &ClientError) -> Option<String> {
    (!error.is_session_lost()).then(|| error.to_string())
}
