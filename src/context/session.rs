//! Session store: the single writer path for authentication state.
//!
//! All session mutations go through the reducer so the in-memory session and
//! the persisted copy can never drift apart. Consumers read the latest
//! committed value through the context handle.

use std::rc::Rc;

use yew::prelude::*;

use crate::models::Session;
use crate::services::session as persistence;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionContextData {
    pub session: Option<Session>,
}

pub enum SessionAction {
    /// Successful login or registration: persist and commit the session.
    Login(Session),
    /// Drop the persisted and in-memory session.
    Logout,
}

impl Reducible for SessionContextData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Login(session) => {
                persistence::save_session(&session);
                Rc::new(Self {
                    session: Some(session),
                })
            }
            SessionAction::Logout => {
                persistence::clear_session();
                Rc::new(Self { session: None })
            }
        }
    }
}

pub type SessionContext = UseReducerHandle<SessionContextData>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    // Restore from storage without a server round-trip; an expired token is
    // only discovered on the next API call.
    let store = use_reducer(|| SessionContextData {
        session: persistence::load_session(),
    });

    html! {
        <ContextProvider<SessionContext> context={store}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not provided")
}
