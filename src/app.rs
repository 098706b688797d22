use yew::prelude::*;

use crate::components::{Header, LoginForm, Navigation, RegisterForm, Tab};
use crate::context::{use_session, LanguageProvider, SessionAction, SessionProvider};
use crate::models::Session;
use crate::views::{
    CompetitorMonitoring, CredibilityMonitoring, Dashboard, MarketingMonitoring, TechMonitoring,
};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <LanguageProvider>
            <SessionProvider>
                <MainApp />
            </SessionProvider>
        </LanguageProvider>
    }
}

/// Which auth form is visible while no session exists.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum AuthScreen {
    #[default]
    Login,
    Register,
}

/// View controller. Two top-level states: unauthenticated (login or register
/// form) and authenticated (header, tab navigation and the active monitoring
/// view). Login and registration land on the dashboard; logout returns to the
/// login form and resets the tab.
#[function_component(MainApp)]
fn main_app() -> Html {
    let session_store = use_session();
    let active_tab = use_state(Tab::default);
    let auth_screen = use_state(AuthScreen::default);

    let on_authenticated = {
        let session_store = session_store.clone();
        let active_tab = active_tab.clone();
        Callback::from(move |session: Session| {
            active_tab.set(Tab::Dashboard);
            session_store.dispatch(SessionAction::Login(session));
        })
    };

    let on_logout = {
        let session_store = session_store.clone();
        let active_tab = active_tab.clone();
        let auth_screen = auth_screen.clone();
        Callback::from(move |_: ()| {
            active_tab.set(Tab::Dashboard);
            auth_screen.set(AuthScreen::Login);
            session_store.dispatch(SessionAction::Logout);
        })
    };

    let Some(session) = session_store.session.clone() else {
        let show_register = {
            let auth_screen = auth_screen.clone();
            Callback::from(move |_: ()| auth_screen.set(AuthScreen::Register))
        };
        let show_login = {
            let auth_screen = auth_screen.clone();
            Callback::from(move |_: ()| auth_screen.set(AuthScreen::Login))
        };

        return match *auth_screen {
            AuthScreen::Login => html! {
                <LoginForm on_login={on_authenticated} on_show_register={show_register} />
            },
            AuthScreen::Register => html! {
                <RegisterForm on_register={on_authenticated} on_show_login={show_login} />
            },
        };
    };

    let token = session.token.clone();
    let content = match *active_tab {
        Tab::Dashboard => html! { <Dashboard user={session.user.clone()} token={token} /> },
        Tab::Tech => html! { <TechMonitoring {token} /> },
        Tab::Competitor => html! { <CompetitorMonitoring {token} /> },
        Tab::Credibility => html! { <CredibilityMonitoring {token} /> },
        Tab::Marketing => html! { <MarketingMonitoring {token} /> },
    };

    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| active_tab.set(tab))
    };

    html! {
        <div class="app-shell">
            <Header user={session.user.clone()} on_logout={on_logout} />
            <Navigation active_tab={*active_tab} on_select={on_select_tab} />
            <main>{ content }</main>
        </div>
    }
}
