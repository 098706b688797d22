use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::use_language;
use crate::models::{AuthResponse, LoginRequest, Session};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    /// Emitted with the new session once the server accepts the credentials.
    pub on_login: Callback<Session>,
    pub on_show_register: Callback<()>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let lang = use_language();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let request = LoginRequest {
                email: email_input.value(),
                password: password_input.value(),
            };

            let is_loading = is_loading.clone();
            let error = error.clone();
            let on_login = on_login.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let client = ApiClient::new();
                match client
                    .post::<_, AuthResponse>("/api/auth/login", &request, None)
                    .await
                {
                    Ok(response) => match response.into_session() {
                        Ok(session) => on_login.emit(session),
                        Err(detail) => {
                            error.set(Some(
                                detail.unwrap_or_else(|| "Login failed".to_string()),
                            ));
                        }
                    },
                    Err(e) => {
                        log::error!("login request failed: {}", e);
                        error.set(Some("Network error. Please try again.".to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <div class="brand-logo">{ "SW" }</div>
                    <h2>{ lang.get("app_name") }</h2>
                    <p>{ lang.get("login") }</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{ "Email" }</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{ "Password" }</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    if let Some(message) = &*error {
                        <div class="form-error">{ message.clone() }</div>
                    }

                    <button type="submit" class="btn-primary" disabled={*is_loading}>
                        { if *is_loading { "Logging in...".to_string() } else { lang.get("login") } }
                    </button>
                </form>

                <div class="auth-footer">
                    <button class="btn-link" onclick={props.on_show_register.reform(|_| ())}>
                        { "Don't have an account? Register" }
                    </button>
                </div>
            </div>
        </div>
    }
}
