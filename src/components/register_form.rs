use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::context::use_language;
use crate::models::{AuthResponse, RegisterRequest, Session};
use crate::services::ApiClient;

/// Business sectors offered at registration, as the backend expects them.
const SECTORS: [(&str, &str); 6] = [
    ("primary", "Primary (Agriculture, Mining)"),
    ("secondary", "Secondary (Manufacturing)"),
    ("tertiary", "Tertiary (Services)"),
    ("it", "Information Technology"),
    ("ai", "Artificial Intelligence"),
    ("marketing", "Marketing"),
];

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub on_register: Callback<Session>,
    pub on_show_login: Callback<()>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let business_name_ref = use_node_ref();
    let sector_ref = use_node_ref();
    let location_ref = use_node_ref();
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let lang = use_language();

    let on_submit = {
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let business_name_ref = business_name_ref.clone();
        let sector_ref = sector_ref.clone();
        let location_ref = location_ref.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let on_register = props.on_register.clone();
        let language = lang.language;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (
                Some(username_input),
                Some(email_input),
                Some(password_input),
                Some(business_name_input),
                Some(sector_select),
                Some(location_input),
            ) = (
                username_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                business_name_ref.cast::<HtmlInputElement>(),
                sector_ref.cast::<HtmlSelectElement>(),
                location_ref.cast::<HtmlInputElement>(),
            )
            else {
                return;
            };

            let business_name = business_name_input.value();
            let request = RegisterRequest {
                username: username_input.value(),
                email: email_input.value(),
                password: password_input.value(),
                business_name: (!business_name.trim().is_empty()).then_some(business_name),
                sector: sector_select.value(),
                location: location_input.value(),
                language: language.as_str().to_string(),
            };

            let is_loading = is_loading.clone();
            let error = error.clone();
            let on_register = on_register.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let client = ApiClient::new();
                match client
                    .post::<_, AuthResponse>("/api/auth/register", &request, None)
                    .await
                {
                    Ok(response) => match response.into_session() {
                        Ok(session) => on_register.emit(session),
                        Err(detail) => {
                            error.set(Some(
                                detail.unwrap_or_else(|| "Registration failed".to_string()),
                            ));
                        }
                    },
                    Err(e) => {
                        log::error!("register request failed: {}", e);
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
                    <p>{ lang.get("register") }</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{ "Username" }</label>
                        <input type="text" id="username" ref={username_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="email">{ "Email" }</label>
                        <input type="email" id="email" ref={email_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="password">{ "Password" }</label>
                        <input type="password" id="password" ref={password_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="business_name">{ "Business Name (Optional)" }</label>
                        <input type="text" id="business_name" ref={business_name_ref} />
                    </div>

                    <div class="form-group">
                        <label for="sector">{ "Sector" }</label>
                        <select id="sector" ref={sector_ref} required=true>
                            {
                                SECTORS.into_iter().map(|(value, label)| html! {
                                    <option key={value} value={value} selected={value == "it"}>
                                        { label }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="location">{ "Location" }</label>
                        <input type="text" id="location" ref={location_ref} required=true />
                    </div>

                    if let Some(message) = &*error {
                        <div class="form-error">{ message.clone() }</div>
                    }

                    <button type="submit" class="btn-primary" disabled={*is_loading}>
                        { if *is_loading { "Registering...".to_string() } else { lang.get("register") } }
                    </button>
                </form>

                <div class="auth-footer">
                    <button class="btn-link" onclick={props.on_show_login.reform(|_| ())}>
                        { "Already have an account? Login" }
                    </button>
                </div>
            </div>
        </div>
    }
}
