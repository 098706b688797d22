use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::context::{use_language, Language};
use crate::models::User;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: User,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let lang = use_language();

    let on_language_change = {
        let set_language = lang.set_language.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_language.emit(Language::from_code(&select.value()));
        })
    };

    html! {
        <header class="app-header">
            <div class="header-inner">
                <div class="header-brand">
                    <div class="brand-logo">{ "SW" }</div>
                    <h1 class="brand-name">{ lang.get("app_name") }</h1>
                </div>

                <div class="header-actions">
                    <select class="language-select" onchange={on_language_change}>
                        <option value="en" selected={lang.language == Language::English}>
                            { "English" }
                        </option>
                        <option value="fr" selected={lang.language == Language::French}>
                            { "Français" }
                        </option>
                    </select>

                    <span class="header-username">{ props.user.username.clone() }</span>
                    <button class="btn-logout" onclick={props.on_logout.reform(|_| ())}>
                        { lang.get("logout") }
                    </button>
                </div>
            </div>
        </header>
    }
}
