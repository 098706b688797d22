use yew::prelude::*;

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="spinner-wrap">
            <div class="spinner"></div>
        </div>
    }
}
