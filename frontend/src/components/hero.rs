//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Crie o cardápio com auxílio da "
                <span class="highlight">"Inteligência Artificial"</span>
                "."
            </p>
        </div>
    }
}
