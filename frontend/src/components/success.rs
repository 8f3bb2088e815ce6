//! Confirmation shown after the webhook accepted a menu.

use cardapio::SubmissionController;
use leptos::*;

#[component]
pub fn SuccessPanel(controller: RwSignal<SubmissionController>) -> impl IntoView {
    let products_url = move || controller.with(|c| c.products_url());

    view! {
        <div class="success-panel">
            <div class="success-icon">"✓"</div>
            <h2>"MISSÃO CUMPRIDA!"</h2>
            <p class="success-text">
                "Seu cardápio foi processado e já está em órbita no portal do parceiro."
            </p>
            <a
                class="btn btn-primary"
                href=products_url
                target="_blank"
                rel="noopener noreferrer"
            >
                "Ver produtos"
            </a>
            <button
                class="btn btn-link"
                on:click=move |_| controller.update(|c| c.start_new())
            >
                "Iniciar Nova Missão"
            </button>
        </div>
    }
}
