use leptos::*;

#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div
                class="progress-fill"
                style=move || format!("width: {:.0}%;", progress.get())
            ></div>
        </div>
    }
}
