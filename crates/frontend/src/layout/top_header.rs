use leptos::prelude::*;

/// Top bar: product brand plus the portfolio entry point.
#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <header class="top-header">
            <a class="top-header__brand" href="/portfolio">
                "Ace Portfolio Intelligence"
            </a>
            <nav class="top-header__nav">
                <a class="top-header__link" href="/portfolio">"Portfolio"</a>
            </nav>
        </header>
    }
}
