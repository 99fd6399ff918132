use leptos::prelude::*;

use super::top_header::TopHeader;

/// Application shell: top header above the routed content.
///
/// ```text
/// +------------------------------------------+
/// |               TopHeader                  |
/// +------------------------------------------+
/// |               Content                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">{children()}</main>
        </div>
    }
}
