//! Main App Component

use homecare_core::SiteConfig;
use leptos::prelude::*;

use crate::pages::HomePage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::from_build_env();

    view! {
        <main class="app">
            <HomePage config=config />
        </main>
    }
}
