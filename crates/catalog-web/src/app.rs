//! Main App Component

use leptos::prelude::*;

use crate::pages::HomePage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! { <HomePage /> }
}
