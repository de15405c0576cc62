//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::board::BoardPage;
use crate::state::board::load_store;
use crate::util::ui_persistence::BrowserStorage;

/// Root application component.
///
/// Loads the board store once from `localStorage` (or the default seed) and
/// provides it to the page as the single source of truth.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(load_store(&BrowserStorage));
    provide_context(store);

    view! {
        <Title text="Task Board"/>
        <BoardPage/>
    }
}
