//! One board column: title, cards or placeholder, add button.

use board::consts::{ADD_CARD_LABEL, EMPTY_PLACEHOLDER};
use leptos::prelude::*;

use crate::components::task_card::TaskCard;
use crate::state::board::ColumnView;
use crate::state::ui::UiState;
use crate::util::drag_input::CARD_LIST_CLASS;

/// A column rendered from its `ColumnView`.
///
/// The card list carries `data-board-id`; drag hit-testing reads it back to
/// identify the drop zone under the pointer.
#[component]
pub fn BoardColumn(column: ColumnView) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let board_id = column.id;
    let placeholder = column.shows_placeholder();

    view! {
        <section class="board">
            <h2 class="board__title">{column.title}</h2>
            <div class=CARD_LIST_CLASS data-board-id=board_id.to_string()>
                {placeholder.then(|| view! { <p class="board__empty-message">{EMPTY_PLACEHOLDER}</p> })}
                {column.cards.into_iter().map(|card| view! { <TaskCard card=card/> }).collect_view()}
            </div>
            <button class="board__add-card-btn" on:click=move |_| ui.update(|u| u.open_add(board_id))>
                {ADD_CARD_LABEL}
            </button>
        </section>
    }
}
