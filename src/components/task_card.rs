//! A single task card: title, description, edit/delete actions, drag handle.
//!
//! DESIGN
//! ======
//! The whole card body is the drag handle. Pressing a mouse button or a
//! finger on it starts a `DragSession`; the move/release side of the gesture
//! is handled by window listeners on `BoardPage`, so the gesture survives
//! this element being re-rendered into another position mid-drag.

use board::store::BoardStore;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use board::drag::{DragSession, InputKind};

#[cfg(feature = "csr")]
use crate::util::drag_input::{event_card_rect, event_hits_control, pointer_point, starts_pointer_drag, touch_point};
use crate::state::board::{CardView, commit};
use crate::state::ui::UiState;

/// A draggable card.
#[component]
pub fn TaskCard(card: CardView) -> impl IntoView {
    let store = expect_context::<RwSignal<BoardStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let card_ref = card.card;

    let on_edit = move |_: leptos::ev::MouseEvent| {
        let opened = store.with_untracked(|s| ui.try_update(|u| u.open_edit(s, card_ref)));
        if opened != Some(true) {
            log::warn!("edit requested for missing card {card_ref:?}");
        }
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if let Some(removed) = commit(store, "delete card", |s| s.delete_card(card_ref)) {
            log::debug!("deleted card {:?} from board {}", removed.title, card_ref.board);
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if !starts_pointer_drag(&ev.pointer_type(), ev.button()) || event_hits_control(ev.target()) {
                    return;
                }
                let Some(rect) = event_card_rect(ev.target()) else {
                    return;
                };
                ev.prevent_default();
                let session = DragSession::begin(card_ref, InputKind::Mouse, pointer_point(&ev), rect);
                ui.update(|u| u.drag = Some(session));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_touch_start = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::TouchEvent| {
                if event_hits_control(ev.target()) {
                    return;
                }
                let (Some(point), Some(rect)) = (touch_point(&ev), event_card_rect(ev.target())) else {
                    return;
                };
                let session = DragSession::begin(card_ref, InputKind::Touch, point, rect);
                ui.update(|u| u.drag = Some(session));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    view! {
        <div
            class="card"
            class:card--dragging=move || ui.read().is_dragging(card_ref)
            style=move || ui.read().card_style(card_ref)
            on:pointerdown=on_pointer_down
            on:touchstart=on_touch_start
        >
            <div class="card__header">
                <div class="card__title">{card.title}</div>
                <div class="card__actions">
                    <button class="card__edit-btn" on:click=on_edit title="Edit card" aria-label="Edit card">
                        "✎"
                    </button>
                    <button class="card__close-btn" on:click=on_delete title="Delete card" aria-label="Delete card">
                        "✕"
                    </button>
                </div>
            </div>
            <div class="card__description">{card.description}</div>
        </div>
    }
}
