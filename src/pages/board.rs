//! Board page: every column of the store plus the card dialog.
//!
//! ARCHITECTURE
//! ============
//! `BoardPage` owns the page-scoped `UiState` (open dialog, active drag) and
//! provides it to its children. Columns re-render from `column_views` whenever
//! the store changes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drags start on a card (`TaskCard`) but are driven from here: move and
//! release listeners sit on the window so the gesture keeps working while the
//! dragged card is re-rendered into a new slot. Each move re-measures the
//! columns and lets the `DragSession` reorder the store live; the store is
//! persisted once, when the gesture ends.

use board::store::BoardStore;
use leptos::prelude::*;

use crate::components::board_column::BoardColumn;
use crate::components::card_dialog::CardDialogModal;
use crate::state::board::column_views;
use crate::state::ui::UiState;

/// The board workspace.
#[component]
pub fn BoardPage() -> impl IntoView {
    let store = expect_context::<RwSignal<BoardStore>>();
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    #[cfg(feature = "csr")]
    install_drag_listeners(store, ui);

    let columns = move || {
        store
            .with(column_views)
            .into_iter()
            .map(|column| view! { <BoardColumn column=column/> })
            .collect_view()
    };

    view! {
        <main class="board-container" id="boardContainer">{columns}</main>
        <Show when=move || ui.with(|u| u.dialog.is_some())>
            <CardDialogModal/>
        </Show>
    }
}

#[cfg(feature = "csr")]
fn install_drag_listeners(store: RwSignal<BoardStore>, ui: RwSignal<UiState>) {
    use board::drag::InputKind;
    use board::geometry::Point;

    use crate::state::board::persist;
    use crate::util::drag_input::{is_pointer_drag_event, measure_columns, pointer_point, touch_point};
    use crate::util::ui_persistence::BrowserStorage;

    let on_move = move |kind: InputKind, point: Point| {
        let Some(mut session) = ui.with_untracked(|u| u.drag.clone().filter(|d| d.kind() == kind)) else {
            return;
        };
        let columns = measure_columns();
        match store.try_update_untracked(|s| session.hover(s, &columns, point)) {
            Some(Ok(true)) => store.notify(),
            Some(Err(err)) => log::warn!("drag reorder failed: {err}"),
            _ => {}
        }
        ui.update(|u| u.drag = Some(session));
    };

    let on_end = move |kind: InputKind| {
        let active = ui.with_untracked(|u| u.drag.as_ref().is_some_and(|d| d.kind() == kind));
        if !active {
            return;
        }
        let Some(session) = ui.try_update(|u| u.drag.take()).flatten() else {
            return;
        };
        let outcome = session.finish();
        if outcome.moved {
            log::debug!("card dropped at {:?}", outcome.card);
            store.with_untracked(|s| persist(&mut BrowserStorage, s));
        }
    };

    let handles = [
        window_event_listener(leptos::ev::pointermove, move |ev| {
            if is_pointer_drag_event(&ev.pointer_type()) {
                on_move(InputKind::Mouse, pointer_point(&ev));
            }
        }),
        window_event_listener(leptos::ev::pointerup, move |ev| {
            if is_pointer_drag_event(&ev.pointer_type()) {
                on_end(InputKind::Mouse);
            }
        }),
        window_event_listener(leptos::ev::pointercancel, move |ev| {
            if is_pointer_drag_event(&ev.pointer_type()) {
                on_end(InputKind::Mouse);
            }
        }),
        // Window touch listeners are passive; cards opt out of touch
        // scrolling through `touch-action` in `UiState::card_style` instead.
        window_event_listener(leptos::ev::touchmove, move |ev| {
            if let Some(point) = touch_point(&ev) {
                on_move(InputKind::Touch, point);
            }
        }),
        window_event_listener(leptos::ev::touchend, move |_| on_end(InputKind::Touch)),
        window_event_listener(leptos::ev::touchcancel, move |_| on_end(InputKind::Touch)),
    ];

    on_cleanup(move || {
        for handle in handles {
            handle.remove();
        }
    });
}
