//! Modal dialog for adding or editing a card.
//!
//! Reads and writes the open `CardDialog` in `UiState`; saving goes through
//! the store and closes the dialog only when the draft was accepted.

use board::dialog::{CardDialog, DialogKey, dialog_key};
use board::store::BoardStore;
use board::validate::Field;
use leptos::prelude::*;

use crate::state::board::commit;
use crate::state::ui::UiState;

/// Dialog shown while `UiState::dialog` is set.
#[component]
pub fn CardDialogModal() -> impl IntoView {
    let store = expect_context::<RwSignal<BoardStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let title_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(input) = title_ref.get() {
            let _ = input.focus();
        }
    });

    let read = move |f: fn(&CardDialog) -> String| ui.with(|u| u.dialog.as_ref().map(f).unwrap_or_default());
    let message = move |field: Field| ui.with(|u| u.dialog.as_ref().and_then(|d| d.message_at(field)));
    let invalid = move |field: Field| ui.with(|u| u.dialog.as_ref().is_some_and(|d| d.is_invalid(field)));
    let placeholder = move |field: Field| ui.with(|u| u.dialog.as_ref().and_then(|d| d.placeholder(field)));
    let edit = move |apply: fn(&mut CardDialog, String), value: String| {
        ui.update(|u| {
            if let Some(dialog) = u.dialog.as_mut() {
                apply(dialog, value);
            }
        });
    };

    let cancel = move || ui.update(UiState::close_dialog);
    let save = move || {
        let Some(mut dialog) = ui.with_untracked(|u| u.dialog.clone()) else {
            return;
        };
        commit(store, "save card", |s| dialog.save(s));
        ui.update(move |u| u.dialog = dialog.error.is_some().then_some(dialog));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        ev.stop_propagation();
        match dialog_key(&ev.key(), ev.shift_key()) {
            Some(DialogKey::Save) => {
                ev.prevent_default();
                save();
            }
            Some(DialogKey::Cancel) => {
                ev.prevent_default();
                cancel();
            }
            None => {}
        }
    };

    view! {
        <div class="modal" on:click=move |_| cancel()>
            <div class="modal__content" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <h2>{move || ui.with(|u| u.dialog.as_ref().map(CardDialog::heading).unwrap_or_default())}</h2>
                <div class="modal__input-group">
                    <input
                        type="text"
                        class="modal__title-input"
                        class:modal__input-error=move || invalid(Field::Title)
                        node_ref=title_ref
                        placeholder=move || placeholder(Field::Title)
                        prop:value=move || read(|d| d.title.clone())
                        on:input=move |ev| edit(|d, v| d.title = v, event_target_value(&ev))
                        required=true
                        autofocus=true
                    />
                    {move || message(Field::Title).map(|m| view! {
                        <div class="modal__error-container modal__error-container--title">
                            <div class="modal__error-message">{m}</div>
                        </div>
                    })}
                </div>
                <div class="modal__input-group">
                    <textarea
                        class="modal__description-input"
                        class:modal__input-error=move || invalid(Field::Description)
                        placeholder=move || placeholder(Field::Description)
                        prop:value=move || read(|d| d.description.clone())
                        on:input=move |ev| edit(|d, v| d.description = v, event_target_value(&ev))
                        required=true
                    ></textarea>
                    {move || message(Field::Description).map(|m| view! {
                        <div class="modal__error-container modal__error-container--description">
                            <div class="modal__error-message">{m}</div>
                        </div>
                    })}
                </div>
                <div class="modal__actions">
                    <button class="modal__save-btn" on:click=move |_| save()>
                        "Save"
                    </button>
                    <button class="modal__cancel-btn" on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
