//! Delete Confirm Button Component
//!
//! Two-step delete: the first click asks, the second one runs `on_confirm`.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// * `label` - text of the initial button ("×" for list rows)
/// * `button_class` - CSS class of the initial button
/// * `prompt` - question shown while confirming
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into, default = "delete-btn".into())] button_class: String,
    #[prop(into, default = "Delete?".into())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    let ask = move || {
        view! {
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        }
    };

    view! {
        <Show when=move || confirming.get() fallback=ask>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
