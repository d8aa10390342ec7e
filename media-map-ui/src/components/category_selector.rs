//! Category narrowing for site maps.

use crate::state::{AppState, CategoryFilter};
use dioxus::prelude::*;
use media_map_core::RecordType;

/// Billboard/canopy selector; disabled for models without a category.
#[component]
pub fn CategorySelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.category)();
    let enabled = RecordType::from_model(&(state.record_type)()).supports_category();

    let on_change = move |evt: Event<FormData>| {
        state.category.set(CategoryFilter::from_value(&evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Category: "
                select {
                    disabled: !enabled,
                    onchange: on_change,
                    for category in CategoryFilter::ALL {
                        option {
                            value: category.value(),
                            selected: category == current,
                            {category.label()}
                        }
                    }
                }
            }
        }
    }
}
