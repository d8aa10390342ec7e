//! Dropdown selector for the model shown on the map.

use crate::state::AppState;
use dioxus::prelude::*;
use media_map_core::record::{DIGITAL_SCREEN_MODEL, SITE_MODEL};

const CHOICES: [(&str, &str); 2] = [
    (SITE_MODEL, "Billboards & canopies"),
    (DIGITAL_SCREEN_MODEL, "Digital screens"),
];

/// Record type dropdown. Updates `record_type` on change.
#[component]
pub fn RecordTypeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.record_type)();

    let on_change = move |evt: Event<FormData>| {
        state.record_type.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "record-type-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Show: "
            }
            select {
                id: "record-type-select",
                onchange: on_change,
                for (model, label) in CHOICES {
                    option {
                        value: "{model}",
                        selected: model == selected,
                        "{label}"
                    }
                }
                if !CHOICES.iter().any(|(model, _)| *model == selected) {
                    option {
                        value: "{selected}",
                        selected: true,
                        "{selected}"
                    }
                }
            }
        }
    }
}
