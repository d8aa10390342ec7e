//! Error banner for a failed marker refresh.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a retry button when set
    #[props(default)]
    pub on_retry: Option<EventHandler<()>>,
}

/// Displays the refresh error; the map stays empty until the next refresh.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span {
                strong { "Could not load sites: " }
                "{props.message}"
            }
            if let Some(on_retry) = props.on_retry {
                button {
                    r#type: "button",
                    style: "margin-left: auto;",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
