//! Legend of marker styles with the current marker count.

use crate::state::AppState;
use dioxus::prelude::*;
use media_map_core::SiteKind;

/// Color swatches for every marker style plus a count line.
#[component]
pub fn MapLegend() -> Element {
    let state = use_context::<AppState>();
    let markers = (state.marker_count)();
    let skipped = (state.skipped_count)();

    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: center; margin: 8px 0; font-size: 12px; color: #444;",
            for kind in [SiteKind::Billboard, SiteKind::Canopy, SiteKind::DigitalScreen] {
                span {
                    style: "display: inline-flex; align-items: center; gap: 4px;",
                    span {
                        style: swatch_style(kind),
                    }
                    {kind.style().label}
                }
            }
            span {
                style: "margin-left: auto;",
                "{markers} on map"
                if skipped > 0 {
                    ", {skipped} without coordinates"
                }
            }
        }
    }
}

fn swatch_style(kind: SiteKind) -> String {
    format!(
        "display: inline-block; width: 12px; height: 12px; border-radius: 50%; background-color: {};",
        kind.style().color
    )
}
