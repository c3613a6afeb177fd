// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page — session-scoped configuration. Nothing here is written to
// disk; the tool keeps no state across sessions.

use dioxus::prelude::*;

use roentgen_core::PaperSize;

use crate::state::AppState;

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        div {
            h1 { "Settings" }
            p { style: "color: #666; font-size: 14px;",
                "Settings apply to this session only."
            }

            section { style: "margin: 16px 0;",
                h3 { "PDF Output" }
                // Paper size
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Paper size" }
                    select {
                        style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: paper_size_label(&state.read().config.paper_size),
                        onchange: move |evt| {
                            if let Some(ps) = paper_size_from_label(&evt.value()) {
                                state.write().config.paper_size = ps;
                            }
                        },
                        option { value: "A4", "A4" }
                        option { value: "A5", "A5" }
                        option { value: "Letter", "Letter" }
                        option { value: "Legal", "Legal" }
                    }
                }
                SettingRow {
                    label: "Embed signature image in PDF",
                    checked: state.read().config.embed_signature,
                    on_toggle: move |v: bool| { state.write().config.embed_signature = v; },
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Feedback" }
                SettingRow {
                    label: "Show export warnings",
                    checked: state.read().config.show_export_warnings,
                    on_toggle: move |v: bool| { state.write().config.show_export_warnings = v; },
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "Roentgen v0.1.0"
                    br {}
                    "MLC X-ray report builder"
                    br {}
                    "PMPL-1.0-or-later"
                }
            }
        }
    }
}

#[component]
fn SettingRow(label: &'static str, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt| {
                    on_toggle.call(evt.checked());
                },
            }
        }
    }
}

fn paper_size_label(ps: &PaperSize) -> &'static str {
    match ps {
        PaperSize::A4 => "A4",
        PaperSize::A5 => "A5",
        PaperSize::Letter => "Letter",
        PaperSize::Legal => "Legal",
    }
}

fn paper_size_from_label(label: &str) -> Option<PaperSize> {
    match label {
        "A4" => Some(PaperSize::A4),
        "A5" => Some(PaperSize::A5),
        "Letter" => Some(PaperSize::Letter),
        "Legal" => Some(PaperSize::Legal),
        _ => None,
    }
}
