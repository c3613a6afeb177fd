// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Report page — enter case details, generate the report, preview the text,
// and save the PDF/DOCX outputs.

use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

use roentgen_core::types::{ReportRequest, XrayType};
use roentgen_document::NamedDocument;

use crate::services::report_service;
use crate::state::AppState;

const FIELD_STYLE: &str =
    "width: 100%; padding: 8px; font-size: 14px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;";
const AREA_STYLE: &str =
    "width: 100%; min-height: 80px; padding: 8px; font-size: 14px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box; resize: vertical;";

#[component]
pub fn Report() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    // Form field bindings — folded into an immutable ReportRequest on submit.
    let mut patient_name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut sex = use_signal(String::new);
    let mut hospital_no = use_signal(String::new);
    let mut referring_physician = use_signal(String::new);
    let mut date_of_exam = use_signal(|| Local::now().date_naive());
    let mut xray_choice = use_signal(|| "Chest PA".to_string());
    let mut xray_other = use_signal(String::new);
    let mut clinical_history = use_signal(String::new);
    let mut findings = use_signal(String::new);
    let mut impression = use_signal(String::new);
    let mut doctor_name = use_signal(String::new);
    let mut signature_name = use_signal(|| Option::<String>::None);
    let mut signature_bytes = use_signal(|| Option::<Vec<u8>>::None);

    let date_value = date_of_exam.read().format("%Y-%m-%d").to_string();

    rsx! {
        div {
            h1 { "MLC X-ray Report" }
            p { style: "color: #666; font-size: 14px;",
                "Create and download MLC X-ray reports as PDF or DOCX. Nothing is stored."
            }

            section { style: "margin: 16px 0;",
                h3 { "Case Details" }
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                    div {
                        label { "Patient Name" }
                        input {
                            style: FIELD_STYLE,
                            value: "{patient_name}",
                            oninput: move |evt| patient_name.set(evt.value().to_string()),
                        }
                        label { "Age" }
                        input {
                            style: FIELD_STYLE,
                            value: "{age}",
                            oninput: move |evt| age.set(evt.value().to_string()),
                        }
                        label { "Sex" }
                        select {
                            style: FIELD_STYLE,
                            onchange: move |evt| sex.set(evt.value().to_string()),
                            option { value: "", "" }
                            option { value: "Male", "Male" }
                            option { value: "Female", "Female" }
                            option { value: "Other", "Other" }
                        }
                        label { "Hospital / OPD No." }
                        input {
                            style: FIELD_STYLE,
                            value: "{hospital_no}",
                            oninput: move |evt| hospital_no.set(evt.value().to_string()),
                        }
                    }
                    div {
                        label { "Referring Physician" }
                        input {
                            style: FIELD_STYLE,
                            value: "{referring_physician}",
                            oninput: move |evt| referring_physician.set(evt.value().to_string()),
                        }
                        label { "Date of Exam" }
                        input {
                            r#type: "date",
                            style: FIELD_STYLE,
                            value: "{date_value}",
                            onchange: move |evt| {
                                if let Ok(date) = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d") {
                                    date_of_exam.set(date);
                                }
                            },
                        }
                        label { "X-ray Type" }
                        select {
                            style: FIELD_STYLE,
                            onchange: move |evt| xray_choice.set(evt.value().to_string()),
                            for label in XrayType::STANDARD.iter().map(|x| x.label()) {
                                option { value: "{label}", "{label}" }
                            }
                            option { value: "Other", "Other" }
                        }
                        if xray_choice.read().as_str() == "Other" {
                            label { "Specify X-ray Type" }
                            input {
                                style: FIELD_STYLE,
                                value: "{xray_other}",
                                oninput: move |evt| xray_other.set(evt.value().to_string()),
                            }
                        }
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Findings" }
                label { "Clinical History / Complaint" }
                textarea {
                    style: AREA_STYLE,
                    value: "{clinical_history}",
                    oninput: move |evt| clinical_history.set(evt.value().to_string()),
                }
                label { "Findings (describe radiological findings)" }
                textarea {
                    style: AREA_STYLE,
                    value: "{findings}",
                    oninput: move |evt| findings.set(evt.value().to_string()),
                }
                label { "Impression / Conclusion" }
                textarea {
                    style: AREA_STYLE,
                    value: "{impression}",
                    oninput: move |evt| impression.set(evt.value().to_string()),
                }
                label { "Reporting Doctor / Radiologist" }
                input {
                    style: FIELD_STYLE,
                    value: "{doctor_name}",
                    oninput: move |evt| doctor_name.set(evt.value().to_string()),
                }
            }

            // Optional signature image
            section { style: "margin: 16px 0;",
                h3 { "Signature (optional)" }
                if let Some(ref name) = *signature_name.read() {
                    div { style: "display: flex; align-items: center; gap: 8px;",
                        p { "Selected: {name}" }
                        button {
                            style: "padding: 4px 12px; border-radius: 4px; border: 1px solid #ccc; background: white; font-size: 12px;",
                            onclick: move |_| {
                                signature_name.set(None);
                                signature_bytes.set(None);
                            },
                            "Clear"
                        }
                    }
                } else {
                    button {
                        style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white;",
                        onclick: move |_| {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Images", &["png", "jpg", "jpeg"])
                                .pick_file()
                            {
                                let name = path.file_name()
                                    .map(|n| n.to_string_lossy().to_string())
                                    .unwrap_or_else(|| "signature".into());

                                match std::fs::read(&path) {
                                    Ok(bytes) => {
                                        tracing::info!(file = %name, bytes = bytes.len(), "signature loaded");
                                        signature_bytes.set(Some(bytes));
                                        signature_name.set(Some(name));
                                    }
                                    Err(e) => {
                                        tracing::error!(error = %e, "failed to read signature file");
                                        state.write().status_message =
                                            Some(format!("Could not read that file. {e}"));
                                    }
                                }
                            }
                        },
                        "Upload signature image"
                    }
                }
            }

            // Generate button
            button {
                style: "width: 100%; padding: 16px; border-radius: 12px; border: none; background: #007aff; color: white; font-size: 18px; font-weight: bold;",
                onclick: move |_| {
                    let request = ReportRequest {
                        patient_name: patient_name.read().clone(),
                        age: age.read().clone(),
                        sex: sex.read().clone(),
                        hospital_no: hospital_no.read().clone(),
                        referring_physician: referring_physician.read().clone(),
                        date_of_exam: *date_of_exam.read(),
                        xray_type: resolve_xray_type(&xray_choice.read(), &xray_other.read()),
                        clinical_history: clinical_history.read().clone(),
                        findings: findings.read().clone(),
                        impression: impression.read().clone(),
                        doctor_name: doctor_name.read().clone(),
                        signature_image: signature_bytes.read().clone(),
                    };
                    let config = state.read().config.clone();

                    let outputs = report_service::generate(&request, &config);
                    let mut st = state.write();
                    st.outputs = Some(outputs);
                    st.status_message = Some("Report generated — download below".into());
                },
                "Generate Report"
            }

            if let Some(msg) = state.read().status_message.clone() {
                p { style: "margin-top: 8px; color: #666; font-size: 14px; text-align: center;",
                    "{msg}"
                }
            }

            // Results
            {
                let outputs = state.read().outputs.clone();
                let show_warnings = state.read().config.show_export_warnings;
                match outputs {
                    Some(outputs) => rsx! {
                        section { style: "margin: 16px 0;",
                            if show_warnings && !outputs.warnings.is_empty() {
                                div { style: "padding: 12px; border-radius: 8px; background: #fff3cd; color: #856404; margin-bottom: 12px;",
                                    for warning in outputs.warnings.iter().map(|w| w.to_string()) {
                                        p { style: "margin: 4px 0; font-size: 14px;", "{warning}" }
                                    }
                                }
                            }

                            h3 { "Preview" }
                            pre {
                                style: "padding: 12px; border: 1px solid #e0e0e0; border-radius: 8px; background: #fafafa; font-size: 13px; white-space: pre-wrap; user-select: text;",
                                "{outputs.text}"
                            }
                            p { style: "color: #888; font-size: 12px;",
                                "Copy report text — select above and copy (Ctrl+C / Cmd+C)."
                            }

                            div { style: "display: flex; gap: 8px;",
                                if outputs.pdf.is_some() {
                                    button {
                                        style: "flex: 1; padding: 12px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white;",
                                        onclick: move |_| {
                                            let doc = state.read().outputs.as_ref().and_then(|o| o.pdf.clone());
                                            if let Some(doc) = doc {
                                                save_with_dialog(state, &doc, "PDF document", "pdf");
                                            }
                                        },
                                        "Save PDF"
                                    }
                                }
                                if outputs.docx.is_some() {
                                    button {
                                        style: "flex: 1; padding: 12px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white;",
                                        onclick: move |_| {
                                            let doc = state.read().outputs.as_ref().and_then(|o| o.docx.clone());
                                            if let Some(doc) = doc {
                                                save_with_dialog(state, &doc, "Word document", "docx");
                                            }
                                        },
                                        "Save DOCX"
                                    }
                                }
                            }
                        }
                    },
                    None => rsx! {
                        p { style: "color: #888; text-align: center; margin-top: 16px;",
                            "Fill in the case details and press Generate Report."
                        }
                    },
                }
            }
        }
    }
}

/// Resolve the dropdown choice (plus the free-text field shown for "Other")
/// into the examination type recorded on the request.
fn resolve_xray_type(choice: &str, other: &str) -> XrayType {
    match XrayType::from_label(choice) {
        Some(fixed) => fixed,
        None => XrayType::Other(other.trim().to_string()),
    }
}

/// Ask the user where to save, then write the document there.
fn save_with_dialog(mut state: Signal<AppState>, doc: &NamedDocument, filter: &str, ext: &str) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(doc.filename.as_str())
        .add_filter(filter, &[ext])
        .save_file()
    else {
        return;
    };

    match report_service::save_document(doc, &path) {
        Ok(()) => {
            state.write().status_message = Some(format!("Saved {}", path.display()));
        }
        Err(e) => {
            tracing::error!(error = %e, "save failed");
            state.write().status_message = Some(format!("Save failed: {e}"));
        }
    }
}
