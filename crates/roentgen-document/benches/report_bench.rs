// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for report rendering in the roentgen-document crate.
// Benchmarks text assembly and PDF export on a realistic multi-section report.

use chrono::{Local, NaiveDate, TimeZone};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use roentgen_core::PaperSize;
use roentgen_core::report;
use roentgen_core::types::{ReportRequest, XrayType};
use roentgen_document::PdfExporter;

fn sample_request() -> ReportRequest {
    let mut req = ReportRequest::dated(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    req.patient_name = "Jane Doe".into();
    req.age = "34".into();
    req.sex = "Female".into();
    req.hospital_no = "OPD-1042".into();
    req.referring_physician = "Dr. Rao".into();
    req.xray_type = XrayType::ChestPa;
    req.clinical_history = "Productive cough for two weeks, low-grade fever.".into();
    req.findings = (0..20)
        .map(|i| format!("Finding {i}: lung fields assessed, no focal lesion identified."))
        .collect::<Vec<_>>()
        .join("\n");
    req.impression = "No active pulmonary disease.".into();
    req.doctor_name = "Dr. Iyer".into();
    req
}

fn bench_assembly(c: &mut Criterion) {
    let request = sample_request();
    c.bench_function("report_lines (multi-section)", |b| {
        b.iter(|| {
            let lines = report::report_lines(black_box(&request));
            black_box(lines);
        });
    });
}

fn bench_pdf_export(c: &mut Criterion) {
    let lines = report::report_lines(&sample_request());
    let mut exporter = PdfExporter::new(PaperSize::A4);
    // Pin the footer timestamp so every iteration renders identical content.
    exporter.set_generated_at(Local.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap());

    c.bench_function("pdf_export (A4, no signature)", |b| {
        b.iter(|| {
            let bytes = exporter.export(black_box(&lines), None).expect("export");
            black_box(bytes);
        });
    });
}

criterion_group!(benches, bench_assembly, bench_pdf_export);
criterion_main!(benches);
