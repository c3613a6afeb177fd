// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF exporter — render assembled report lines into a PDF using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use std::path::Path;

use chrono::{DateTime, Local};
use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, TextItem,
    XObjectTransform,
};
use roentgen_core::PaperSize;
use roentgen_core::error::Result;
use roentgen_core::report::REPORT_TITLE;
use tracing::{debug, info, instrument};

use crate::signature::SignatureImage;

const TITLE_FONT_SIZE_PT: f32 = 14.0;
const BODY_FONT_SIZE_PT: f32 = 11.0;
const LINE_HEIGHT_PT: f32 = 14.0;
const FOOTER_FONT_SIZE_PT: f32 = 8.0;
const MARGIN_MM: f32 = 20.0;
/// Footer baseline height above the page bottom. Must stay below the body
/// margin so body text never collides with the footer.
const FOOTER_BASELINE_MM: f32 = 12.0;
/// Signature block position: left edge offset and rendered width.
const SIGNATURE_X_MM: f32 = 150.0;
const SIGNATURE_WIDTH_MM: f32 = 40.0;
/// Average Helvetica glyph width is roughly 0.50 x font size in pt.
const AVG_GLYPH_FACTOR: f32 = 0.50;
const MM_PER_PT: f32 = 0.3528;

/// Renders assembled report lines (plus an optional signature image) into a
/// PDF document: centered bold title, wrapped body paragraphs, a
/// generated-timestamp footer on every page, and automatic page breaks.
pub struct PdfExporter {
    /// Paper size for page creation.
    paper_size: PaperSize,
    /// Title metadata embedded in the PDF /Info dictionary.
    title: String,
    /// Fixed footer timestamp; `None` reads the clock at export time.
    generated_at: Option<DateTime<Local>>,
}

impl PdfExporter {
    /// Create a new exporter targeting the given paper size.
    pub fn new(paper_size: PaperSize) -> Self {
        Self {
            paper_size,
            title: REPORT_TITLE.to_string(),
            generated_at: None,
        }
    }

    /// Create a new exporter defaulting to A4.
    pub fn a4() -> Self {
        Self::new(PaperSize::A4)
    }

    /// Pin the footer timestamp instead of reading the clock at export time.
    /// Used for reproducible output in tests and benches.
    pub fn set_generated_at(&mut self, at: DateTime<Local>) {
        self.generated_at = Some(at);
    }

    /// Paper dimensions in printpdf's Mm units.
    fn page_dimensions(&self) -> (Mm, Mm) {
        let (w_mm, h_mm) = self.paper_size.dimensions_mm();
        (Mm(w_mm as f32), Mm(h_mm as f32))
    }

    /// Render report lines to PDF bytes.
    ///
    /// The first page carries the centered bold title; body lines flow
    /// top-to-bottom at a fixed line height, wrapped at an estimated character
    /// width, breaking onto new pages as needed. The signature, when present,
    /// is placed right of center below the last body line, clamped above the
    /// footer strip.
    #[instrument(
        skip(self, lines, signature),
        fields(line_count = lines.len(), has_signature = signature.is_some())
    )]
    pub fn export(&self, lines: &[String], signature: Option<&SignatureImage>) -> Result<Vec<u8>> {
        let (page_w, page_h) = self.page_dimensions();
        info!(paper = ?self.paper_size, "Rendering report PDF");

        let page_w_pt = page_w.into_pt().0;
        let page_h_pt = page_h.into_pt().0;
        let margin_pt = Mm(MARGIN_MM).into_pt().0;

        let usable_width_mm = page_w.0 - 2.0 * MARGIN_MM;
        let avg_char_width_mm = AVG_GLYPH_FACTOR * BODY_FONT_SIZE_PT * MM_PER_PT;
        let max_chars_per_line = (usable_width_mm / avg_char_width_mm) as usize;
        let wrapped = wrap_lines(lines, max_chars_per_line);

        let footer = format!(
            "Generated on {}",
            self.generated_at
                .unwrap_or_else(Local::now)
                .format("%d-%m-%Y %H:%M")
        );
        let footer_y_pt = Mm(FOOTER_BASELINE_MM).into_pt().0;

        let lines_per_page = ((page_h_pt - 2.0 * margin_pt) / LINE_HEIGHT_PT) as usize;
        // The title plus its gap consume two line slots on the first page.
        let first_page_capacity = lines_per_page.saturating_sub(2);

        let mut doc = PdfDocument::new(&self.title);

        // Build per-page op lists first; the signature is appended to the
        // last page before the pages are materialised.
        let mut page_ops: Vec<Vec<Op>> = Vec::new();
        let mut last_body_y_pt = page_h_pt - margin_pt;
        let mut line_iter = wrapped.iter().peekable();

        loop {
            let first_page = page_ops.is_empty();
            let mut ops: Vec<Op> = Vec::new();
            let mut y_top_pt = page_h_pt - margin_pt;

            if first_page {
                ops.extend(centered_text_ops(
                    &self.title,
                    BuiltinFont::HelveticaBold,
                    TITLE_FONT_SIZE_PT,
                    y_top_pt,
                    page_w_pt,
                ));
                y_top_pt -= 2.0 * LINE_HEIGHT_PT;
            }

            let capacity = if first_page {
                first_page_capacity
            } else {
                lines_per_page
            };

            let mut used = 0;
            while used < capacity {
                let line = match line_iter.next() {
                    Some(l) => l,
                    None => break,
                };
                let y_pt = y_top_pt - (used as f32 * LINE_HEIGHT_PT);
                if !line.is_empty() {
                    ops.extend(text_ops(
                        line,
                        BuiltinFont::Helvetica,
                        BODY_FONT_SIZE_PT,
                        margin_pt,
                        y_pt,
                    ));
                }
                last_body_y_pt = y_pt;
                used += 1;
            }

            ops.extend(centered_text_ops(
                &footer,
                BuiltinFont::HelveticaOblique,
                FOOTER_FONT_SIZE_PT,
                footer_y_pt,
                page_w_pt,
            ));

            page_ops.push(ops);
            if line_iter.peek().is_none() {
                break;
            }
        }

        if let Some(sig) = signature {
            let raw = sig.to_raw_image();
            let image_id = doc.add_image(&raw);

            // Scale to the fixed signature width at 150 DPI native size.
            let dpi: f32 = 150.0;
            let target_w_pt = Mm(SIGNATURE_WIDTH_MM).into_pt().0;
            let native_w_pt = raw.width as f32 / dpi * 72.0;
            let native_h_pt = raw.height as f32 / dpi * 72.0;
            let scale = target_w_pt / native_w_pt;
            let rendered_h_pt = native_h_pt * scale;

            // One line of clearance below the last body line; never into the
            // footer strip.
            let floor_pt = Mm(FOOTER_BASELINE_MM + 4.0).into_pt().0;
            let y_offset = (last_body_y_pt - LINE_HEIGHT_PT - rendered_h_pt).max(floor_pt);

            let sig_ops = vec![Op::UseXobject {
                id: image_id,
                transform: XObjectTransform {
                    translate_x: Some(Pt(Mm(SIGNATURE_X_MM).into_pt().0)),
                    translate_y: Some(Pt(y_offset)),
                    scale_x: Some(scale),
                    scale_y: Some(scale),
                    dpi: Some(dpi),
                    rotate: None,
                },
            }];
            if let Some(last) = page_ops.last_mut() {
                last.extend(sig_ops);
            }
            debug!(scale, rendered_h_pt, "Signature placed on last page");
        }

        let pages: Vec<PdfPage> = page_ops
            .into_iter()
            .map(|ops| PdfPage::new(page_w, page_h, ops))
            .collect();
        doc.with_pages(pages);

        debug!(
            total_lines = wrapped.len(),
            pages = doc.pages.len(),
            "Report layout complete"
        );

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);

        Ok(output)
    }

    /// Render the report and write it directly to a file.
    pub fn write_to_file(
        &self,
        lines: &[String],
        signature: Option<&SignatureImage>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.export(lines, signature)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote report PDF to {}", path.as_ref().display());
        Ok(())
    }
}

// -- Text op helpers ----------------------------------------------------------

fn text_ops(text: &str, font: BuiltinFont, size_pt: f32, x_pt: f32, y_pt: f32) -> [Op; 5] {
    [
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: Point {
                x: Pt(x_pt),
                y: Pt(y_pt),
            },
        },
        Op::SetFontSizeBuiltinFont {
            size: Pt(size_pt),
            font,
        },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font,
        },
        Op::EndTextSection,
    ]
}

/// Horizontally centered text, positioned by the same estimated glyph width
/// the wrap computation uses.
fn centered_text_ops(
    text: &str,
    font: BuiltinFont,
    size_pt: f32,
    y_pt: f32,
    page_w_pt: f32,
) -> [Op; 5] {
    let est_width_pt = text.chars().count() as f32 * AVG_GLYPH_FACTOR * size_pt;
    let x_pt = ((page_w_pt - est_width_pt) / 2.0).max(0.0);
    text_ops(text, font, size_pt, x_pt, y_pt)
}

// -- Line wrapping ------------------------------------------------------------

/// Word-wrap assembled lines so none exceeds `max_width` characters.
///
/// Assembled lines are already paragraph-split, so wrapping happens within
/// each line. Empty lines survive as empty lines (vertical gaps). Words
/// longer than `max_width` are force-broken.
fn wrap_lines(lines: &[String], max_width: usize) -> Vec<String> {
    let mut result = Vec::new();

    for line in lines {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            result.push(String::new());
            continue;
        }

        let mut current = String::with_capacity(max_width);
        for word in words {
            if word.len() > max_width {
                if !current.is_empty() {
                    result.push(current.clone());
                    current.clear();
                }
                let mut remaining = word;
                while remaining.len() > max_width {
                    let (chunk, rest) = remaining.split_at(max_width);
                    result.push(chunk.to_string());
                    remaining = rest;
                }
                if !remaining.is_empty() {
                    current.push_str(remaining);
                }
            } else if current.is_empty() {
                current.push_str(word);
            } else if current.len() + 1 + word.len() <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                result.push(current.clone());
                current.clear();
                current.push_str(word);
            }
        }

        if !current.is_empty() {
            result.push(current);
        }
    }

    result
}
