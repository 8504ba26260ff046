use std::fmt::{self, Write};

use crate::error::{SceneError, SceneResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Serializes frames into standalone SVG documents.
///
/// Circles with hover text get a `<title>` child, so viewers that support
/// native SVG tooltips show the same content the interactive tooltip does.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    font_family: String,
    document: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            document: String::new(),
        }
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Last rendered document, empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Renders `frame` and returns the document.
    pub fn render_to_string(&mut self, frame: &RenderFrame) -> SceneResult<String> {
        self.render(frame)?;
        Ok(self.document.clone())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SceneResult<()> {
        frame.validate()?;

        let mut document = String::with_capacity(256 + frame.element_count() * 96);
        write_document(&mut document, frame, &self.font_family)
            .map_err(|err| SceneError::InvalidData(format!("failed to format svg: {err}")))?;
        self.document = document;
        Ok(())
    }
}

fn write_document(out: &mut String, frame: &RenderFrame, font_family: &str) -> fmt::Result {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{}">"#,
        escape_xml(font_family)
    )?;

    write_rects(out, &frame.rects)?;

    for polyline in &frame.polylines {
        out.push_str("  <path d=\"");
        for (index, point) in polyline.points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            write!(out, "{command}{:.2},{:.2}", point.x, point.y)?;
        }
        writeln!(
            out,
            r#"" fill="none" stroke-width="{:.2}" stroke-linejoin="round" {}/>"#,
            polyline.stroke_width,
            paint_attrs("stroke", polyline.color)
        )?;
    }

    for line in &frame.lines {
        writeln!(
            out,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke-width="{:.2}" {}/>"#,
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            line.stroke_width,
            paint_attrs("stroke", line.color)
        )?;
    }

    for circle in &frame.circles {
        write!(
            out,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" {} stroke-width="{:.2}" {}"#,
            circle.cx,
            circle.cy,
            circle.radius,
            paint_attrs("fill", circle.fill),
            circle.stroke_width,
            paint_attrs("stroke", circle.stroke)
        )?;
        match &circle.hover_text {
            Some(text) => writeln!(out, "><title>{}</title></circle>", escape_xml(text))?,
            None => out.push_str("/>\n"),
        }
    }

    write_texts(out, &frame.texts)?;
    write_rects(out, &frame.overlay_rects)?;
    write_texts(out, &frame.overlay_texts)?;

    out.push_str("</svg>\n");
    Ok(())
}

fn write_rects(out: &mut String, rects: &[RectPrimitive]) -> fmt::Result {
    for rect in rects {
        write!(
            out,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" {}"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            paint_attrs("fill", rect.fill)
        )?;
        if let Some(stroke) = rect.stroke {
            write!(out, r#" {}"#, paint_attrs("stroke", stroke))?;
        }
        out.push_str("/>\n");
    }
    Ok(())
}

fn write_texts(out: &mut String, texts: &[TextPrimitive]) -> fmt::Result {
    for text in texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        write!(
            out,
            r#"  <text x="{:.2}" y="{:.2}" font-size="{:.1}" text-anchor="{anchor}" {}"#,
            text.x,
            text.y,
            text.font_size_px,
            paint_attrs("fill", text.color)
        )?;
        if text.rotation_deg != 0.0 {
            write!(
                out,
                r#" transform="rotate({:.1} {:.2} {:.2})""#,
                text.rotation_deg, text.x, text.y
            )?;
        }
        writeln!(out, ">{}</text>", escape_xml(&text.text))?;
    }
    Ok(())
}

fn paint_attrs(attribute: &str, color: Color) -> String {
    let (red, green, blue) = color.to_rgb8();
    if color.alpha < 1.0 {
        format!(
            r#"{attribute}="rgb({red},{green},{blue})" {attribute}-opacity="{:.3}""#,
            color.alpha
        )
    } else {
        format!(r#"{attribute}="rgb({red},{green},{blue})""#)
    }
}

/// Escapes text for element content and attribute values.
#[must_use]
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
