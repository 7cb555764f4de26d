//! Template Renderer: turns a résumé document into a standalone HTML page.
//!
//! A `ThemeEngine` wraps a handlebars registry built once at startup with the
//! configured theme; rendering is a pure function of the input document, so a
//! single engine is shared by every request behind an `Arc`.
//!
//! The résumé document is opaque to the rest of the service and stays opaque
//! here: fields the theme does not know are ignored, missing fields render
//! empty. The one structural requirement is a JSON object at the top level.

use std::str::FromStr;

use handlebars::{Context, Handlebars, Helper, HelperResult, JsonRender, Output, RenderContext};
use serde_json::Value;
use thiserror::Error;

mod theme_even;

// ────────────────────────────────────────────────────────────────────────────
// Themes
// ────────────────────────────────────────────────────────────────────────────

/// A bundled résumé theme.
///
/// One theme ships today. The enum keeps the `THEME` env var honest:
/// unknown names fail at startup instead of failing on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Even,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Even => "even",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Theme::Even => theme_even::TEMPLATE,
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown theme '{0}' (bundled themes: even)")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "even" => Ok(Theme::Even),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("resume document must be a JSON object")]
    NotAnObject,

    #[error("theme template is invalid: {0}")]
    Template(String),

    #[error("theme evaluation failed: {0}")]
    Evaluate(#[from] handlebars::RenderError),
}

/// The template renderer shared across all requests.
pub struct ThemeEngine {
    registry: Handlebars<'static>,
    theme: Theme,
}

impl ThemeEngine {
    pub fn new(theme: Theme) -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.register_helper("fmt_date", Box::new(fmt_date_helper));
        registry
            .register_template_string(theme.name(), theme.template())
            .map_err(|e| RenderError::Template(e.to_string()))?;

        Ok(Self { registry, theme })
    }

    /// Renders a résumé document to HTML markup.
    ///
    /// Fails only on structurally invalid input (non-object) or a template
    /// evaluation error, never on missing résumé fields.
    pub fn render(&self, resume: &Value) -> Result<String, RenderError> {
        if !resume.is_object() {
            return Err(RenderError::NotAnObject);
        }

        Ok(self.registry.render(self.theme.name(), resume)?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `{{fmt_date "2016-08-24"}}` → `Aug 2016`.
///
/// Accepts the résumé-schema date shapes `YYYY`, `YYYY-MM` and `YYYY-MM-DD`;
/// anything else is written through untouched.
fn fmt_date_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).map(|p| p.value());
    match value.and_then(|v| v.as_str()) {
        Some(raw) => out.write(&format_date(raw))?,
        None => {
            if let Some(v) = value {
                out.write(&v.render())?;
            }
        }
    }
    Ok(())
}

fn format_date(raw: &str) -> String {
    let mut parts = raw.trim().splitn(3, '-');
    let year = parts.next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    match parts.next() {
        None => year.to_string(),
        Some(month) => match month.parse::<usize>() {
            Ok(m @ 1..=12) => format!("{} {year}", MONTHS[m - 1]),
            _ => raw.to_string(),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine() -> ThemeEngine {
        ThemeEngine::new(Theme::Even).expect("bundled theme must register")
    }

    #[test]
    fn test_theme_parses_case_insensitively() {
        assert_eq!("even".parse::<Theme>().unwrap(), Theme::Even);
        assert_eq!("EVEN".parse::<Theme>().unwrap(), Theme::Even);
        assert!("flat".parse::<Theme>().is_err());
    }

    #[test]
    fn test_render_includes_the_candidate_name() {
        let html = engine()
            .render(&json!({"basics": {"name": "Ada Lovelace"}}))
            .unwrap();
        assert!(html.contains("Ada Lovelace"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_render_tolerates_an_empty_document() {
        // Résumés are sparse; a bare object must still produce a page.
        let html = engine().render(&json!({})).unwrap();
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_render_rejects_non_object_documents() {
        let err = engine().render(&json!("just a string")).unwrap_err();
        assert!(matches!(err, RenderError::NotAnObject));

        let err = engine().render(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, RenderError::NotAnObject));
    }

    #[test]
    fn test_render_escapes_html_in_field_values() {
        let html = engine()
            .render(&json!({"basics": {"name": "<script>alert(1)</script>"}}))
            .unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_work_entries_render_dates_and_highlights() {
        let html = engine()
            .render(&json!({
                "basics": {"name": "Ada Lovelace"},
                "work": [{
                    "name": "Analytical Engines Ltd",
                    "position": "Programmer",
                    "startDate": "2016-08-24",
                    "highlights": ["Wrote the first program"]
                }]
            }))
            .unwrap();
        assert!(html.contains("Analytical Engines Ltd"));
        assert!(html.contains("Aug 2016"));
        assert!(html.contains("Present")); // open-ended engagement
        assert!(html.contains("Wrote the first program"));
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let html = engine()
            .render(&json!({
                "basics": {"name": "Ada Lovelace"},
                "x-custom-section": {"anything": true}
            }))
            .unwrap();
        assert!(!html.contains("x-custom-section"));
    }

    #[test]
    fn test_format_date_shapes() {
        assert_eq!(format_date("2016-08-24"), "Aug 2016");
        assert_eq!(format_date("2016-08"), "Aug 2016");
        assert_eq!(format_date("2016"), "2016");
        assert_eq!(format_date("2016-13"), "2016-13"); // nonsense month: passthrough
        assert_eq!(format_date("soon"), "soon");
    }
}
