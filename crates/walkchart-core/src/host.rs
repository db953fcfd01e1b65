// File: crates/walkchart-core/src/host.rs
// Summary: Host HTML page that provides the `#chart` container the SVG is mounted into.

use std::path::Path;
use std::time::Duration;

use crate::error::{ChartError, Result};

/// Selector of the container the chart mounts into.
pub const CHART_SELECTOR: &str = "#chart";

const DEFAULT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Random walk</title>
<style>body { font-family: sans-serif; margin: 2rem; }</style>
</head>
<body>
<div id="chart"></div>
</body>
</html>
"#;

/// An HTML document hosting the chart. The chart itself never creates its container.
#[derive(Clone, Debug)]
pub struct HostPage {
    html: String,
    refresh: Option<Duration>,
}

impl Default for HostPage {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE)
    }
}

impl HostPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into(), refresh: None }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }

    /// Ask browsers to reload the page every `period`, so a page rewritten on each
    /// tick shows up as a live chart.
    pub fn with_refresh(mut self, period: Duration) -> Self {
        self.refresh = Some(period);
        self
    }

    /// Whether the page contains an element matching an `#id` selector.
    pub fn has_container(&self, selector: &str) -> bool {
        self.container_end(selector).is_some()
    }

    /// Return the page with `svg` placed as the first child of the element matching
    /// `selector` (only `#id` selectors are supported).
    pub fn mount(&self, selector: &str, svg: &str) -> Result<String> {
        let insert_at = self
            .container_end(selector)
            .ok_or_else(|| ChartError::container_not_found(selector))?;

        let mut out = String::with_capacity(self.html.len() + svg.len() + 64);
        let head = &self.html[..insert_at];
        match (self.refresh, head.find("<head>")) {
            (Some(period), Some(pos)) => {
                let pos = pos + "<head>".len();
                out.push_str(&head[..pos]);
                out.push_str(&format!(
                    "\n<meta http-equiv=\"refresh\" content=\"{:.3}\">",
                    period.as_secs_f64()
                ));
                out.push_str(&head[pos..]);
            }
            _ => out.push_str(head),
        }
        out.push_str(svg);
        out.push_str(&self.html[insert_at..]);
        Ok(out)
    }

    /// Mount and write the resulting page to `path`.
    pub fn write(&self, selector: &str, svg: &str, path: impl AsRef<Path>) -> Result<()> {
        let page = self.mount(selector, svg)?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, page)?;
        Ok(())
    }

    // Byte offset just past the opening tag of the first element with the selector's id.
    fn container_end(&self, selector: &str) -> Option<usize> {
        let id = selector.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        ['"', '\'']
            .into_iter()
            .filter_map(|quote| {
                let needle = format!("id={quote}{id}{quote}");
                self.html.match_indices(needle.as_str()).find_map(|(attr, _)| self.start_tag_end(attr))
            })
            .min()
    }

    // End of the start tag holding an `id=` attribute found at `attr`, if it is one.
    fn start_tag_end(&self, attr: usize) -> Option<usize> {
        let before = &self.html[..attr];
        // `data-id=` and friends are other attributes.
        if !before.ends_with(|c: char| c.is_ascii_whitespace()) {
            return None;
        }
        let tag = &before[before.rfind('<')?..];
        if tag.contains('>') || !tag[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }
        let close = self.html[attr..].find('>')?;
        Some(attr + close + 1)
    }
}
