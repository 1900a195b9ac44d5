//! # Snapshot Renderers
//!
//! Renderers write a [`SiteSnapshot`] and, optionally, a trace of view events
//! to any [`Write`] sink. The binary uses stdout.

use anyhow::Result;
use std::io::Write;

use super::snapshot::SiteSnapshot;
use crate::site::events::ViewEvent;

/// Trait for rendering views
pub trait ViewRenderer {
    /// Render the final page state
    fn render_snapshot(&mut self, snapshot: &SiteSnapshot) -> Result<()>;

    /// Handle a single view event as it is published
    fn handle_view_event(&mut self, _event: &ViewEvent) -> Result<()> {
        Ok(())
    }
}

/// Human readable, line oriented output
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn on_off(flag: bool, on: &'static str, off: &'static str) -> &'static str {
    if flag {
        on
    } else {
        off
    }
}

impl<W: Write> ViewRenderer for TextRenderer<W> {
    fn render_snapshot(&mut self, snapshot: &SiteSnapshot) -> Result<()> {
        let out = &mut self.out;
        writeln!(out, "location:  #{}", snapshot.fragment)?;
        writeln!(out, "scroll:    {}", snapshot.scroll_top)?;
        writeln!(
            out,
            "page:      {}",
            snapshot
                .active_page
                .as_ref()
                .map(|page| page.as_str())
                .unwrap_or("(none)")
        )?;
        let links: Vec<_> = snapshot
            .highlighted_links
            .iter()
            .map(|page| page.as_str())
            .collect();
        writeln!(out, "nav:       {}", links.join(", "))?;
        writeln!(out, "menu:      {}", on_off(snapshot.menu_open, "open", "closed"))?;

        if !snapshot.sections.is_empty() {
            writeln!(out, "sections:")?;
            for state in &snapshot.sections {
                let content = match state.content_collapsed {
                    Some(collapsed) => on_off(collapsed, "hidden", "shown"),
                    None => "no content",
                };
                writeln!(
                    out,
                    "  {:<16}{} ({})",
                    state.section.as_str(),
                    on_off(state.collapsed, "collapsed", "expanded"),
                    content
                )?;
            }
        }

        writeln!(
            out,
            "form:      {}, banner {}",
            on_off(snapshot.form_visible, "visible", "hidden"),
            on_off(snapshot.banner_visible, "visible", "hidden")
        )?;
        for error in &snapshot.field_errors {
            writeln!(out, "  {:<16}{}", error.field.to_string(), error.message)?;
        }

        writeln!(out, "revealed:  {}", snapshot.revealed.len())?;
        for element in &snapshot.revealed {
            writeln!(out, "  {element}")?;
        }
        for notice in &snapshot.notices {
            writeln!(out, "notice:    {notice}")?;
        }
        out.flush()?;
        Ok(())
    }

    fn handle_view_event(&mut self, event: &ViewEvent) -> Result<()> {
        let line = match event {
            ViewEvent::PageActivated { requested, page } => match page {
                Some(page) => format!("page {page} shown"),
                None => format!("no page '{requested}', all hidden"),
            },
            ViewEvent::MenuToggled { open } => {
                format!("menu {}", on_off(*open, "opened", "closed"))
            }
            ViewEvent::SectionToggled { section, collapsed } => {
                format!("{section} {}", on_off(*collapsed, "collapsed", "expanded"))
            }
            ViewEvent::FieldErrorShown { field, message } => format!("{field}: {message}"),
            ViewEvent::FormSubmitted => "form submitted".to_string(),
            ViewEvent::FormReset => "form reset".to_string(),
            ViewEvent::ElementRevealed { element } => format!("revealed {element}"),
            ViewEvent::NoticeShown { message } => format!("notice: {message}"),
            ViewEvent::Scrolled { top } => format!("scrolled to {top}"),
        };
        writeln!(self.out, "> {line}")?;
        Ok(())
    }
}

/// Pretty printed JSON output
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ViewRenderer for JsonRenderer<W> {
    fn render_snapshot(&mut self, snapshot: &SiteSnapshot) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, snapshot)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
