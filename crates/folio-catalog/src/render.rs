//! Rendering collaborators for the visible publication list.
//!
//! The catalog never formats anything itself; after each state change the
//! caller passes the [`VisibleSlice`] to a [`CatalogRenderer`]. Renderers own
//! markup, badge labels, the empty-state message and the "load more" control.

use std::io::Write;

use folio_domain::{Publication, PublicationKind};

use crate::catalog::VisibleSlice;
use crate::error::RenderError;

/// Message shown when the visible slice is empty
pub const EMPTY_STATE_MESSAGE: &str = "No publications found matching your criteria.";

/// Receives the visible slice after every state-changing operation.
pub trait CatalogRenderer {
    fn render(&mut self, view: &VisibleSlice<'_>) -> Result<(), RenderError>;
}

/// Display text of a kind's badge
pub fn badge_label(kind: &PublicationKind) -> &'static str {
    match kind.as_str() {
        PublicationKind::JOURNAL => "Journal",
        PublicationKind::CONFERENCE => "Conference",
        PublicationKind::BOOK => "Book Chapter",
        PublicationKind::REVIEW => "Review",
        PublicationKind::TECHNICAL => "Technical",
        _ => "Publication",
    }
}

/// Style class of a kind's badge
pub fn badge_class(kind: &PublicationKind) -> &'static str {
    match kind.as_str() {
        PublicationKind::CONFERENCE => "badge-conference",
        PublicationKind::BOOK => "badge-book",
        PublicationKind::REVIEW => "badge-review",
        PublicationKind::TECHNICAL => "badge-technical",
        _ => "badge-journal",
    }
}

/// Plain-text list, one block per publication.
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

    fn write_publication(&mut self, p: &Publication) -> std::io::Result<()> {
        writeln!(self.out, "{}", p.title)?;
        if !p.authors.is_empty() {
            writeln!(self.out, "  {}", p.authors)?;
        }
        match (&p.venue, p.year) {
            (Some(venue), Some(year)) => writeln!(self.out, "  {}, {}", venue, year)?,
            (Some(venue), None) => writeln!(self.out, "  {}", venue)?,
            (None, Some(year)) => writeln!(self.out, "  {}", year)?,
            (None, None) => {}
        }

        write!(self.out, "  [{}]", badge_label(&p.kind))?;
        if let Some(status) = &p.status {
            write!(self.out, " ({})", status)?;
        }
        if let Some(citations) = p.citations.filter(|c| *c > 0) {
            write!(self.out, " {} citations", citations)?;
        }
        if let Some(link) = p.link() {
            write!(self.out, " {}", link)?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> CatalogRenderer for TextRenderer<W> {
    fn render(&mut self, view: &VisibleSlice<'_>) -> Result<(), RenderError> {
        if view.is_empty() {
            writeln!(self.out, "{}", EMPTY_STATE_MESSAGE)?;
            return Ok(());
        }

        for (i, p) in view.items.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            self.write_publication(p)?;
        }

        if view.has_more {
            writeln!(
                self.out,
                "\n-- showing {} of {}; load more for the next page --",
                view.len(),
                view.total
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON document per render: `{"items": [...], "has_more": .., "total": ..}`.
pub struct JsonRenderer<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, pretty: false }
    }

    pub fn pretty(out: W) -> Self {
        Self { out, pretty: true }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CatalogRenderer for JsonRenderer<W> {
    fn render(&mut self, view: &VisibleSlice<'_>) -> Result<(), RenderError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, view)?;
        } else {
            serde_json::to_writer(&mut self.out, view)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
