use fss_core::{ListingView, MarkerId, Positioner, Rect};

use super::constants::*;

/// Estimates marker geometry from a fixed row layout: one header line, then
/// one row per entry with the marker right after the entry name.
pub struct GridPositioner {
    header_right: f64,
    entry_rights: Vec<f64>,
}

impl GridPositioner {
    pub fn for_view(view: &ListingView) -> Self {
        let header_chars: usize = 1 + view
            .crumbs
            .iter()
            .map(|crumb| crumb.label.chars().count() + 1)
            .sum::<usize>();
        let entry_rights = view
            .entries
            .iter()
            .map(|entry| LIST_INDENT + text_width(entry.name.chars().count()) + MARKER_WIDTH)
            .collect();
        Self {
            header_right: text_width(header_chars) * 2.0 + MARKER_WIDTH,
            entry_rights,
        }
    }
}

impl Positioner for GridPositioner {
    fn marker_rect(&self, marker: MarkerId) -> Option<Rect> {
        match marker {
            MarkerId::Header => Some(Rect {
                left: self.header_right - MARKER_WIDTH,
                top: HEADER_TOP,
                right: self.header_right,
                bottom: HEADER_TOP + HEADER_HEIGHT,
            }),
            MarkerId::Entry(index) => self.entry_rights.get(index).map(|&right| {
                let top = LIST_TOP + ROW_HEIGHT * index as f64;
                Rect {
                    left: right - MARKER_WIDTH,
                    top,
                    right,
                    bottom: top + ROW_HEIGHT,
                }
            }),
        }
    }
}

fn text_width(chars: usize) -> f64 {
    chars as f64 * CHAR_WIDTH
}
