//! The per-page render context.

use crate::events::CalendarEvent;
use crate::theme::Theme;
use almanac_compose::LinkResolver;
use almanac_layout::LayoutNode;
use almanac_render_core::DocumentSurface;
use almanac_types::{PageGrid, ParamValue, Params};

/// Everything a page builder sees while drawing one page: the merged
/// parameter map, a link resolver scoped to the page's declared type and
/// params, a fresh layout tree already sized to the page grid, and the
/// drawing surface.
pub struct PageContext<'a> {
    pub page_number: usize,
    pub page_type: &'a str,
    /// This page's own destination key, as registered.
    pub destination: String,
    pub params: Params,
    pub links: LinkResolver<'a>,
    pub layout: LayoutNode,
    pub grid: PageGrid,
    pub theme: Theme,
    pub events: &'a [CalendarEvent],
    pub surface: &'a mut dyn DocumentSurface,
}

impl PageContext<'_> {
    /// Events falling inside an inclusive date range, in input order.
    pub fn events_between(
        &self,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> impl Iterator<Item = &CalendarEvent> {
        self.events
            .iter()
            .filter(move |event| event.date >= start && event.date <= end)
    }
}

/// Merges global state with one page's params; page values win.
///
/// This is the single point where parameter variants are interpreted:
/// week and month references additionally derive the convenience keys
/// page builders read (`week_num`, `month_num`, `month_name`).
pub fn merge_params(globals: &Params, page: &Params) -> Params {
    let mut merged = globals.clone();
    for (key, value) in page {
        match value {
            ParamValue::Plain(_) => {}
            ParamValue::Week(week) => {
                merged.insert(
                    "week_num".to_string(),
                    ParamValue::int(week.number as i64),
                );
            }
            ParamValue::Month(month) => {
                merged.insert(
                    "month_num".to_string(),
                    ParamValue::int(month.number as i64),
                );
                merged.insert("month_name".to_string(), ParamValue::str(&month.name));
            }
        }
        merged.insert(key.clone(), value.clone());
    }
    merged
}
