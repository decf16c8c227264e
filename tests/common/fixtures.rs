//! Fixture page builders and collaborators for pipeline tests.

use almanac::{
    Axis, CalendarEvent, EventSource, GridRect, LayoutNode, PageBuilder, PageContext,
    PageTypeRegistry, ParamValue, Params, PipelineError, TrackSizing, WeekRef,
};
use chrono::NaiveDate;
use std::cell::Cell;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Weeks of a fictional planner year starting Thursday, 2026-01-01.
pub fn week(number: u32) -> WeekRef {
    let start = date(2026, 1, 1) + chrono::Days::new(7 * (number as u64 - 1));
    WeekRef::new(number, start, start + chrono::Days::new(6))
}

/// A title page: one centered text block over a background stamp.
pub struct CoverPage;

impl PageBuilder for CoverPage {
    fn generate(&self, ctx: &mut PageContext) -> Result<(), PipelineError> {
        let bounds = ctx.grid.bounds();
        ctx.surface.stamp_background("dots", bounds)?;
        ctx.surface.draw_text(bounds, "Almanac")?;
        Ok(())
    }
}

/// A weekly spread: header band, seven day columns, neighbor-week links,
/// and the week's calendar events.
pub struct WeeklyPage;

impl PageBuilder for WeeklyPage {
    fn generate(&self, ctx: &mut PageContext) -> Result<(), PipelineError> {
        ctx.layout.push_child(
            LayoutNode::container(Axis::Vertical, 1)
                .named("body")
                .child(LayoutNode::frame().named("header").height(4))
                .child(
                    LayoutNode::columns(TrackSizing::Count(7), 0)?
                        .named("days")
                        .flex(1),
                ),
        );
        ctx.layout
            .compute_bounds(0, 0, ctx.grid.columns, ctx.grid.rows);

        let body = ctx
            .layout
            .child_named("body")
            .ok_or_else(|| PipelineError::Other("weekly body missing".to_string()))?;
        let header = body
            .child_named("header")
            .and_then(|n| n.bounds())
            .ok_or_else(|| PipelineError::Other("weekly header missing".to_string()))?;
        let days: Vec<GridRect> = body
            .child_named("days")
            .map(|days| days.children().iter().filter_map(|c| c.bounds()).collect())
            .unwrap_or_default();

        let week_num = ctx
            .params
            .get("week_num")
            .and_then(ParamValue::as_i64)
            .unwrap_or(0);
        ctx.surface
            .draw_text(header, &format!("Week {}", week_num))?;
        for day in days {
            ctx.surface.draw_frame(day)?;
        }

        if let Some(week) = ctx.params.get("week").cloned() {
            if let ParamValue::Week(week) = week {
                let titles: Vec<String> = ctx
                    .events_between(week.start, week.end)
                    .map(|event| event.title.clone())
                    .collect();
                for title in titles {
                    ctx.surface.draw_text(header, &title)?;
                }
            }
        }

        let prev = ctx.links.previous_week().map(|d| d.key.clone());
        let next = ctx.links.next_week().map(|d| d.key.clone());
        if let Some(prev) = prev {
            ctx.surface
                .link_annotation(GridRect::new(0, header.bottom(), 2, 1), &prev)?;
        }
        if let Some(next) = next {
            ctx.surface.link_annotation(
                GridRect::new(ctx.grid.columns - 2, header.bottom(), 2, 1),
                &next,
            )?;
        }
        Ok(())
    }

    fn title(&self, params: &Params) -> Option<String> {
        match params.get("week")? {
            ParamValue::Week(week) => Some(format!("Week {}", week.number)),
            _ => None,
        }
    }
}

/// A dotted notes page with a tab linking to the next page of its group.
pub struct NotesPage;

impl PageBuilder for NotesPage {
    fn generate(&self, ctx: &mut PageContext) -> Result<(), PipelineError> {
        let bounds = ctx.grid.bounds();
        ctx.surface.stamp_background("dots", bounds)?;

        let next = ctx
            .links
            .next_in_cycle("tabs", &ctx.destination)
            .map(|d| d.key.clone());
        if let Some(next) = next {
            let tab = GridRect::new(ctx.grid.columns - 4, ctx.grid.rows - 2, 4, 2);
            ctx.surface.link_annotation(tab, &next)?;
        }
        Ok(())
    }
}

/// Always fails; exercises the abort path.
pub struct FailingPage;

impl PageBuilder for FailingPage {
    fn generate(&self, _ctx: &mut PageContext) -> Result<(), PipelineError> {
        Err(PipelineError::Other("intentional fixture failure".to_string()))
    }
}

pub fn page_types() -> PageTypeRegistry {
    let mut registry = PageTypeRegistry::new();
    registry.register("cover", CoverPage);
    registry.register("weekly", WeeklyPage);
    registry.register("notes", NotesPage);
    registry.register("failing", FailingPage);
    registry
}

/// Event source that counts fetches and serves a fixed feed.
pub struct CountingEvents {
    pub fetches: Cell<usize>,
    pub events: Vec<CalendarEvent>,
}

impl CountingEvents {
    pub fn with_events(events: Vec<CalendarEvent>) -> Self {
        Self {
            fetches: Cell::new(0),
            events,
        }
    }
}

impl EventSource for CountingEvents {
    fn fetch(&self) -> Result<Vec<CalendarEvent>, PipelineError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.events.clone())
    }
}
