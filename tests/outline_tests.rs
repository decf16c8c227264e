mod common;

use almanac::{GroupOptions, PageSpec, PipelineBuilder, SectionDest};
use common::fixtures::{page_types, week};
use common::{OutlineEvent, RecordingOutline, RecordingSurface, TestResult};

fn begin(title: &str, destination: Option<usize>) -> OutlineEvent {
    OutlineEvent::Begin {
        title: title.to_string(),
        destination,
    }
}

fn entry(title: &str, destination: usize) -> OutlineEvent {
    OutlineEvent::Entry {
        title: title.to_string(),
        destination,
    }
}

#[test]
fn nested_sections_resolve_to_page_numbers() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let types = page_types();
    let mut pipeline = PipelineBuilder::new().with_page_types(&types).build()?;
    let mut surface = RecordingSurface::new();
    let mut outline = RecordingOutline::new();

    pipeline.build_document(
        |c| {
            c.page(PageSpec::new("cover"));
            c.outline_section("Weeks", SectionDest::FirstChild, |c| {
                c.page(PageSpec::new("weekly").param("week", week(1)).outline());
                c.page(PageSpec::new("weekly").param("week", week(2)).outline());
                Ok(())
            })?;
            c.outline_entry("cover", "Cover");
            Ok(())
        },
        &mut surface,
        &mut outline,
    )?;

    // Auto titles come from the weekly builder's title lookup; the section
    // header adopts its first child's destination.
    assert_eq!(
        outline.events,
        vec![
            begin("Weeks", Some(2)),
            entry("Week 1", 2),
            entry("Week 2", 3),
            OutlineEvent::End,
            entry("Cover", 1),
        ]
    );
    Ok(())
}

#[test]
fn unresolved_destinations_are_dropped_silently() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let types = page_types();
    let mut pipeline = PipelineBuilder::new().with_page_types(&types).build()?;
    let mut surface = RecordingSurface::new();
    let mut outline = RecordingOutline::new();

    pipeline.build_document(
        |c| {
            c.page(PageSpec::new("cover"));
            c.outline_entry("nowhere", "Ghost");
            c.outline_section("Refs", SectionDest::Key("also-nowhere".to_string()), |c| {
                c.outline_entry("cover", "Home");
                Ok(())
            })?;
            Ok(())
        },
        &mut surface,
        &mut outline,
    )?;

    // The dangling leaf vanishes; the section survives as a non-clickable
    // header because its children still resolve.
    assert_eq!(
        outline.events,
        vec![begin("Refs", None), entry("Home", 1), OutlineEvent::End]
    );
    Ok(())
}

#[test]
fn outlined_group_becomes_a_section() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let types = page_types();
    let mut pipeline = PipelineBuilder::new().with_page_types(&types).build()?;
    let mut surface = RecordingSurface::new();
    let mut outline = RecordingOutline::new();

    pipeline.build_document(
        |c| {
            c.group(
                "tabs",
                GroupOptions::cycling().outlined("Sections"),
                |c| {
                    c.page(PageSpec::new("notes").id("sec-1").outline_titled("First"));
                    c.page(PageSpec::new("notes").id("sec-2").outline_titled("Second"));
                    Ok(())
                },
            )
        },
        &mut surface,
        &mut outline,
    )?;

    assert_eq!(
        outline.events,
        vec![
            begin("Sections", Some(1)),
            entry("First", 1),
            entry("Second", 2),
            OutlineEvent::End,
        ]
    );
    Ok(())
}
