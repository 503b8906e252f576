use roster_diagram::config::{OutputFormat, RenderConfig};
use roster_diagram::layout::{DiagramModel, layout_group};
use roster_diagram::renderers::{AsciiRenderer, Renderer, SvgRenderer, renderer_for};
use roster_diagram::schedule::ScheduleRow;

fn model() -> DiagramModel {
    let rows = vec![
        ScheduleRow::new("Lundi", "1", "830101")
            .with_times(Some("06:12:00"), Some("05:48:00"))
            .with_type("Évolution"),
        ScheduleRow::new("Lundi", "1", "830103")
            .with_times(Some("07:05:00"), Some("06:20:00"))
            .with_type("Commercial"),
        ScheduleRow::new("Lundi", "1", "830105").with_times(None, Some("07:15:00")),
    ];
    layout_group(&rows, "Lundi", "1").unwrap()
}

#[test]
fn test_ascii_unicode_styles() {
    let out = AsciiRenderer::new(true, 1).render(&model());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0].trim(), "Day: Lundi");
    assert_eq!(lines[1].trim(), "Roster line: 1");
    assert!(lines[3].contains("8 min"));
    // Evolution heavy, Commercial light, Unknown rounded
    assert!(lines[4].contains('┏'));
    assert!(lines[4].contains('┌'));
    assert!(lines[4].contains('╭'));
    assert!(lines[5].contains("┃ 830101 ┃"));
    assert!(lines[5].contains("│ 830103 │"));
    assert!(lines[5].contains('►'));
    assert_eq!(lines[5].matches('▣').count(), 2);
    assert!(lines[7].contains("06:12 -> 05:48"));
    // third leg has no arrival, hence no time label
    assert_eq!(lines[7].matches("->").count(), 2);
    assert_eq!(lines[3].matches("min").count(), 2);
}

#[test]
fn test_ascii_plain_has_no_box_drawing() {
    let out = AsciiRenderer::new(false, 1).render(&model());
    assert!(out.is_ascii());
    assert!(out.contains("# 830101 #"));
    assert!(out.contains("| 830103 |"));
}

#[test]
fn test_ascii_padding() {
    let out = AsciiRenderer::new(true, 3).render(&model());
    assert!(out.contains("│   830103   │"));
}

#[test]
fn test_svg_renderer() {
    let svg = SvgRenderer.render(&model());
    assert!(svg.contains("830105"));
    assert_eq!(svg.matches("<line").count(), 2);
    assert!(svg.contains("8 min"));
    assert!(svg.contains("10 min"));
}

#[test]
fn test_renderer_for_formats() {
    let m = model();
    let mut config = RenderConfig::default();
    assert!(renderer_for(&config).render(&m).contains("830101"));
    config.format = OutputFormat::Svg;
    assert!(renderer_for(&config).render(&m).starts_with("<svg"));
    config.format = OutputFormat::Json;
    assert!(renderer_for(&config).render(&m).starts_with('{'));
}

#[test]
fn test_render_all_separates_diagrams() {
    let m = model();
    let out = AsciiRenderer::new(true, 1).render_all(&[m.clone(), m]);
    assert_eq!(out.matches("Day: Lundi").count(), 2);
    assert!(out.contains("\n\n"));
}
