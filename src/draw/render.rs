//! SVG rendering of a [`Scene`].
//!
//! Produces a self-contained `<svg>` document: grid lines underneath,
//! committed segments on top (each tagged with its index so hit-tests can map
//! back to the frame), and the in-progress segment last.

use super::scene::Scene;
use super::segment::Segment;
use std::fmt::Write;

const GRID_STROKE: &str = "#d0d0d0";
const SEGMENT_STROKE: &str = "#202020";
const SELECTED_STROKE: &str = "#e0301e";
const ACTIVE_STROKE: &str = "#1e6ee0";

fn write_line(out: &mut String, segment: &Segment, attrs: &str) {
    let _ = writeln!(
        out,
        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" {attrs}/>"#,
        segment.x1, segment.y1, segment.x2, segment.y2
    );
}

/// Renders the scene to an SVG string.
pub fn render_svg(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{}">"#,
        scene.width, scene.height, scene.view_box
    );

    out.push_str(r#"  <g class="grid">"#);
    out.push('\n');
    for line in &scene.grid {
        write_line(
            &mut out,
            line,
            &format!(r#"stroke="{GRID_STROKE}" stroke-width="1""#),
        );
    }
    out.push_str("  </g>\n");

    out.push_str(r#"  <g class="segments">"#);
    out.push('\n');
    for (index, segment) in scene.segments.iter().enumerate() {
        let attrs = if scene.selected == Some(index) {
            format!(r#"id="{index}" class="selected" stroke="{SELECTED_STROKE}" stroke-width="3""#)
        } else {
            format!(r#"id="{index}" stroke="{SEGMENT_STROKE}" stroke-width="3""#)
        };
        write_line(&mut out, segment, &attrs);
    }
    out.push_str("  </g>\n");

    if let Some(active) = &scene.active {
        write_line(
            &mut out,
            active,
            &format!(r#"class="active" stroke="{ACTIVE_STROKE}" stroke-width="2" stroke-dasharray="6 4""#),
        );
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::ViewBox;

    fn scene() -> Scene {
        Scene {
            width: 200.0,
            height: 100.0,
            view_box: ViewBox {
                width: 100.0,
                height: 50.0,
            },
            grid: vec![Segment::new(0.0, 0.0, 0.0, 100.0)],
            segments: vec![
                Segment::new(0.0, 0.0, 100.0, 50.0),
                Segment::new(100.0, 50.0, 200.0, 50.0),
            ],
            active: Some(Segment::new(10.5, 10.0, 20.0, 30.0)),
            selected: Some(1),
            drag_mode: false,
        }
    }

    #[test]
    fn renders_view_box_and_dimensions() {
        let svg = render_svg(&scene());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="200" height="100" viewBox="0 0 100 50""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn tags_segments_with_index_and_selection() {
        let svg = render_svg(&scene());
        assert!(svg.contains(r#"<line x1="0" y1="0" x2="100" y2="50" id="0" stroke"#));
        assert!(svg.contains(r#"id="1" class="selected""#));
        assert_eq!(svg.matches("class=\"selected\"").count(), 1);
    }

    #[test]
    fn renders_active_segment_last() {
        let svg = render_svg(&scene());
        let active = svg.find(r#"class="active""#).unwrap();
        let last_committed = svg.find(r#"id="1""#).unwrap();
        assert!(active > last_committed);
        assert!(svg.contains(r#"x1="10.5""#));
    }

    #[test]
    fn omits_active_segment_when_idle() {
        let mut scene = scene();
        scene.active = None;
        assert!(!render_svg(&scene).contains("class=\"active\""));
    }
}
