use gridsketch::config::Config;
use gridsketch::draw::{Segment, render_svg};
use gridsketch::input::{Key, ModeStore, Modifiers, MouseButton};
use gridsketch::session::{InputEvent, Session, parse_script};
use gridsketch::viewport::SurfaceLayout;

fn new_session(width: f64, height: f64) -> Session {
    let mut session = Session::new(&Config::default(), ModeStore::default()).unwrap();
    session.dispatch(InputEvent::Resize(SurfaceLayout::sized(width, height)));
    session
}

fn drag(session: &mut Session, from: (f64, f64), to: (f64, f64)) {
    session.replay([
        InputEvent::PointerDown {
            x: from.0,
            y: from.1,
            button: MouseButton::Left,
            target: None,
        },
        InputEvent::PointerMove { x: to.0, y: to.1 },
        InputEvent::PointerUp { x: to.0, y: to.1 },
    ]);
}

fn is_grid_multiple(value: f64, cell: f64) -> bool {
    let cells = value / cell;
    (cells - cells.round()).abs() < 1e-9
}

#[test]
fn committed_endpoints_always_land_on_grid() {
    let mut session = new_session(1280.0, 720.0);
    let cw = 1280.0 / 15.0;
    let rh = 720.0 / 15.0;

    let drags = [
        ((3.0, 4.0), (640.5, 359.9)),
        ((1279.0, 1.0), (17.0, 719.0)),
        ((400.25, 100.75), (401.0, 101.0)),
        ((0.0, 0.0), (1280.0, 720.0)),
    ];
    for (from, to) in drags {
        drag(&mut session, from, to);
    }

    let segments = session.scene().segments;
    assert_eq!(segments.len(), drags.len());
    for segment in segments {
        assert!(is_grid_multiple(segment.x1, cw));
        assert!(is_grid_multiple(segment.x2, cw));
        assert!(is_grid_multiple(segment.y1, rh));
        assert!(is_grid_multiple(segment.y2, rh));
    }
}

#[test]
fn undo_delete_and_clear_sequence() {
    let mut session = new_session(1500.0, 1500.0);
    for i in 0..4 {
        let y = i as f64 * 100.0;
        drag(&mut session, (0.0, y), (300.0, y));
    }

    // Select the second segment and delete it
    session.dispatch(InputEvent::PointerDown {
        x: 150.0,
        y: 100.0,
        button: MouseButton::Left,
        target: Some(1),
    });
    session.dispatch(InputEvent::KeyDown {
        key: Key::Delete,
        modifiers: Modifiers::default(),
    });
    let ys: Vec<f64> = session.scene().segments.iter().map(|s| s.y1).collect();
    assert_eq!(ys, vec![0.0, 200.0, 300.0]);

    // Undo removes the last-appended segment
    session.editor.undo();
    let ys: Vec<f64> = session.scene().segments.iter().map(|s| s.y1).collect();
    assert_eq!(ys, vec![0.0, 200.0]);

    session.dispatch(InputEvent::ClearAll);
    assert!(session.scene().segments.is_empty());
    assert_eq!(session.scene().grid.len(), 30);
}

#[test]
fn replayed_script_matches_direct_dispatch() {
    let events = parse_script(
        r#"
        [[event]]
        kind = "resize"
        width = 1500
        height = 1500

        [[event]]
        kind = "pointer_down"
        x = 142
        y = 130

        [[event]]
        kind = "pointer_up"
        x = 365
        y = 210

        [[event]]
        kind = "wheel"
        delta_y = -20
        "#,
    )
    .unwrap();

    let mut session = Session::new(&Config::default(), ModeStore::default()).unwrap();
    session.replay(events);

    let scene = session.scene();
    assert_eq!(scene.segments, vec![Segment::new(100.0, 100.0, 400.0, 200.0)]);

    let svg = render_svg(&scene);
    assert!(svg.contains(r#"viewBox="0 0 750 750""#));
    assert!(svg.contains(r#"id="0""#));
}
