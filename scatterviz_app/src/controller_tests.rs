// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use scatterviz_core::{Mark, MarkDiff, MarkId, MarkPayload};
use scatterviz_data::Dataset;

use crate::chart::{CIRCLE_CLASS, TEXT_CLASS, X_AXIS_ID, X_LABELS_ID, Y_AXIS_ID, Y_LABELS_ID};
use crate::{AxisField, ClickOutcome, Controller, ScatterConfig, Selection, XField, YField};

const DATA: &str = "\
state,abbr,poverty,age,income,healthcare,smokes,obesity
Alabama,AL,19.3,38.6,42830,13.9,21.1,33.5
Alaska,AK,11.2,33.3,70761,15.0,19.9,29.7
Arizona,AZ,18.2,36.9,50068,14.4,16.5,28.9
California,CA,16.4,36.0,61933,14.8,12.0,24.2
Ohio,OH,14.8,39.4,49308,11.3,21.6,29.2
Utah,UT,11.7,30.5,60922,12.5,8.8,25.2
Maine,ME,14.1,44.2,49331,10.5,19.9,28.2
Wyoming,WY,11.3,36.8,57829,14.3,19.9,29.0
";

const OHIO: usize = 4;

fn dataset() -> Dataset {
    Dataset::from_csv_str(DATA).expect("test data parses")
}

fn controller(selection: Selection) -> Controller {
    Controller::with_selection(dataset(), ScatterConfig::default(), selection)
}

fn circles(c: &Controller) -> Vec<(usize, Point)> {
    let mut out: Vec<(usize, Point)> = c
        .scene()
        .marks()
        .filter(|m| m.has_class(CIRCLE_CLASS))
        .filter_map(|m| match &m.payload {
            MarkPayload::Circle(circle) => Some((m.attr("row")?.parse().ok()?, circle.center)),
            _ => None,
        })
        .collect();
    out.sort_by_key(|(row, _)| *row);
    out
}

fn circle_at(frame: &[Mark], row: usize) -> Point {
    let row = row.to_string();
    frame
        .iter()
        .find_map(|m| match &m.payload {
            MarkPayload::Circle(c)
                if m.has_class(CIRCLE_CLASS) && m.attr("row") == Some(row.as_str()) =>
            {
                Some(c.center)
            }
            _ => None,
        })
        .expect("circle for row")
}

fn active_values(c: &Controller, axis: &str) -> Vec<String> {
    c.scene()
        .marks()
        .filter(|m| m.has_class("aText") && m.attr("axis") == Some(axis))
        .filter(|m| m.has_class("active"))
        .filter_map(|m| m.attr("value").map(str::to_string))
        .collect()
}

fn assert_point_close(a: Point, b: Point) {
    let eps = 1e-9;
    assert!((a.x - b.x).abs() <= eps, "x {a:?} != {b:?}");
    assert!((a.y - b.y).abs() <= eps, "y {a:?} != {b:?}");
}

fn in_range(id: MarkId, base: u64, len: u64) -> bool {
    (base..base + len).contains(&id.0)
}

#[test]
fn markers_sit_at_scaled_values_for_every_selection() {
    for selection in Selection::all() {
        let c = controller(selection);
        let ds = c.dataset();
        let scales = *c.scales();
        let drawn = circles(&c);
        assert_eq!(drawn.len(), ds.len(), "{selection:?}");
        for (row, center) in drawn {
            let r = &ds.rows()[row];
            let expected = Point::new(
                scales.x.map(r.get(selection.x.field())),
                scales.y.map(r.get(selection.y.field())),
            );
            assert_eq!(center, expected, "{selection:?} row {row}");
        }
    }
}

#[test]
fn abbreviations_sit_inside_their_markers() {
    let c = controller(Selection::new(XField::Income, YField::Obesity));
    let centers = circles(&c);
    let texts: Vec<_> = c
        .scene()
        .marks()
        .filter(|m| m.has_class(TEXT_CLASS))
        .filter_map(|m| match &m.payload {
            MarkPayload::Text(t) => Some((m.attr("row")?.parse::<usize>().ok()?, t.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(texts.len(), centers.len());
    for (row, text) in texts {
        let center = centers[row].1;
        assert_eq!(text.pos, Point::new(center.x, center.y + 5.0), "row {row}");
        assert_eq!(text.text, c.dataset().rows()[row].abbr);
    }
}

#[test]
fn domains_are_padded_per_axis() {
    let c = controller(Selection::default());
    let (x0, x1) = c.scales().x.domain();
    let (y0, y1) = c.scales().y.domain();
    assert_eq!(x0, 11.2 * 0.9);
    assert_eq!(x1, 19.3 * 1.1);
    assert_eq!(y0, 10.5 * 0.8);
    assert_eq!(y1, 15.0 * 1.0);
    assert_eq!(c.scales().x.range(), (0.0, 820.0));
    assert_eq!(c.scales().y.range(), (400.0, 0.0));
}

#[test]
fn exactly_one_active_label_per_axis() {
    for selection in Selection::all() {
        let c = controller(selection);
        assert_eq!(active_values(&c, "x"), [selection.x.field().as_str()]);
        assert_eq!(active_values(&c, "y"), [selection.y.field().as_str()]);
    }
}

#[test]
fn clicking_the_active_label_is_a_no_op() {
    let mut c = controller(Selection::default());
    let before: Vec<Mark> = c.frame(0.0);
    let outcome = c.click(AxisField::X(XField::Poverty), 0.0);
    assert!(matches!(outcome, ClickOutcome::Unchanged));
    assert!(!c.is_animating(0.0));
    assert_eq!(c.frame(0.0), before);
    assert_eq!(c.selection(), Selection::default());
}

#[test]
fn clicking_an_x_label_changes_only_the_x_axis() {
    let mut c = controller(Selection::default());
    let y_scale = c.scales().y;
    let ClickOutcome::Changed { diffs } = c.click(AxisField::X(XField::Age), 0.0) else {
        panic!("expected a change");
    };
    assert_eq!(c.selection(), Selection::new(XField::Age, YField::Healthcare));
    assert_eq!(c.scales().y, y_scale);
    assert!(!diffs.is_empty());
    for d in &diffs {
        let id = d.id();
        assert!(!in_range(id, Y_AXIS_ID, 2_000), "y axis touched: {d:?}");
        assert!(!in_range(id, Y_LABELS_ID, 3), "y labels touched: {d:?}");
    }
    assert!(diffs.iter().any(|d| in_range(d.id(), X_AXIS_ID, 2_000)));
    assert!(diffs.iter().any(|d| in_range(d.id(), X_LABELS_ID, 3)));
    assert_eq!(active_values(&c, "x"), ["age"]);
    assert_eq!(active_values(&c, "y"), ["healthcare"]);
}

#[test]
fn clicking_a_y_label_changes_only_the_y_axis() {
    let mut c = controller(Selection::default());
    let x_scale = c.scales().x;
    let ClickOutcome::Changed { diffs } = c.click(AxisField::Y(YField::Obesity), 0.0) else {
        panic!("expected a change");
    };
    assert_eq!(c.selection().x, XField::Poverty);
    assert_eq!(c.scales().x, x_scale);
    assert!(
        diffs
            .iter()
            .all(|d| !in_range(d.id(), X_AXIS_ID, 2_000) && !in_range(d.id(), X_LABELS_ID, 3))
    );
    assert_eq!(c.tooltip().fields().1, scatterviz_data::Field::Obesity);
}

#[test]
fn markers_animate_to_their_new_position() {
    let mut c = controller(Selection::default());
    let from = circle_at(&c.frame(0.0), OHIO);
    c.click(AxisField::X(XField::Income), 1_000.0);
    let to = circles(&c)[OHIO].1;
    assert_ne!(from, to);

    assert!(c.is_animating(1_000.0));
    assert_point_close(circle_at(&c.frame(1_000.0), OHIO), from);
    assert_point_close(circle_at(&c.frame(1_500.0), OHIO), from.lerp(to, 0.5));
    assert!(c.is_animating(1_999.0));
    assert!(!c.is_animating(2_000.0));
    assert_eq!(circle_at(&c.frame(2_000.0), OHIO), to);
}

#[test]
fn a_click_mid_transition_retargets_from_the_displayed_position() {
    let mut c = controller(Selection::default());
    let start = circle_at(&c.frame(0.0), OHIO);
    c.click(AxisField::X(XField::Age), 0.0);
    let age = circles(&c)[OHIO].1;
    let halfway = circle_at(&c.frame(500.0), OHIO);
    assert_point_close(halfway, start.lerp(age, 0.5));

    c.click(AxisField::X(XField::Income), 500.0);
    let income = circles(&c)[OHIO].1;
    assert_point_close(circle_at(&c.frame(500.0), OHIO), halfway);
    assert_point_close(circle_at(&c.frame(1_000.0), OHIO), halfway.lerp(income, 0.5));
    assert_eq!(circle_at(&c.frame(1_500.0), OHIO), income);
}

#[test]
fn tooltip_labels_follow_the_selection() {
    let mut c = controller(Selection::default());
    c.click(AxisField::X(XField::Age), 0.0);
    c.click(AxisField::Y(YField::Smokes), 0.0);
    let now = 5_000.0;
    let ohio = circle_at(&c.frame(now), OHIO);
    let tip = c
        .pointer_move(ohio, now)
        .expect("tooltip over Ohio")
        .clone();
    assert_eq!(tip.html, "Ohio<br>Age (Median): 39.4<br>Smokes %: 21.6");
    assert_eq!(tip.row, OHIO);
    // Anchored at the top of the marker, then offset.
    assert_eq!(tip.position, Point::new(ohio.x - 95.0, ohio.y - 14.0 + 45.0));

    assert!(c.pointer_move(Point::new(-500.0, -500.0), now).is_none());
    c.pointer_move(ohio, now);
    c.pointer_leave();
    assert!(c.tooltip().content().is_none());
}

#[test]
fn ohio_renders_at_the_scaled_position() {
    let config = ScatterConfig::default().with_bottom_margin(60.0);
    assert_eq!((config.plot_width(), config.plot_height()), (820.0, 420.0));
    let c = Controller::new(dataset(), config);
    let ohio = &c.dataset().rows()[OHIO];
    assert_eq!((ohio.poverty, ohio.healthcare), (14.8, 11.3));
    let expected = Point::new(c.scales().x.map(14.8), c.scales().y.map(11.3));
    assert_eq!(circles(&c)[OHIO].1, expected);
    // x domain [10.08, 21.23], y domain [8.4, 15].
    assert_point_close(
        expected,
        Point::new(
            (14.8 - 11.2 * 0.9) / (19.3 * 1.1 - 11.2 * 0.9) * 820.0,
            420.0 - (11.3 - 10.5 * 0.8) / (15.0 - 10.5 * 0.8) * 420.0,
        ),
    );
}

#[test]
fn rows_without_a_value_are_skipped_until_their_field_is_chosen() {
    let data = format!("{DATA}Nowhere,NW,n/a,40.0,50000,12.0,18.0,30.0\n");
    let ds = Dataset::from_csv_str(&data).expect("parses");
    let mut c = Controller::new(ds, ScatterConfig::default());
    let nowhere = 8;
    assert!(circles(&c).iter().all(|(row, _)| *row != nowhere));

    let ClickOutcome::Changed { diffs } = c.click(AxisField::X(XField::Age), 0.0) else {
        panic!("expected a change");
    };
    assert!(diffs.iter().any(|d| matches!(d, MarkDiff::Enter { new, .. }
        if new.has_class(CIRCLE_CLASS) && new.attr("row") == Some("8"))));
    assert!(circles(&c).iter().any(|(row, _)| *row == nowhere));
}

#[test]
fn option_labels_are_clickable_by_position() {
    let mut c = controller(Selection::default());
    // Second x label ("Age (Median)") sits 60px below a 400px tall plot, centered.
    let outcome = c.click_at(Point::new(410.0, 460.0), 0.0).expect("label hit");
    assert!(outcome.is_changed());
    assert_eq!(c.selection().x, XField::Age);

    // Third y label ("Obese (%)") is rotated, 80px left of the plot, centered vertically.
    let outcome = c.click_at(Point::new(-80.0, 200.0), 0.0).expect("label hit");
    assert!(outcome.is_changed());
    assert_eq!(c.selection().y, YField::Obesity);

    assert!(c.click_at(Point::new(410.0, 200.0), 0.0).is_none());
}

#[test]
fn svg_contains_one_circle_per_row() {
    let mut c = controller(Selection::default());
    let svg = c.svg(0.0);
    assert_eq!(svg.matches(r#"class="stateCircle""#).count(), 8);
    assert_eq!(svg.matches(r#"class="stateText""#).count(), 8);
    assert_eq!(svg.matches(r#"class="aText active""#).count(), 2);
    assert_eq!(svg.matches(r#"class="aText inactive""#).count(), 4);
}

#[test]
fn covered_markers_still_get_their_own_tooltip() {
    let ds = Dataset::from_csv_str(
        "state,abbr,poverty,age,income,healthcare,smokes,obesity\n\
         Under,UN,14.8,39.4,49308,11.3,21.6,29.2\n\
         Over,OV,14.8,39.4,49308,11.3,21.6,29.2\n\
         Apart,AP,20.0,30.0,60000,15.0,10.0,20.0\n",
    )
    .expect("test data parses");
    let mut c = Controller::new(ds, ScatterConfig::default());
    let center = circle_at(&c.frame(0.0), 0);

    // The later marker is drawn on top, so hovering the shared center finds it.
    let hovered = c.pointer_move(center, 0.0).expect("a marker is hovered").row;
    assert_eq!(hovered, 1);
    c.pointer_leave();

    let tip = c.show_tooltip_for(0, 0.0).expect("row 0 has a marker").clone();
    assert_eq!(tip.row, 0);
    assert!(tip.html.starts_with("Under<br>"), "{}", tip.html);
    assert_eq!(tip.position, Point::new(center.x - 95.0, center.y - 14.0 + 45.0));
    c.hide_tooltip();
    assert!(c.tooltip().content().is_none());
    assert!(c.show_tooltip_for(3, 0.0).is_none());
}

#[test]
fn every_bundled_row_gets_its_own_tooltip_in_every_selection() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets/data/data.csv");
    let ds = scatterviz_data::load_path(path, scatterviz_data::CoercionPolicy::Reject)
        .expect("bundled data loads");
    let states: Vec<String> = ds.rows().iter().map(|r| r.state.clone()).collect();
    for selection in Selection::all() {
        let mut c = Controller::with_selection(ds.clone(), ScatterConfig::default(), selection);
        for (row, state) in states.iter().enumerate() {
            let tip = c
                .show_tooltip_for(row, 0.0)
                .unwrap_or_else(|| panic!("{selection:?}: no marker for {state}"));
            assert_eq!(tip.row, row, "{selection:?}");
            assert!(
                tip.html.starts_with(&format!("{}<br>", crate::escape_html(state))),
                "{selection:?}: {state} -> {}",
                tip.html
            );
        }
    }
}
