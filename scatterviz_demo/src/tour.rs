// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clicks through every axis selection, the way a reader would, and snapshots each one.

use scatterviz_app::{AxisField, ClickOutcome, Controller, Selection};

use crate::html::HtmlSection;

/// Walks `controller` through all selections and returns one section per snapshot.
///
/// Starting from the controller's current selection, every other selection is reached by
/// clicking its x label and then its y label (skipping labels that are already active). Each
/// transition is sampled halfway for the first change and at its end for every change. When
/// a row with abbreviation `hover` exists, its tooltip is captured after each transition, even
/// where a neighbouring marker covers it.
pub(crate) fn run(mut controller: Controller, hover: &str) -> Vec<HtmlSection> {
    let duration = controller.config().transition_ms;
    let mut now = 0.0;
    let start = controller.selection();
    let mut sections = vec![snapshot(&mut controller, now, Some(hover), "initial selection")];

    let mut first = true;
    for target in Selection::all().filter(|s| *s != start) {
        let clicks = [AxisField::X(target.x), AxisField::Y(target.y)];
        let changed = clicks
            .into_iter()
            .map(|choice| controller.click(choice, now))
            .filter(ClickOutcome::is_changed)
            .count();
        tracing::info!(x = %target.x.field(), y = %target.y.field(), changed, "clicked labels");

        if first {
            first = false;
            let mid = now + duration / 2.0;
            let mut section = snapshot(&mut controller, mid, None, "halfway through the transition");
            section.title.push_str(" (animating)");
            sections.push(section);
        }

        now += duration;
        debug_assert!(!controller.is_animating(now), "transition outlived its duration");
        let note = format!("{changed} label click(s)");
        sections.push(snapshot(&mut controller, now, Some(hover), &note));
    }
    sections
}

fn snapshot(
    controller: &mut Controller,
    now: f64,
    hover: Option<&str>,
    note: &str,
) -> HtmlSection {
    let selection = controller.selection();
    let tooltip = hover.and_then(|abbr| hover_tooltip(controller, now, abbr));
    let svg = controller.svg(now);
    HtmlSection {
        title: format!("{} vs. {}", selection.y.label(), selection.x.label()),
        description: note.to_string(),
        svg,
        tooltip,
    }
}

fn hover_tooltip(controller: &mut Controller, now: f64, abbr: &str) -> Option<String> {
    let Some((index, _)) = controller.dataset().find_abbr(abbr) else {
        tracing::warn!(abbr, "no row with this abbreviation");
        return None;
    };
    let html = controller
        .show_tooltip_for(index, now)
        .map(|content| content.html.clone());
    controller.hide_tooltip();
    if html.is_none() {
        tracing::warn!(abbr, "row has no marker in this selection");
    }
    html
}

#[cfg(test)]
mod tests {
    use scatterviz_app::{ScatterConfig, XField, YField};
    use scatterviz_data::Dataset;

    use super::*;

    const DATA: &str = "\
state,abbr,poverty,age,income,healthcare,smokes,obesity
Alabama,AL,19.3,38.6,42830,13.9,21.1,33.5
Alaska,AK,11.2,33.3,70761,15.0,19.9,29.7
Ohio,OH,14.8,39.4,49308,11.3,21.6,29.2
Utah,UT,11.7,30.5,60922,12.5,8.8,25.2
";

    fn controller() -> Controller {
        let ds = Dataset::from_csv_str(DATA).expect("test data parses");
        Controller::new(ds, ScatterConfig::default())
    }

    #[test]
    fn every_selection_is_visited() {
        let sections = run(controller(), "OH");
        // Initial, one halfway frame and eight other selections.
        assert_eq!(sections.len(), 10);
        let mut titles: Vec<_> = sections
            .iter()
            .filter(|s| !s.title.ends_with("(animating)"))
            .map(|s| s.title.clone())
            .collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 9);
        for s in &sections {
            assert_eq!(s.svg.matches(r#"class="aText active""#).count(), 2, "{}", s.title);
            assert_eq!(s.svg.matches(r#"class="stateCircle""#).count(), 4, "{}", s.title);
        }
    }

    #[test]
    fn tooltips_follow_the_selection() {
        let sections = run(controller(), "OH");
        assert_eq!(
            sections[0].tooltip.as_deref(),
            Some("Ohio<br>Poverty %: 14.8<br>Healthcare %: 11.3")
        );
        let title = format!("{} vs. {}", YField::Smokes.label(), XField::Age.label());
        let age_smokes = sections
            .iter()
            .find(|s| s.title == title)
            .expect("age/smokes visited");
        assert_eq!(
            age_smokes.tooltip.as_deref(),
            Some("Ohio<br>Age (Median): 39.4<br>Smokes %: 21.6")
        );
    }

    #[test]
    fn bundled_data_tooltips_name_the_hovered_state() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets/data/data.csv");
        let ds = scatterviz_data::load_path(path, scatterviz_data::CoercionPolicy::Reject)
            .expect("bundled data loads");
        for (abbr, state) in [("AK", "Alaska"), ("CA", "California"), ("NJ", "New Jersey")] {
            let sections = run(Controller::new(ds.clone(), ScatterConfig::default()), abbr);
            for s in sections.iter().filter(|s| !s.title.ends_with("(animating)")) {
                let tooltip = s.tooltip.as_deref().unwrap_or_default();
                assert!(
                    tooltip.starts_with(&format!("{state}<br>")),
                    "{abbr} in {}: {tooltip}",
                    s.title
                );
            }
        }
    }

    #[test]
    fn unknown_hover_row_has_no_tooltip() {
        let sections = run(controller(), "ZZ");
        assert!(sections.iter().all(|s| s.tooltip.is_none()));
    }
}
