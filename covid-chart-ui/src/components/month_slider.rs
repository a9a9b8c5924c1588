//! Month slider (`months-slider`).

use crate::state::AppState;
use covid_charts::callbacks::ControlId;
use covid_utils::dates::month_abbr;
use dioxus::prelude::*;

/// One mark per slider step from `first` to `last`, with its offset along
/// the track in percent.
pub fn slider_marks(first: u32, last: u32) -> Vec<(u32, f64)> {
    let span = last.saturating_sub(first);
    (first..=last)
        .map(|m| {
            let offset = if span == 0 {
                0.0
            } else {
                f64::from(m - first) * 100.0 / f64::from(span)
            };
            (m, offset)
        })
        .collect()
}

/// Range input spanning the months that have data, with one mark per step.
///
/// Renders nothing until the months are known.
#[component]
pub fn MonthSlider() -> Element {
    let mut state = use_context::<AppState>();
    let months = state.months.read().clone();
    let (Some(first), Some(last)) = (months.first().copied(), months.last().copied()) else {
        return rsx! {};
    };
    let selected = (state.selected_month)();
    let control_id = ControlId::MonthsSlider.id();
    let marks: Vec<(u32, String, &'static str)> = slider_marks(first, last)
        .into_iter()
        .map(|(m, offset)| {
            let emphasis = if m == selected {
                "font-weight: bold; color: #ffffff;"
            } else {
                ""
            };
            let style = format!(
                "position: absolute; left: {}%; transform: translateX(-50%); {}",
                offset, emphasis
            );
            (m, style, month_abbr(m).unwrap_or(""))
        })
        .collect();

    let on_input = move |evt: Event<FormData>| {
        if let Ok(month) = evt.value().parse::<u32>() {
            state.selected_month.set(month.clamp(first, last));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0 16px 0;",
            label {
                r#for: "{control_id}",
                style: "font-weight: bold; color: #ffffff;",
                "Drag the slider to change the month:"
            }
            input {
                id: "{control_id}",
                r#type: "range",
                min: "{first}",
                max: "{last}",
                step: "1",
                value: "{selected}",
                style: "width: 100%;",
                oninput: on_input,
            }
            div {
                style: "position: relative; height: 16px; margin: 0 8px; font-size: 12px; color: #7f8ca3;",
                for (month, style, label) in marks {
                    span {
                        key: "{month}",
                        style: "{style}",
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_cover_every_step() {
        let marks = slider_marks(3, 12);
        assert_eq!(marks.len(), 10);
        assert_eq!(marks.first(), Some(&(3, 0.0)));
        assert_eq!(marks.last(), Some(&(12, 100.0)));
        assert!((marks[1].1 - 100.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn single_month_sits_at_start() {
        assert_eq!(slider_marks(5, 5), vec![(5, 0.0)]);
    }
}
