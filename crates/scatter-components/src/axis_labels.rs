//! Clickable axis label groups

use scatter_charts::{colors, LabelMark, ScatterConfig};
use scatter_core::AxisKind;
use scatter_state::use_app_state;
use leptos::prelude::*;

/// Horizontal offset of the switch squares from the label centre line
const SWITCH_OFFSET: f64 = 120.0;

/// Group transform for one axis kind: horizontal labels stack below the
/// chart, vertical labels are rotated and stack left of it.
pub fn label_group_transform(kind: AxisKind, config: &ScatterConfig) -> String {
    let dims = config.dims;
    match kind {
        AxisKind::Horizontal => format!(
            "translate({}, {})",
            dims.inner_width() / 2.0,
            dims.inner_height() + config.label_spacing
        ),
        AxisKind::Vertical => format!(
            "translate({}, {}) rotate(-90)",
            -dims.margin.left,
            dims.inner_height() / 2.0
        ),
    }
}

/// Baseline of the `index`-th label in its group
pub fn label_offset(index: usize, config: &ScatterConfig) -> f64 {
    (index + 1) as f64 * config.label_spacing
}

fn label_color(mark: &LabelMark) -> &'static str {
    if mark.active {
        colors::LABEL_ACTIVE
    } else {
        colors::LABEL_INACTIVE
    }
}

/// Label group for one axis kind
#[component]
pub fn AxisLabelGroup(kind: AxisKind) -> impl IntoView {
    let state = use_app_state();
    let config = state.config.clone();
    let marks = state.chart.labels(kind);
    let transform = label_group_transform(kind, &config);

    view! {
        <g class=format!("atext {}", kind.css_class()) transform=transform>
            {move || {
                marks.get().into_iter().enumerate().map(|(i, mark)| {
                    let y = label_offset(i, &config);
                    let field = mark.field;
                    let select_state = state.clone();
                    let move_state = state.clone();
                    let switch_size = config.switch_size;
                    let switch_x = -SWITCH_OFFSET;
                    let switch_y = y - switch_size;
                    let weight = if mark.active { "bold" } else { "normal" };

                    view! {
                        <g class="axis-label">
                            {mark.movable.then(|| view! {
                                <rect
                                    class="stateRect"
                                    x=switch_x
                                    y=switch_y
                                    width=switch_size
                                    height=switch_size
                                    fill=colors::SWITCH
                                    style="cursor: pointer"
                                    on:click=move |_| move_state.move_label(field)
                                >
                                    <title>{mark.move_hint()}</title>
                                </rect>
                            })}
                            <text
                                class=mark.css_class()
                                x="0"
                                y=y
                                text-anchor="middle"
                                fill=label_color(&mark)
                                font-weight=weight
                                style="cursor: pointer"
                                on:click=move |_| select_state.select_axis(kind, field)
                            >
                                {field.title()}
                            </text>
                        </g>
                    }
                }).collect_view()
            }}
        </g>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_offsets_stack() {
        let config = ScatterConfig::default();
        assert_eq!(label_offset(0, &config), 20.0);
        assert_eq!(label_offset(2, &config), 60.0);
    }

    #[test]
    fn test_group_transforms() {
        let config = ScatterConfig::default();
        assert_eq!(
            label_group_transform(AxisKind::Horizontal, &config),
            "translate(375, 340)"
        );
        assert_eq!(
            label_group_transform(AxisKind::Vertical, &config),
            "translate(-150, 160) rotate(-90)"
        );
    }
}
