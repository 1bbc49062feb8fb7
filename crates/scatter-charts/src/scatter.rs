//! Scatter plot component
//!
//! Draws one circle (with its abbreviation) per record, both axes, and a
//! hover tooltip. Point nodes are keyed by index and tick nodes by value;
//! both stay mounted, so a new position animates through a CSS transform
//! transition of the requested duration.

use crate::{
    axis::{AxisView, TICK_SIZE},
    colors,
    surface::{PlotPoint, Tooltip},
    translate_style, ScatterConfig,
};
use scatter_core::AxisKind;
use leptos::prelude::*;

const TOOLTIP_WIDTH: f64 = 160.0;
const TOOLTIP_LINE_HEIGHT: f64 = 14.0;

/// Scatter chart component
#[component]
pub fn ScatterChart(
    #[prop(into)] x_axis: Signal<Option<AxisView>>,
    #[prop(into)] y_axis: Signal<Option<AxisView>>,
    #[prop(into)] points: Signal<Vec<PlotPoint>>,
    #[prop(into)] point_duration: Signal<u32>,
    #[prop(into)] tooltips: Signal<Vec<Tooltip>>,
    #[prop(optional)] config: Option<ScatterConfig>,
    /// Extra content drawn inside the chart area (axis label groups)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let dims = config.dims;
    let radius = config.point_radius;
    let font_size = config.point_font_size();
    let chart_height = dims.inner_height();

    let hovered = RwSignal::new(None::<usize>);
    let count = Memo::new(move |_| points.with(|p| p.len()));

    let point_style = move |i: usize| {
        let duration = point_duration.get();
        points.with(|p| {
            p.get(i)
                .map(|pt| translate_style(pt.x, pt.y, duration))
                .unwrap_or_default()
        })
    };

    let point_label = move |i: usize| {
        points.with(|p| p.get(i).map(|pt| pt.label.clone()).unwrap_or_default())
    };

    view! {
        <svg
            class="chart"
            viewBox=dims.viewbox()
            width=dims.width
            height=dims.height
            preserveAspectRatio="xMidYMid meet"
        >
            <g transform=dims.inner_transform()>
                // X-Axis (bottom)
                <g class="axis" id="xAxis" transform=format!("translate(0, {})", chart_height)>
                    <AxisTicks kind=AxisKind::Horizontal axis=x_axis />
                </g>

                // Y-Axis (left)
                <g class="axis" id="yAxis">
                    <AxisTicks kind=AxisKind::Vertical axis=y_axis />
                </g>

                // Points
                <For
                    each=move || 0..count.get()
                    key=|i| *i
                    children=move |i| {
                        view! {
                            <g
                                class="point"
                                style=move || point_style(i)
                                on:mouseenter=move |_| hovered.set(Some(i))
                                on:mouseleave=move |_| hovered.set(None)
                            >
                                <circle
                                    class="stateCircle"
                                    r=radius
                                    fill=colors::POINT
                                    stroke=colors::POINT_STROKE
                                />
                                <text
                                    class="stateText"
                                    text-anchor="middle"
                                    dy="0.35em"
                                    fill=colors::POINT_TEXT
                                    font-size=font_size
                                >
                                    {move || point_label(i)}
                                </text>
                            </g>
                        }
                    }
                />

                {children.map(|children| children())}

                // Tooltip
                {move || {
                    let i = hovered.get()?;
                    let (x, y) = points.with(|p| p.get(i).map(|pt| (pt.x, pt.y)))?;
                    let tooltip = tooltips.with(|t| t.get(i).cloned())?;
                    let anchor_y = y - radius - 8.0;
                    Some(view! { <TooltipBox tooltip=tooltip x=x y=anchor_y /> })
                }}
            </g>
        </svg>
    }
}

/// Ticks and domain line of one axis. A tick that survives a rescale keeps
/// its node and glides to its new offset.
#[component]
fn AxisTicks(kind: AxisKind, axis: Signal<Option<AxisView>>) -> impl IntoView {
    let horizontal = kind == AxisKind::Horizontal;
    let label_gap = TICK_SIZE + 3.0;
    let inward = -TICK_SIZE;
    let inward_label = -label_gap;

    let domain_path = move || {
        axis.with(|a| a.as_ref().map(|a| a.domain_path.clone()).unwrap_or_default())
    };
    let ticks = move || axis.with(|a| a.as_ref().map(|a| a.ticks.clone()).unwrap_or_default());

    view! {
        <path class="domain" d=domain_path fill="none" stroke=colors::AXIS />
        <For
            each=ticks
            key=AxisView::tick_key
            children=move |tick| {
                let value = tick.value;
                let style = move || {
                    axis.with(|a| a.as_ref().and_then(|a| a.tick_style(value)).unwrap_or_default())
                };

                if horizontal {
                    view! {
                        <g class="tick" style=style>
                            <line y2=TICK_SIZE stroke=colors::AXIS />
                            <text y=label_gap dy="0.71em" text-anchor="middle" font-size="10">
                                {tick.label}
                            </text>
                        </g>
                    }.into_any()
                } else {
                    view! {
                        <g class="tick" style=style>
                            <line x2=inward stroke=colors::AXIS />
                            <text x=inward_label dy="0.32em" text-anchor="end" font-size="10">
                                {tick.label}
                            </text>
                        </g>
                    }.into_any()
                }
            }
        />
    }
}

/// Hover box anchored above a point
#[component]
fn TooltipBox(tooltip: Tooltip, x: f64, y: f64) -> impl IntoView {
    let rows = 1 + tooltip.lines.len();
    let height = rows as f64 * TOOLTIP_LINE_HEIGHT + 8.0;
    let left = -TOOLTIP_WIDTH / 2.0;

    view! {
        <g
            class="d3-tip"
            transform=format!("translate({:.2}, {:.2})", x, y - height)
            pointer-events="none"
        >
            <rect
                x=left
                width=TOOLTIP_WIDTH
                height=height
                rx="4"
                fill=colors::TOOLTIP_BG
            />
            <text text-anchor="middle" fill=colors::TOOLTIP_TEXT font-size="11">
                <tspan x="0" dy="1.2em">{tooltip.title}</tspan>
                {tooltip.lines.into_iter().map(|line| {
                    view! { <tspan x="0" dy="1.2em">{line}</tspan> }
                }).collect_view()}
            </text>
        </g>
    }
}
