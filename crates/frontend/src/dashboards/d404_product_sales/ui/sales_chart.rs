//! Monthly retail/wholesale line chart drawn as inline SVG.
//!
//! Geometry is computed by `ChartGeometry` so the component only maps points
//! to SVG elements.

use crate::dashboards::d404_product_sales::aggregation::MonthlyAggregate;
use crate::shared::components::table::format_number;
use leptos::prelude::*;

pub const CHART_WIDTH: f64 = 900.0;
pub const CHART_HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_SIDE: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 60.0;

pub const RETAIL_COLOR: &str = "#4A90E2";
pub const WHOLESALE_COLOR: &str = "#B0B0B0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Retail,
    Wholesale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub month: &'static str,
    pub x: f64,
    pub retail_y: f64,
    pub wholesale_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub points: Vec<ChartPoint>,
    /// Y of the x axis
    pub baseline_y: f64,
    /// Width of one month column
    pub band_width: f64,
}

impl ChartGeometry {
    /// Lay out the months as equal bands, scaling both series to the larger maximum.
    pub fn build(data: &[MonthlyAggregate], width: f64, height: f64) -> Self {
        let plot_width = width - 2.0 * MARGIN_SIDE;
        let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline_y = MARGIN_TOP + plot_height;
        let band_width = if data.is_empty() {
            plot_width
        } else {
            plot_width / data.len() as f64
        };

        let max_value = data
            .iter()
            .flat_map(|m| [m.retail_sales, m.wholesale_sales])
            .fold(0.0_f64, f64::max);
        let scale = if max_value > 0.0 { max_value } else { 1.0 };
        let to_y = |value: f64| baseline_y - plot_height * (value.max(0.0) / scale);

        let points = data
            .iter()
            .enumerate()
            .map(|(i, m)| ChartPoint {
                month: m.month,
                x: MARGIN_SIDE + band_width * (i as f64 + 0.5),
                retail_y: to_y(m.retail_sales),
                wholesale_y: to_y(m.wholesale_sales),
            })
            .collect();

        Self {
            width,
            height,
            points,
            baseline_y,
            band_width,
        }
    }

    /// `points` attribute of an SVG polyline for one series
    pub fn polyline(&self, series: Series) -> String {
        self.points
            .iter()
            .map(|p| {
                let y = match series {
                    Series::Retail => p.retail_y,
                    Series::Wholesale => p.wholesale_y,
                };
                format!("{},{}", fmt_coord(p.x), fmt_coord(y))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn fmt_coord(value: f64) -> String {
    format!("{:.1}", value)
}

#[component]
pub fn SalesChart(
    /// Month totals in chronological order
    #[prop(into)]
    data: Signal<Vec<MonthlyAggregate>>,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let geometry =
        Memo::new(move |_| data.with(|d| ChartGeometry::build(d, CHART_WIDTH, CHART_HEIGHT)));

    let plot = move || {
        let g = geometry.get();
        let labels = g
            .points
            .iter()
            .map(|p| {
                view! {
                    <text
                        x=fmt_coord(p.x)
                        y=fmt_coord(g.baseline_y + 30.0)
                        text-anchor="middle"
                        font-size="14"
                        fill="#9CA3AF"
                    >
                        {p.month}
                    </text>
                }
            })
            .collect_view();
        let hit_areas = g
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                view! {
                    <rect
                        x=fmt_coord(p.x - g.band_width / 2.0)
                        y="0"
                        width=fmt_coord(g.band_width)
                        height=fmt_coord(g.baseline_y)
                        fill="transparent"
                        on:mouseenter=move |_| hovered.set(Some(i))
                    />
                }
            })
            .collect_view();

        view! {
            <line
                x1=fmt_coord(MARGIN_SIDE)
                y1=fmt_coord(g.baseline_y)
                x2=fmt_coord(g.width - MARGIN_SIDE)
                y2=fmt_coord(g.baseline_y)
                stroke="#D1D5DB"
                stroke-width="1"
            />
            {labels}
            <polyline
                points=g.polyline(Series::Wholesale)
                fill="none"
                stroke=WHOLESALE_COLOR
                stroke-width="3"
            />
            <polyline
                points=g.polyline(Series::Retail)
                fill="none"
                stroke=RETAIL_COLOR
                stroke-width="3"
            />
            {hit_areas}
        }
    };

    let tooltip = move || {
        let i = hovered.get()?;
        let point = geometry.with(|g| g.points.get(i).cloned())?;
        let month = data.with(|d| d.get(i).cloned())?;

        let box_width = 190.0;
        let box_x = (point.x + 12.0).min(CHART_WIDTH - MARGIN_SIDE - box_width);
        let box_y = MARGIN_TOP;

        Some(view! {
            <g class="sales-chart__tooltip" pointer-events="none">
                <line
                    x1=fmt_coord(point.x)
                    y1=fmt_coord(MARGIN_TOP)
                    x2=fmt_coord(point.x)
                    y2=fmt_coord(geometry.with(|g| g.baseline_y))
                    stroke="#E5E7EB"
                    stroke-width="1"
                />
                <circle cx=fmt_coord(point.x) cy=fmt_coord(point.retail_y) r="4" fill=RETAIL_COLOR />
                <circle cx=fmt_coord(point.x) cy=fmt_coord(point.wholesale_y) r="4" fill=WHOLESALE_COLOR />
                <rect
                    x=fmt_coord(box_x)
                    y=fmt_coord(box_y)
                    width=fmt_coord(box_width)
                    height="66"
                    rx="4"
                    fill="#fff"
                    stroke="#D1D5DB"
                />
                <text x=fmt_coord(box_x + 10.0) y=fmt_coord(box_y + 20.0) font-size="13" fill="#4B4B4B">
                    {month.month}
                </text>
                <text x=fmt_coord(box_x + 10.0) y=fmt_coord(box_y + 38.0) font-size="13" fill=RETAIL_COLOR>
                    {format!("retailSales : {}", format_number(month.retail_sales))}
                </text>
                <text x=fmt_coord(box_x + 10.0) y=fmt_coord(box_y + 56.0) font-size="13" fill="#6B7280">
                    {format!("wholesaleSales : {}", format_number(month.wholesale_sales))}
                </text>
            </g>
        })
    };

    view! {
        <svg
            class="sales-chart"
            xmlns="http://www.w3.org/2000/svg"
            viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
            width="100%"
            height=fmt_coord(CHART_HEIGHT)
            on:mouseleave=move |_| hovered.set(None)
        >
            {plot}
            {tooltip}
        </svg>
    }
}
