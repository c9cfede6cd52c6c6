use std::path::Path;

use plotters::coord::types::RangedCoordf64;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::chart::ChartSpec;
use crate::chart::font::{FONT_FAMILY, register_embedded_font};
use crate::chart::layout::{BoxGeometry, ChartLayout};
use crate::error::ChartError;

const BOX_FACE: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const MEDIAN_LINE: RGBColor = RGBColor(0xff, 0x7f, 0x0e);
const GRID_LINE: RGBColor = RGBColor(0xb0, 0xb0, 0xb0);

const GRID_DASH_PX: u32 = 6;
const GRID_GAP_PX: u32 = 4;
const TICK_PX: i32 = 5;
const FLIER_RADIUS_PX: i32 = 3;

type ScoreChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

pub fn draw_boxplot(
    out_path: &Path,
    spec: &ChartSpec,
    layout: &ChartLayout,
) -> Result<(), ChartError> {
    register_embedded_font()?;

    let root = BitMapBackend::new(out_path, spec.pixel_size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, (FONT_FAMILY, spec.title_px))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(layout.x_range.clone(), layout.y_range.clone())?;

    // Grid first so the boxes cover it.
    let grid_style = GRID_LINE.mix(spec.grid_alpha).stroke_width(1);
    let (x0, x1) = (layout.x_range.start, layout.x_range.end);
    chart.draw_series(layout.y_ticks.iter().map(|&y| {
        DashedPathElement::new(vec![(x0, y), (x1, y)], GRID_DASH_PX, GRID_GAP_PX, grid_style)
    }))?;

    for geometry in &layout.boxes {
        draw_box(&mut chart, geometry)?;
    }

    let top_left = chart.backend_coord(&(layout.x_range.start, layout.y_range.end));
    let bottom_right = chart.backend_coord(&(layout.x_range.end, layout.y_range.start));
    root.draw(&Rectangle::new(
        [top_left, bottom_right],
        BLACK.stroke_width(1),
    ))?;

    let tick_font = (FONT_FAMILY, spec.tick_px).into_font();
    let y_tick_style = TextStyle::from(tick_font.clone()).pos(Pos::new(HPos::Right, VPos::Center));
    for &y in &layout.y_ticks {
        let (px, py) = chart.backend_coord(&(layout.x_range.start, y));
        root.draw(&PathElement::new(
            vec![(px - TICK_PX, py), (px, py)],
            BLACK.stroke_width(1),
        ))?;
        root.draw_text(&format_tick(y), &y_tick_style, (px - TICK_PX - 3, py))?;
    }

    let x_tick_style = TextStyle::from(tick_font).pos(Pos::new(HPos::Center, VPos::Top));
    for geometry in &layout.boxes {
        let (px, py) = chart.backend_coord(&(geometry.position, layout.y_range.start));
        root.draw(&PathElement::new(
            vec![(px, py), (px, py + TICK_PX)],
            BLACK.stroke_width(1),
        ))?;
        root.draw_text(&geometry.label, &x_tick_style, (px, py + TICK_PX + 3))?;
    }

    let y_label_style = TextStyle::from(
        (FONT_FAMILY, spec.label_px)
            .into_font()
            .transform(FontTransform::Rotate270),
    )
    .pos(Pos::new(HPos::Center, VPos::Center));
    let mid_y = (top_left.1 + bottom_right.1) / 2;
    root.draw_text(&spec.y_label, &y_label_style, (24, mid_y))?;

    root.present()?;
    Ok(())
}

fn draw_box<DB: DrawingBackend>(
    chart: &mut ScoreChart<'_, DB>,
    geometry: &BoxGeometry,
) -> Result<(), ChartError> {
    let s = &geometry.group.stats;
    let x = geometry.position;
    let hw = geometry.half_width;
    let cap = geometry.cap_half_width;
    let stroke = BLACK.stroke_width(1);

    chart.draw_series([
        PathElement::new(vec![(x, s.q1), (x, s.whisker_low)], stroke),
        PathElement::new(vec![(x, s.q3), (x, s.whisker_high)], stroke),
        PathElement::new(
            vec![(x - cap, s.whisker_low), (x + cap, s.whisker_low)],
            stroke,
        ),
        PathElement::new(
            vec![(x - cap, s.whisker_high), (x + cap, s.whisker_high)],
            stroke,
        ),
    ])?;

    chart.draw_series([
        Rectangle::new([(x - hw, s.q3), (x + hw, s.q1)], BOX_FACE.filled()),
        Rectangle::new([(x - hw, s.q3), (x + hw, s.q1)], stroke),
    ])?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x - hw, s.median), (x + hw, s.median)],
        MEDIAN_LINE.stroke_width(2),
    )))?;

    chart.draw_series(
        s.fliers
            .iter()
            .map(|&v| Circle::new((x, v), FLIER_RADIUS_PX, stroke)),
    )?;

    Ok(())
}

fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/render.rs"]
mod tests;
