extern crate plotters;
use plotters::prelude::*;

extern crate bezedit;
use bezedit::{BezierMode, Curve, PointMode, PointType, Vec2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // an S-shaped curve through four anchors
    let mut curve = Curve::new(BezierMode::Cubic);
    curve.add_point_with_distance(0.0, 0.0, 40.0);
    curve.add_point_with_distance(120.0, 80.0, 40.0);
    curve.add_point_with_distance(240.0, 0.0, 40.0);
    curve.add_point_with_distance(360.0, 80.0, 40.0);

    // simulate a few editor drags: grab a handle under the cursor and move it
    curve[1].mode = PointMode::Smooth;
    let grab = Vec2::new(161.0, 81.0);
    if let Some(hit) = curve.hit_test(grab) {
        curve.move_point(hit.index, hit.part, (170.0, 140.0), hit.offset);
    }
    curve[2].mode = PointMode::Cusp;
    curve[2].move_to(PointType::HandleIn, (230.0, -60.0));

    // render the curve to desired accuracy
    let resolution: usize = 32;
    let baked: Vec<(f64, f64)> = curve
        .bake(resolution)?
        .into_iter()
        .map(|p| (p.x as f64, p.y as f64))
        .collect();
    let anchors: Vec<(f64, f64)> = curve
        .positions()
        .into_iter()
        .map(|p| (p.x as f64, p.y as f64))
        .collect();
    let handles: Vec<(f64, f64)> = curve
        .control_handles()
        .into_iter()
        .map(|p| (p.x as f64, p.y as f64))
        .collect();

    let root = BitMapBackend::new("bezedit_cubic_curve.png", (800, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    // setup the chart
    let mut chart = ChartBuilder::on(&root)
        .caption("Edited Cubic Bezier Curve", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-60.0..420.0, -100.0..180.0)?;

    chart.configure_mesh().draw()?;

    // draw the connector lines from anchors to their handles
    for (anchor, handle) in curve.control_lines() {
        chart.draw_series(LineSeries::new(
            vec![
                (anchor.x as f64, anchor.y as f64),
                (handle.x as f64, handle.y as f64),
            ],
            &BLUE.mix(0.4),
        ))?;
    }

    chart
        .draw_series(PointSeries::of_element(handles, 4, &BLUE, &|coord, size, style| {
            EmptyElement::at(coord) + Circle::new((0, 0), size, style)
        }))?
        .label("Handles")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(PointSeries::of_element(anchors, 5, &BLACK, &|coord, size, style| {
            EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled())
        }))?
        .label("Anchors")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    // draw the actual baked polyline
    chart
        .draw_series(LineSeries::new(baked, &RED))?
        .label(format!("B(t), {} samples per segment", resolution))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
