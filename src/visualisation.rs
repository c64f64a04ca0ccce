// src/visualisation.rs

use plotters::prelude::*;

use crate::field::ScalarField;
use crate::palette::Palette;
use crate::params::AxisRange;

/// Save a scalar field as a heat-map PNG with axes and labels.
/// - cell (i, j) covers one rectangle of the chart area
/// - colour encodes the cell value through the palette
/// - axis coordinates are the presentational ranges, not cell indices
pub fn save_heatmap_plot(
    field: &ScalarField,
    palette: &Palette,
    x_range: AxisRange,
    y_range: AxisRange,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let columns = field.grid.columns;
    let rows = field.grid.rows;

    // Size of the output image in pixels
    let root = BitMapBackend::new(filename, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(40)
        .caption("Heat Map", ("sans-serif", 20))
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range.min..x_range.max, y_range.min..y_range.max)?;

    chart
        .configure_mesh()
        .x_desc("X-Axis Position")
        .y_desc("Y-Axis Position")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    if columns == 0 || rows == 0 {
        // Nothing to draw; keep the empty chart frame
        root.present()?;
        return Ok(());
    }

    let dx = x_range.span() / columns as f64;
    let dy = y_range.span() / rows as f64;
    let x0 = x_range.min;
    let y0 = y_range.min;

    // Draw one coloured rectangle per cell
    chart.draw_series((0..columns).flat_map(|i| {
        (0..rows).map(move |j| {
            let c = palette.color_at(field.value(i, j));
            let color = RGBColor(c.r, c.g, c.b);
            Rectangle::new(
                [
                    (x0 + i as f64 * dx, y0 + j as f64 * dy),
                    (x0 + (i + 1) as f64 * dx, y0 + (j + 1) as f64 * dy),
                ],
                color.filled(),
            )
        })
    }))?;

    root.present()?;
    Ok(())
}
