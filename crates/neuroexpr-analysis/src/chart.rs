//! Vertical bar chart of the ranked means, rendered as an in-memory SVG.
//!
//! Rendering into a string (rather than a shared file path) keeps the chart
//! request-scoped: two concurrent requests cannot interleave their output.

use neuroexpr_common::{NeuroexprError, Result};
use plotters::prelude::*;

use crate::aggregate::GeneMean;

const CHART_SIZE: (u32, u32) = (960, 640);

/// Render a bar chart of the ranked results: one bar per gene symbol
/// (rotated x labels), bar height = mean FPKM, title carries the partition
/// label. Returns a complete SVG document.
pub fn render_bar_chart(results: &[GeneMean], title: &str) -> Result<String> {
    let mut svg = String::new();
    draw(&mut svg, results, title).map_err(|e| NeuroexprError::Chart(e.to_string()))?;
    Ok(svg)
}

fn draw(
    buffer: &mut String,
    results: &[GeneMean],
    title: &str,
) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let root = SVGBackend::with_string(buffer, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = results.iter().map(|r| r.mean_fpkm).fold(0.0, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
    let x_max = results.len().max(1) as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(120)
        .y_label_area_size(70)
        .build_cartesian_2d(0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(results.len().max(1))
        .x_label_formatter(&|&i: &i32| {
            results
                .get(i as usize)
                .map(|r| r.gene_symbol.clone())
                .unwrap_or_default()
        })
        .x_label_style(
            ("sans-serif", 13)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_desc("Gene Symbols")
        .y_desc("Mean Gene Expression (FPKM)")
        .draw()?;

    chart.draw_series(results.iter().enumerate().map(|(i, r)| {
        Rectangle::new(
            [(i as i32, 0.0), (i as i32 + 1, r.mean_fpkm)],
            BLUE.mix(0.6).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str, mean: f64) -> GeneMean {
        GeneMean {
            gene_id: symbol.to_string(),
            gene_symbol: symbol.to_string(),
            mean_fpkm: mean,
        }
    }

    #[test]
    fn test_renders_svg_with_symbols_and_title() {
        let svg =
            render_bar_chart(&[row("APP", 15.0), row("GFAP", 5.0)], "ad=true").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("APP"));
        assert!(svg.contains("GFAP"));
        assert!(svg.contains("ad=true"));
        assert!(svg.contains("Mean Gene Expression (FPKM)"));
    }

    #[test]
    fn test_renders_without_bars_for_empty_input() {
        // Degenerate but drawable: axes only.
        let svg = render_bar_chart(&[], "ad=false").unwrap();
        assert!(svg.contains("<svg"));
    }
}
