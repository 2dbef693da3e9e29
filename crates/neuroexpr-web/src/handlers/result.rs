//! Result view — recomputes the partition's top-30 means on every request
//! and inlines the freshly rendered chart.

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use neuroexpr_analysis::{partition_label, render_bar_chart, top_mean_expression, GeneMean};

use crate::handlers::{AppError, PAGE_CSS};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ResultParams {
    /// Only the literal "True" selects the AD partition. Anything else,
    /// including an absent parameter, selects the non-AD partition.
    pub ad: Option<String>,
}

pub async fn result_page(
    State(state): State<SharedState>,
    Query(params): Query<ResultParams>,
) -> Result<Html<String>, AppError> {
    let include_ad = matches!(params.ad.as_deref(), Some("True"));
    let label = partition_label(include_ad);

    let results = top_mean_expression(&state.dataset, include_ad)?;
    let chart_svg = render_bar_chart(&results, label)?;

    Ok(Html(render_result(label, &chart_svg, &results)))
}

fn render_result(label: &str, chart_svg: &str, results: &[GeneMean]) -> String {
    let rows_html: String = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "<tr><td>#{rank}</td><td>{symbol}</td><td>{mean:.3}</td></tr>\n",
                rank = i + 1,
                symbol = r.gene_symbol,
                mean = r.mean_fpkm,
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Result ({label}) — Neuroexpr</title>
    <style>{css}</style>
</head>
<body>
<div class="container">
    <h1>Top {count} Mean Gene Expression ({label})</h1>
    <p><a href="/" class="btn">New analysis</a></p>

    <div class="card">
        {chart}
    </div>

    <div class="card">
        <table>
            <thead>
                <tr><th>Rank</th><th>Gene Symbol</th><th>Mean FPKM</th></tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>
    </div>
</div>
</body>
</html>"#,
        label = label,
        css = PAGE_CSS,
        count = results.len(),
        chart = chart_svg,
        rows = rows_html,
    )
}
