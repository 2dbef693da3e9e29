//! Input form — choose the diagnosis partition to analyze.

use axum::extract::State;
use axum::response::Html;

use crate::handlers::PAGE_CSS;
use crate::state::SharedState;

pub async fn input_form(State(state): State<SharedState>) -> Html<String> {
    Html(render_form(
        state.dataset.cohort.subject_count(),
        state.dataset.genes.len(),
        state.dataset.expression.profile_count(),
    ))
}

fn render_form(subjects: usize, genes: usize, profiles: usize) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Neuroexpr — Gene Expression by Diagnosis</title>
    <style>{css}</style>
</head>
<body>
<div class="container">
    <h1>Top 30 Mean Gene Expression</h1>
    <p class="muted">Aging, Dementia and TBI study cohort, partitioned by presumptive Alzheimer's-disease diagnosis</p>

    <div class="card">
        <div class="stats">
            <div class="stat"><div class="value">{subjects}</div><div class="label">Subjects</div></div>
            <div class="stat"><div class="value">{genes}</div><div class="label">Catalog Genes</div></div>
            <div class="stat"><div class="value">{profiles}</div><div class="label">RNA-seq Profiles</div></div>
        </div>
    </div>

    <div class="card">
        <form action="/result" method="get">
            <p>Select the study-subject partition:</p>
            <label><input type="radio" name="ad" value="True" checked>
                With presumptive Alzheimer's disease</label>
            <label><input type="radio" name="ad" value="False">
                Without presumptive Alzheimer's disease</label>
            <p><button class="btn" type="submit">Compute</button></p>
        </form>
    </div>
</div>
</body>
</html>"#,
        css = PAGE_CSS,
        subjects = subjects,
        genes = genes,
        profiles = profiles,
    )
}
