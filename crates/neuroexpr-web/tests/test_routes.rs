//! Route tests against an in-memory toy dataset.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use neuroexpr_data::{Cohort, Dataset, DonorRecord, ExpressionMatrix, GeneCatalog, SampleRecord};
use neuroexpr_web::router::build_router;
use neuroexpr_web::state::AppState;

fn donor(id: &str, diagnosis: &str) -> DonorRecord {
    DonorRecord {
        donor_id: id.to_string(),
        diagnosis: diagnosis.to_string(),
    }
}

fn sample(donor_id: &str, profile: &str) -> SampleRecord {
    SampleRecord {
        donor_id: donor_id.to_string(),
        rnaseq_profile_id: profile.to_string(),
    }
}

/// Two AD subjects, one non-AD; G1 means: AD 15.0, non-AD 100.0.
fn toy_dataset() -> Dataset {
    Dataset {
        cohort: Cohort::from_parts(
            vec![
                donor("D1", "Probable Alzheimer'S Disease"),
                donor("D2", "Possible Alzheimer'S Disease"),
                donor("D3", "No Dementia"),
            ],
            vec![sample("D1", "S1"), sample("D2", "S2"), sample("D3", "S3")],
        )
        .unwrap(),
        genes: GeneCatalog::from_pairs([
            ("G1".to_string(), "APP".to_string()),
            ("G2".to_string(), "GFAP".to_string()),
        ]),
        expression: ExpressionMatrix::from_rows(
            vec!["G1".into(), "G2".into()],
            vec!["S1".into(), "S2".into(), "S3".into()],
            vec![vec![10.0, 20.0, 100.0], vec![5.0, 5.0, 7.0]],
        )
        .unwrap(),
    }
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_form_page_renders() {
    let router = build_router(AppState::new(toy_dataset()));
    let (status, _, body) = get(router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"action="/result""#));
    assert!(body.contains(r#"name="ad""#));
    // Dataset summary counts
    assert!(body.contains("Subjects"));
}

#[tokio::test]
async fn test_result_page_for_ad_partition() {
    let router = build_router(AppState::new(toy_dataset()));
    let (status, _, body) = get(router, "/result?ad=True").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ad=true"));
    assert!(body.contains("<svg"));
    assert!(body.contains("APP"));
    // AD partition mean of G1 = (10 + 20) / 2
    assert!(body.contains("15.000"));
}

#[tokio::test]
async fn test_absent_ad_param_defaults_to_non_ad() {
    let router = build_router(AppState::new(toy_dataset()));
    let (status, _, body) = get(router, "/result").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ad=false"));
    assert!(body.contains("100.000"));
}

#[tokio::test]
async fn test_non_true_ad_value_selects_non_ad() {
    let router = build_router(AppState::new(toy_dataset()));
    let (status, _, body) = get(router, "/result?ad=true").await;

    // Lowercase "true" is not the literal "True"
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ad=false"));
}

#[tokio::test]
async fn test_empty_partition_is_unprocessable() {
    let dataset = Dataset {
        cohort: Cohort::from_parts(
            vec![donor("D1", "Probable Alzheimer'S Disease")],
            vec![sample("D1", "S1")],
        )
        .unwrap(),
        genes: GeneCatalog::from_pairs([("G1".to_string(), "APP".to_string())]),
        expression: ExpressionMatrix::from_rows(
            vec!["G1".into()],
            vec!["S1".into()],
            vec![vec![1.0]],
        )
        .unwrap(),
    };
    let router = build_router(AppState::new(dataset));
    let (status, _, body) = get(router, "/result?ad=False").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("no subjects match"));
}

#[tokio::test]
async fn test_every_response_forbids_caching() {
    for uri in ["/", "/result?ad=True"] {
        let router = build_router(AppState::new(toy_dataset()));
        let (_, headers, _) = get(router, uri).await;
        assert_eq!(
            headers.get(header::CACHE_CONTROL).unwrap(),
            "no-cache, no-store, must-revalidate",
            "missing no-cache header on {}",
            uri
        );
    }
}
