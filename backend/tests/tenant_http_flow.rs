//! End-to-end HTTP flow over the real tenant service and the in-memory store.

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{Value, json};

use menu_backend::Trace;
use menu_backend::domain::{TRACE_ID_HEADER, TenantService, TraceId};
use menu_backend::inbound::http::state::HttpState;
use menu_backend::inbound::http::{json_config, query_config, tenants};
use menu_backend::outbound::memory::InMemoryTenantRepository;

macro_rules! app {
    () => {{
        let service = TenantService::new(
            Arc::new(InMemoryTenantRepository::new()),
            Arc::new(DefaultClock),
        );
        test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::from_service(Arc::new(service))))
                .app_data(json_config())
                .app_data(query_config())
                .wrap(Trace)
                .service(web::scope("/api/v1").configure(tenants::configure)),
        )
        .await
    }};
}

fn register_body(candidate: &str, owner: &str) -> Value {
    json!({
        "displayName": "My Cafe",
        "candidateKey": candidate,
        "ownerRef": owner,
    })
}

#[rstest]
#[actix_web::test]
async fn register_then_resolve_by_location() {
    let app = app!();

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/tenants")
            .set_json(register_body("My-Cafe", "owner-a"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
        .to_owned();
    let created: Value = test::read_body_json(res).await;
    let key = created["tenantKey"].as_str().expect("tenant key");
    assert!(key.starts_with("my-cafe_"));
    assert_eq!(key.len(), "my-cafe_".len() + 6);
    assert_eq!(location, format!("/api/v1/tenants/{key}"));
    assert_eq!(created["plan"], "free");

    let res = test::call_service(&app, test::TestRequest::get().uri(&location).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let resolved: Value = test::read_body_json(res).await;
    assert_eq!(resolved, created);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/owners/owner-a/tenant")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let owned: Value = test::read_body_json(res).await;
    assert_eq!(owned["tenantKey"], key);
}

#[rstest]
#[actix_web::test]
async fn second_tenant_for_owner_is_a_conflict() {
    let app = app!();
    for (candidate, expected) in [("my-cafe", StatusCode::CREATED), ("my-bar", StatusCode::CONFLICT)]
    {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/tenants")
                .set_json(register_body(candidate, "owner-a"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
        if expected == StatusCode::CONFLICT {
            let body: Value = test::read_body_json(res).await;
            assert_eq!(body["code"], "conflict");
            assert_eq!(
                body["details"],
                json!({ "field": "ownerRef", "code": "owner_has_tenant" })
            );
        }
    }
}

#[rstest]
#[case("ab", "too_short")]
#[case("my cafe", "invalid_characters")]
#[case("   ", "empty")]
#[actix_web::test]
async fn invalid_candidate_reports_field_and_trace(#[case] candidate: &str, #[case] code: &str) {
    let app = app!();
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/tenants")
            .set_json(register_body(candidate, "owner-a"))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let header_trace = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("trace header")
        .to_owned();
    assert!(header_trace.parse::<TraceId>().is_ok());

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["traceId"], header_trace.as_str());
    assert_eq!(body["details"], json!({ "field": "candidateKey", "code": code }));
}

#[rstest]
#[actix_web::test]
async fn availability_reflects_registered_keys() {
    let app = app!();

    let check = |candidate: &'static str| {
        test::TestRequest::get()
            .uri(&format!("/api/v1/tenants/availability?candidate={candidate}"))
            .to_request()
    };

    let body: Value = test::call_and_read_body_json(&app, check("My%20Cafe")).await;
    assert_eq!(body, json!({ "available": true, "reason": "Available" }));

    let body: Value = test::call_and_read_body_json(&app, check("ab")).await;
    assert_eq!(body, json!({ "available": false, "reason": "Too short" }));

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/tenants")
            .set_json(register_body("my-cafe", "owner-a"))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(res).await;
    let key = created["tenantKey"].as_str().expect("tenant key").to_owned();

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/tenants/availability?candidate={key}"))
            .to_request(),
    )
    .await;
    assert_eq!(body, json!({ "available": false, "reason": "Already taken" }));
}

#[rstest]
#[actix_web::test]
async fn unknown_key_is_not_found() {
    let app = app!();
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/tenants/unknown-key_000000")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
}
