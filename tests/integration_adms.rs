mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    create_test_adm, generate_unique_cpf, json_request, login_request, send, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_adm(pool: PgPool) {
    let cpf = generate_unique_cpf();
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/adms",
            &json!({
                "name": "Maria Souza",
                "cpf": cpf,
                "birth_date": "1990-05-17T00:00:00.000Z",
                "password": "secret123"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Maria Souza");
    assert_eq!(body["cpf"], cpf);
    assert_eq!(body["birth_date"], "1990-05-17");
    assert!(body.get("password").is_none());

    // The stored password is a bcrypt hash that logs in
    let (status, _) = send(
        setup_test_app(pool),
        login_request("/adm/login", &cpf, "secret123"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_adm_from_form_body(pool: PgPool) {
    let cpf = generate_unique_cpf();
    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("POST")
        .uri("/adms")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "name=Jose&cpf={}&birth_date=1980-01-01&password=secret",
            cpf
        )))
        .unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Jose");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_adm_duplicate_cpf(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let existing = create_test_adm(&mut tx, "secret").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool);
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/adms",
            &json!({
                "name": "Other",
                "cpf": existing.cpf,
                "birth_date": "1990-01-01",
                "password": "secret"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CPF already registered");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_adm_missing_field(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, body) = send(
        app,
        json_request("POST", "/adms", &json!({ "name": "No Cpf" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "cpf is required");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_adm_rehashes_password(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let adm = create_test_adm(&mut tx, "old-password").await;
    tx.commit().await.unwrap();

    let (status, body) = send(
        setup_test_app(pool.clone()),
        json_request(
            "PUT",
            &format!("/adms/{}", adm.id),
            &json!({
                "name": "Renamed",
                "cpf": adm.cpf,
                "birth_date": "1991-02-03",
                "password": "new-password"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Renamed");
    assert!(body.get("password").is_none());

    let (status, _) = send(
        setup_test_app(pool.clone()),
        login_request("/adm/login", &adm.cpf, "old-password"),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        setup_test_app(pool),
        login_request("/adm/login", &adm.cpf, "new-password"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_unknown_adm(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, body) = send(
        app,
        json_request(
            "PUT",
            &format!("/adms/{}", Uuid::new_v4()),
            &json!({
                "name": "Ghost",
                "cpf": generate_unique_cpf(),
                "birth_date": "1990-01-01",
                "password": "secret"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Adm not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_adm(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let adm = create_test_adm(&mut tx, "secret").await;
    tx.commit().await.unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/adms/{}", adm.id))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(setup_test_app(pool.clone()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Adm deleted successfully");

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/adms/{}", adm.id))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(setup_test_app(pool), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Adm not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_adms(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    create_test_adm(&mut tx, "secret").await;
    create_test_adm(&mut tx, "secret").await;
    tx.commit().await.unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/adms")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(setup_test_app(pool), request).await;

    assert_eq!(status, StatusCode::OK);
    let adms = body.as_array().unwrap();
    assert_eq!(adms.len(), 2);
    assert!(adms.iter().all(|adm| adm.get("password").is_none()));
}
