#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use schoolhub::router::init_router;
use schoolhub::state::AppState;
use schoolhub_auth::BasicCredentials;
use schoolhub_config::JwtConfig;
use schoolhub_core::hash_password;
use serde_json::Value;
use sqlx::{PgPool, Postgres, Transaction};
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestPrincipal {
    pub id: Uuid,
    pub name: String,
    pub cpf: String,
    pub password: String,
}

pub struct TestSchool {
    pub id: Uuid,
    pub name: String,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 604800,
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    init_router(AppState::new(pool, test_jwt_config()))
}

/// Eleven random digits, shaped like a CPF.
pub fn generate_unique_cpf() -> String {
    format!("{:011}", Uuid::new_v4().as_u128() % 100_000_000_000)
}

pub fn generate_unique_school_name() -> String {
    format!("Test School {}", Uuid::new_v4())
}

pub fn basic_header(cpf: &str, password: &str) -> String {
    BasicCredentials {
        cpf: cpf.to_string(),
        password: password.to_string(),
    }
    .to_header()
}

fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 15).unwrap()
}

async fn insert_principal(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    name: &str,
    password: &str,
) -> TestPrincipal {
    let cpf = generate_unique_cpf();
    let hashed = hash_password(password).unwrap();

    let (id,): (Uuid,) = sqlx::query_as(&format!(
        "INSERT INTO {table} (name, cpf, birth_date, password) VALUES ($1, $2, $3, $4) RETURNING id"
    ))
    .bind(name)
    .bind(&cpf)
    .bind(birth_date())
    .bind(&hashed)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestPrincipal {
        id,
        name: name.to_string(),
        cpf,
        password: password.to_string(),
    }
}

pub async fn create_test_adm(tx: &mut Transaction<'_, Postgres>, password: &str) -> TestPrincipal {
    insert_principal(tx, "adms", "Test Adm", password).await
}

pub async fn create_test_teacher(
    tx: &mut Transaction<'_, Postgres>,
    password: &str,
) -> TestPrincipal {
    insert_principal(tx, "teachers", "Test Teacher", password).await
}

pub async fn create_test_student(
    tx: &mut Transaction<'_, Postgres>,
    password: &str,
) -> TestPrincipal {
    insert_principal(tx, "students", "Test Student", password).await
}

pub async fn create_test_school(tx: &mut Transaction<'_, Postgres>, name: &str) -> TestSchool {
    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO schools (name, street, district, number) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind("Rua das Flores")
    .bind("Centro")
    .bind("100")
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestSchool {
        id,
        name: name.to_string(),
    }
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn login_request(uri: &str, cpf: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", basic_header(cpf, password))
        .body(Body::empty())
        .unwrap()
}

/// Runs one request and returns the status and JSON body (`Null` when empty).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}

pub async fn get_adm_token(pool: &PgPool) -> String {
    let mut tx = pool.begin().await.unwrap();
    let adm = create_test_adm(&mut tx, "adm-password").await;
    tx.commit().await.unwrap();

    let (status, body) = send(
        setup_test_app(pool.clone()),
        login_request("/adm/login", &adm.cpf, &adm.password),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["accessToken"].as_str().unwrap().to_string()
}
