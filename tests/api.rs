mod common;

use reqwest::StatusCode;
use reqwest::header::LOCATION;
use serde_json::{Value, json};

use common::test_server::{ADMIN_EMAIL, ADMIN_PASSWORD, TestServer};

const MONDAY: u8 = 1;
const TUESDAY: u8 = 2;
const FIRST_SLOT: &str = "07:30 - 08:20";
const SECOND_SLOT: &str = "08:20 - 09:10";

struct School {
    class_a: String,
    class_b: String,
    math: String,
    art: String,
    teacher_id: String,
    teacher_token: String,
}

async fn seed_school(server: &TestServer) -> School {
    let class_a = server
        .admin_create("/api/v1/admin/classes", json!({ "name": "7A" }))
        .await;
    let class_b = server
        .admin_create(
            "/api/v1/admin/classes",
            json!({ "name": "7B", "description": "Second cohort" }),
        )
        .await;
    let math = server
        .admin_create(
            "/api/v1/admin/subjects",
            json!({ "name": "Math", "icon": "calculator", "color": "#ef4444" }),
        )
        .await;
    let art = server
        .admin_create("/api/v1/admin/subjects", json!({ "name": "Art" }))
        .await;
    let teacher = server
        .admin_create(
            "/api/v1/admin/teachers",
            json!({
                "full_name": "Jane Teacher",
                "email": "jane@school.test",
                "password": "jane-pass",
                "subject_ids": [math["id"], art["id"]],
            }),
        )
        .await;

    let teacher_token = server.sign_in("jane@school.test", "jane-pass").await;

    School {
        class_a: class_a["id"].as_str().unwrap().to_string(),
        class_b: class_b["id"].as_str().unwrap().to_string(),
        math: math["id"].as_str().unwrap().to_string(),
        art: art["id"].as_str().unwrap().to_string(),
        teacher_id: teacher["id"].as_str().unwrap().to_string(),
        teacher_token,
    }
}

async fn post_schedule(server: &TestServer, body: Value) -> reqwest::Response {
    server
        .client
        .post(server.url("/api/v1/admin/schedules"))
        .bearer_auth(&server.admin_token)
        .json(&body)
        .send()
        .await
        .unwrap()
}

async fn get_view(server: &TestServer, path: &str, token: Option<&str>) -> reqwest::Response {
    let mut req = server.client.get(server.url(path));
    if let Some(token) = token {
        req = req.bearer_auth(token);
    }
    req.send().await.unwrap()
}

fn location(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn health_check() {
    let server = TestServer::start().await;

    let resp = server.client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn admin_registration_rules() {
    let server = TestServer::start().await;
    let register = |body: Value| {
        server
            .client
            .post(server.url("/api/v1/auth/admin-register"))
            .json(&body)
            .send()
    };

    let resp = register(json!({
        "email": "second@school.test",
        "full_name": "Second",
        "password": "abcdef",
        "confirm_password": "abcdeg",
    }))
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = register(json!({
        "email": "second@school.test",
        "full_name": "Second",
        "password": "abc",
        "confirm_password": "abc",
    }))
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = register(json!({
        "email": "not-an-email",
        "full_name": "Second",
        "password": "abcdef",
        "confirm_password": "abcdef",
    }))
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = register(json!({
        "email": ADMIN_EMAIL.to_uppercase(),
        "full_name": "Copy",
        "password": "abcdef",
        "confirm_password": "abcdef",
    }))
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn admin_registration_can_be_disabled() {
    let server = TestServer::start_with(|config| config.allow_admin_registration = false).await;

    let resp = server
        .client
        .post(server.url("/api/v1/auth/admin-register"))
        .json(&json!({
            "email": "first@school.test",
            "full_name": "First",
            "password": "abcdef",
            "confirm_password": "abcdef",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn sign_in_session_and_sign_out() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/api/v1/auth/sign-in"))
        .json(&json!({ "email": ADMIN_EMAIL, "password": "wrong-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid email or password");

    let resp = server
        .client
        .post(server.url("/api/v1/auth/sign-in"))
        .json(&json!({ "email": "nobody@school.test", "password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = server.sign_in(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert!(token.starts_with("timegrid_"));

    let resp = server
        .client
        .get(server.url("/api/v1/auth/session"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["profile"]["email"], ADMIN_EMAIL);
    assert_eq!(body["data"]["profile"]["role"], "admin");
    assert!(body["data"]["profile"].get("password_hash").is_none());

    let resp = server
        .client
        .post(server.url("/api/v1/auth/sign-out"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = server
        .client
        .get(server.url("/api/v1/auth/session"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().contains_key("www-authenticate"));
}

#[tokio::test]
async fn class_and_subject_crud() {
    let server = TestServer::start().await;

    let class = server
        .admin_create("/api/v1/admin/classes", json!({ "name": "  8C  " }))
        .await;
    assert_eq!(class["name"], "8C");
    let class_id = class["id"].as_str().unwrap();

    let resp = server
        .client
        .patch(server.url(&format!("/api/v1/admin/classes/{class_id}")))
        .bearer_auth(&server.admin_token)
        .json(&json!({ "description": "Science track" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["name"], "8C");
    assert_eq!(body["data"]["description"], "Science track");

    let subject = server
        .admin_create("/api/v1/admin/subjects", json!({ "name": "History" }))
        .await;
    assert_eq!(subject["icon"], "book-open");
    assert_eq!(subject["color"], "#3B82F6");

    let resp = server
        .client
        .post(server.url("/api/v1/admin/subjects"))
        .bearer_auth(&server.admin_token)
        .json(&json!({ "name": "Music", "color": "red" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = server
        .client
        .post(server.url("/api/v1/admin/classes"))
        .bearer_auth(&server.admin_token)
        .json(&json!({ "name": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = server
        .client
        .get(server.url("/api/v1/classes"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let resp = server
        .client
        .delete(server.url(&format!("/api/v1/admin/classes/{class_id}")))
        .bearer_auth(&server.admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = server
        .client
        .get(server.url(&format!("/api/v1/admin/classes/{class_id}")))
        .bearer_auth(&server.admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_routes_reject_other_callers() {
    let server = TestServer::start().await;
    let school = seed_school(&server).await;

    let resp = server
        .client
        .get(server.url("/api/v1/admin/classes"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = server
        .client
        .get(server.url("/api/v1/admin/overview"))
        .bearer_auth(&school.teacher_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = server
        .client
        .get(server.url("/api/v1/teacher/dashboard"))
        .bearer_auth(&server.admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn class_slot_conflict_is_rejected() {
    let server = TestServer::start().await;
    let school = seed_school(&server).await;

    let resp = post_schedule(
        &server,
        json!({
            "class_id": school.class_a,
            "subject_id": school.math,
            "day_of_week": MONDAY,
            "time_slot": FIRST_SLOT,
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = post_schedule(
        &server,
        json!({
            "class_id": school.class_a,
            "subject_id": school.art,
            "day_of_week": MONDAY,
            "time_slot": FIRST_SLOT,
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["details"]["conflict"]["kind"], "class_slot_taken");

    let resp = post_schedule(
        &server,
        json!({
            "class_id": school.class_a,
            "subject_id": school.art,
            "day_of_week": MONDAY,
            "time_slot": SECOND_SLOT,
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn teacher_double_booking_is_rejected() {
    let server = TestServer::start().await;
    let school = seed_school(&server).await;

    let resp = post_schedule(
        &server,
        json!({
            "class_id": school.class_a,
            "subject_id": school.math,
            "teacher_id": school.teacher_id,
            "day_of_week": TUESDAY,
            "time_slot": SECOND_SLOT,
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = post_schedule(
        &server,
        json!({
            "class_id": school.class_b,
            "subject_id": school.art,
            "teacher_id": school.teacher_id,
            "day_of_week": TUESDAY,
            "time_slot": SECOND_SLOT,
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["details"]["conflict"]["kind"], "teacher_double_booked");

    let resp = post_schedule(
        &server,
        json!({
            "class_id": school.class_b,
            "subject_id": school.art,
            "day_of_week": TUESDAY,
            "time_slot": SECOND_SLOT,
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn schedule_update_and_idempotent_delete() {
    let server = TestServer::start().await;
    let school = seed_school(&server).await;

    let resp = post_schedule(
        &server,
        json!({
            "class_id": school.class_a,
            "subject_id": school.math,
            "teacher_id": school.teacher_id,
            "day_of_week": MONDAY,
            "time_slot": FIRST_SLOT,
        }),
    )
    .await;
    let body: Value = resp.json().await.unwrap();
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["subject"]["name"], "Math");
    assert_eq!(body["data"]["teacher"]["full_name"], "Jane Teacher");

    let resp = server
        .client
        .patch(server.url(&format!("/api/v1/admin/schedules/{id}")))
        .bearer_auth(&server.admin_token)
        .json(&json!({
            "subject_id": school.art,
            "teacher_id": school.teacher_id,
            "day_of_week": MONDAY,
            "time_slot": FIRST_SLOT,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["subject"]["name"], "Art");
    assert_eq!(body["data"]["class"]["name"], "7A");

    let move_to = |class_id: &str| {
        server
            .client
            .patch(server.url(&format!("/api/v1/admin/schedules/{id}")))
            .bearer_auth(&server.admin_token)
            .json(&json!({
                "class_id": class_id,
                "subject_id": school.art,
                "teacher_id": school.teacher_id,
                "day_of_week": MONDAY,
                "time_slot": FIRST_SLOT,
            }))
            .send()
    };

    let resp = move_to("no-such-class").await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = move_to(&school.class_b).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["class"]["name"], "7B");

    let resp = server
        .client
        .post(server.url("/api/v1/admin/schedules"))
        .bearer_auth(&server.admin_token)
        .json(&json!({
            "class_id": school.class_a,
            "subject_id": school.math,
            "day_of_week": 6,
            "time_slot": FIRST_SLOT,
        }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());

    for _ in 0..2 {
        let resp = server
            .client
            .delete(server.url(&format!("/api/v1/admin/schedules/{id}")))
            .bearer_auth(&server.admin_token)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    let resp = server
        .client
        .get(server.url(&format!(
            "/api/v1/admin/schedules?class_id={}",
            school.class_a
        )))
        .bearer_auth(&server.admin_token)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn public_grid_and_teacher_dashboard() {
    let server = TestServer::start().await;
    let school = seed_school(&server).await;

    for (class_id, subject_id, day, slot) in [
        (&school.class_a, &school.math, TUESDAY, SECOND_SLOT),
        (&school.class_a, &school.art, MONDAY, FIRST_SLOT),
        (&school.class_b, &school.math, MONDAY, SECOND_SLOT),
    ] {
        let resp = post_schedule(
            &server,
            json!({
                "class_id": class_id,
                "subject_id": subject_id,
                "teacher_id": school.teacher_id,
                "day_of_week": day,
                "time_slot": slot,
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = server
        .client
        .get(server.url(&format!("/api/v1/classes/{}/schedule", school.class_a)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    let grid = &body["data"];
    assert_eq!(grid["slots"].as_array().unwrap().len(), 9);
    let days = grid["days"].as_array().unwrap();
    assert_eq!(days.len(), 5);
    assert_eq!(days[0]["label"], "Monday");
    assert_eq!(days[0]["entries"][0]["subject"]["name"], "Art");
    assert_eq!(days[1]["entries"][0]["subject"]["name"], "Math");
    assert!(days[2]["entries"].as_array().unwrap().is_empty());

    let resp = server
        .client
        .get(server.url("/api/v1/classes/missing/schedule"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = server
        .client
        .get(server.url("/api/v1/teacher/dashboard"))
        .bearer_auth(&school.teacher_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    let dashboard = &body["data"];
    assert_eq!(dashboard["stats"]["total_classes"], 2);
    assert_eq!(dashboard["stats"]["total_subjects"], 2);
    assert_eq!(dashboard["stats"]["weekly_hours"], 3);
    assert_eq!(dashboard["schedule"]["days"][0]["entries"].as_array().unwrap().len(), 2);

    let resp = server
        .client
        .get(server.url("/api/v1/admin/overview"))
        .bearer_auth(&server.admin_token)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["classes"], 2);
    assert_eq!(body["data"]["subjects"], 2);
    assert_eq!(body["data"]["teachers"], 1);
    assert_eq!(body["data"]["schedules"], 3);
}

#[tokio::test]
async fn deleting_teacher_keeps_lessons() {
    let server = TestServer::start().await;
    let school = seed_school(&server).await;

    let resp = post_schedule(
        &server,
        json!({
            "class_id": school.class_a,
            "subject_id": school.math,
            "teacher_id": school.teacher_id,
            "day_of_week": MONDAY,
            "time_slot": FIRST_SLOT,
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = server
        .client
        .delete(server.url(&format!("/api/v1/admin/teachers/{}", school.teacher_id)))
        .bearer_auth(&server.admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = server
        .client
        .get(server.url(&format!("/api/v1/classes/{}/schedule", school.class_a)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let entry = &body["data"]["days"][0]["entries"][0];
    assert_eq!(entry["subject"]["name"], "Math");
    assert!(entry["teacher"].is_null());

    let resp = server
        .client
        .get(server.url("/api/v1/auth/session"))
        .bearer_auth(&school.teacher_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn teacher_update_replaces_subjects() {
    let server = TestServer::start().await;
    let school = seed_school(&server).await;

    let resp = server
        .client
        .patch(server.url(&format!("/api/v1/admin/teachers/{}", school.teacher_id)))
        .bearer_auth(&server.admin_token)
        .json(&json!({ "full_name": "Jane Doe", "subject_ids": [school.art] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["full_name"], "Jane Doe");
    let subjects = body["data"]["subjects"].as_array().unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0]["name"], "Art");

    let resp = server
        .client
        .patch(server.url(&format!("/api/v1/admin/teachers/{}", school.teacher_id)))
        .bearer_auth(&server.admin_token)
        .json(&json!({ "subject_ids": ["no-such-subject"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = server
        .client
        .post(server.url("/api/v1/admin/teachers"))
        .bearer_auth(&server.admin_token)
        .json(&json!({
            "full_name": "Copy",
            "email": "JANE@school.test",
            "password": "abcdef",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn rejected_teacher_update_changes_nothing() {
    let server = TestServer::start().await;
    let school = seed_school(&server).await;
    let teacher_url = server.url(&format!("/api/v1/admin/teachers/{}", school.teacher_id));

    let resp = server
        .client
        .patch(&teacher_url)
        .bearer_auth(&server.admin_token)
        .json(&json!({
            "full_name": "Changed",
            "password": "new-pass",
            "subject_ids": ["no-such-subject"],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = server
        .client
        .post(server.url("/api/v1/auth/sign-in"))
        .json(&json!({ "email": "jane@school.test", "password": "new-pass" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = server
        .client
        .get(server.url("/api/v1/auth/session"))
        .bearer_auth(&school.teacher_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["profile"]["full_name"], "Jane Teacher");

    // a valid password change does revoke the old session
    let resp = server
        .client
        .patch(&teacher_url)
        .bearer_auth(&server.admin_token)
        .json(&json!({ "password": "new-pass" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = server
        .client
        .get(server.url("/api/v1/auth/session"))
        .bearer_auth(&school.teacher_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    server.sign_in("jane@school.test", "new-pass").await;
}

#[tokio::test]
async fn view_routes_follow_role() {
    let server = TestServer::start().await;
    let school = seed_school(&server).await;

    let resp = get_view(&server, "/admin", None).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    let resp = get_view(&server, "/teacher", None).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    let resp = get_view(&server, "/admin", Some(&school.teacher_token)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let resp = get_view(&server, "/teacher", Some(&server.admin_token)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let resp = get_view(&server, "/admin", Some(&server.admin_token)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["view"], "admin-dashboard");

    let resp = get_view(&server, "/admin/", Some(&server.admin_token)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["view"], "admin-dashboard");

    let resp = get_view(&server, "/teacher/", Some(&server.admin_token)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let resp = get_view(&server, "/teacher", Some(&school.teacher_token)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_view(&server, "/", Some("timegrid_bogus_token")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["role"], "guest");

    let resp = get_view(&server, "/no-such-page", None).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let resp = get_view(&server, "/api/v1/no-such-endpoint", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
