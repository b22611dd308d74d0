//! Integration tests for the catalog and daily summary endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_list_meals() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/catalog/meals").await;

    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    let meals = body["meals"].as_array().unwrap();
    assert_eq!(meals.len(), 10);
    assert!(meals.iter().any(|m| m["id"] == "oatmeal"));
}

#[tokio::test]
async fn test_list_workouts() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/catalog/workouts").await;

    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["workouts"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_daily_summary() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/daily/summary",
            json!({
                "date": "2024-12-29",
                "meals": [
                    { "meal_id": "oatmeal", "weight_g": 100 },
                    { "meal_id": "banana", "weight_g": 120 }
                ],
                "workouts": [
                    { "workout_id": "walking", "duration_min": 45 }
                ],
                "water": [250, 250, 500],
                "daily_calorie_goal": 2000,
                "daily_water_goal_ml": 2000
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2024-12-29");
    // 68 + 107 (106.8)
    assert_eq!(body["calories_in"], 175);
    assert_eq!(body["calories_burned"], 180);
    assert_eq!(body["net_calories"], -5);
    assert_eq!(body["meal_count"], 2);
    assert_eq!(body["water_total_ml"], 1000);
    assert_eq!(body["hydration_progress"]["percentage"], 50.0);
    assert_eq!(body["meals"][1]["name"], "Banana");
}

#[tokio::test]
async fn test_daily_summary_empty_body() {
    let app = common::TestApp::new();

    let (status, body) = app.post_json("/api/v1/daily/summary", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calories_in"], 0);
    assert!(body.get("calorie_progress").is_none());
}

#[tokio::test]
async fn test_daily_summary_unknown_meal() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/daily/summary",
            json!({ "meals": [{ "meal_id": "pizza", "weight_g": 300 }] }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_daily_summary_rejects_bad_weight() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/daily/summary",
            json!({ "meals": [{ "meal_id": "eggs", "weight_g": 0 }] }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "weight_g");
}

#[tokio::test]
async fn test_custom_catalog() {
    let catalog = nutrition_tracker_backend::services::Catalog::from_toml(
        r#"
        [[meals]]
        id = "lentils"
        name = "Lentils"
        calories_per_gram = 1.16
        "#,
    )
    .unwrap();
    let app = common::TestApp::with_catalog(catalog);

    let (status, body) = app
        .post_json(
            "/api/v1/daily/summary",
            json!({ "meals": [{ "meal_id": "lentils", "weight_g": 250 }] }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calories_in"], 290);
}
