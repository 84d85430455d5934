//! Integration tests for the lookup workflow (wiremock-based)

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tripmate::config::TripMateConfig;
use tripmate::error::TripMateError;
use tripmate::planner::TravelPlanner;
use tripmate::session::SessionState;

fn config_for_mock(base_url: &str) -> TripMateConfig {
    let mut config = TripMateConfig::default();
    config.weather.base_url = base_url.to_string();
    config.weather.timeout_seconds = 5;
    config
}

fn planner_for_mock(server: &MockServer) -> TravelPlanner {
    TravelPlanner::new(&config_for_mock(&server.uri())).unwrap()
}

fn sample_forecast_json() -> serde_json::Value {
    json!({
        "latitude": 39.9042,
        "longitude": 116.4074,
        "timezone": "Asia/Shanghai",
        "current_weather": {
            "temperature": 20.5,
            "windspeed": 10.2,
            "winddirection": 180,
            "weathercode": 1,
            "time": "2026-08-06T12:00"
        },
        "daily": {
            "time": [
                "2026-08-06", "2026-08-07", "2026-08-08", "2026-08-09",
                "2026-08-10", "2026-08-11", "2026-08-12"
            ],
            "temperature_2m_max": [31.2, 30.1, 29.8, 32.0, 33.4, 31.7, 30.9],
            "temperature_2m_min": [22.4, 21.9, 21.5, 23.1, 24.0, 22.8, 22.2],
            "weathercode": [1, 2, 3, 0, 1, 2, 3]
        }
    })
}

#[tokio::test]
async fn test_beijing_lookup_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "39.9042"))
        .and(query_param("longitude", "116.4074"))
        .and(query_param("current_weather", "true"))
        .and(query_param(
            "daily",
            "temperature_2m_max,temperature_2m_min,weathercode",
        ))
        .and(query_param("forecast_days", "7"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_json()))
        .expect(1)
        .mount(&server)
        .await;

    let planner = planner_for_mock(&server);
    let mut session = SessionState::new();

    let suggestions = planner.suggestions("Beijing", &mut session).await.unwrap();

    assert_eq!(suggestions.city, "Beijing");
    assert_eq!(suggestions.forecast.current_temperature_c, 20.5);
    assert_eq!(suggestions.forecast.current_wind_speed_kph, 10.2);
    assert_eq!(suggestions.forecast.daily.len(), 7);
    assert_eq!(suggestions.forecast.daily[0].max_temp_c, 31.2);
    assert_eq!(suggestions.forecast.daily[6].min_temp_c, 22.2);

    assert_eq!(suggestions.attractions.len(), 3);
    let pool = ["Forbidden City", "Great Wall", "Summer Palace", "Houhai Lake"];
    for attraction in &suggestions.attractions {
        assert!(pool.contains(&attraction.as_str()));
    }

    assert_eq!(session.current_city.as_deref(), Some("Beijing"));
    assert_eq!(session.current_sample, suggestions.attractions);
}

#[tokio::test]
async fn test_unsupported_city_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_json()))
        .expect(0)
        .mount(&server)
        .await;

    let planner = planner_for_mock(&server);
    let mut session = SessionState::new();

    let err = planner
        .suggestions("Atlantis", &mut session)
        .await
        .unwrap_err();

    match err {
        TripMateError::UnsupportedCity { input, supported } => {
            assert_eq!(input, "Atlantis");
            assert!(supported.contains(&"Beijing".to_string()));
        }
        other => panic!("expected UnsupportedCity, got {other:?}"),
    }

    assert!(session.favorites.is_empty());
    assert!(session.current_city.is_none());

    server.verify().await;
}

#[tokio::test]
async fn test_missing_current_weather_section() {
    let server = MockServer::start().await;

    let mut body = sample_forecast_json();
    body.as_object_mut().unwrap().remove("current_weather");

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let planner = planner_for_mock(&server);
    let mut session = SessionState::new();

    let err = planner
        .suggestions("Beijing", &mut session)
        .await
        .unwrap_err();

    assert!(matches!(err, TripMateError::WeatherDataMissing));
    // No sample taken and nothing to save after a failed lookup
    assert!(session.current_city.is_none());
    assert!(session.current_sample.is_empty());
}

#[tokio::test]
async fn test_missing_daily_section_is_not_an_error() {
    let server = MockServer::start().await;

    let mut body = sample_forecast_json();
    body.as_object_mut().unwrap().remove("daily");

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let planner = planner_for_mock(&server);
    let mut session = SessionState::new();

    let suggestions = planner.suggestions("Tokyo", &mut session).await.unwrap();

    assert_eq!(suggestions.forecast.current_temperature_c, 20.5);
    assert!(suggestions.forecast.daily.is_empty());
    assert_eq!(suggestions.attractions.len(), 3);
}

#[tokio::test]
async fn test_server_error_becomes_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let planner = planner_for_mock(&server);
    let mut session = SessionState::new();

    let err = planner.suggestions("Paris", &mut session).await.unwrap_err();

    assert!(matches!(err, TripMateError::Transport { .. }));
    assert!(session.current_city.is_none());
}

#[tokio::test]
async fn test_malformed_body_becomes_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let planner = planner_for_mock(&server);
    let mut session = SessionState::new();

    let err = planner.suggestions("London", &mut session).await.unwrap_err();

    assert!(matches!(err, TripMateError::Transport { .. }));
}

#[tokio::test]
async fn test_save_and_delete_favorite_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_json()))
        .mount(&server)
        .await;

    let planner = planner_for_mock(&server);
    let mut session = SessionState::new();

    planner.suggestions("paris", &mut session).await.unwrap();

    let saved = session.save_from_sample(0).unwrap();
    assert_eq!(saved.city, "Paris");
    assert_eq!(session.favorites.len(), 1);
    assert_eq!(session.favorites.list()[0].attraction, saved.attraction);

    session.favorites.remove_at(0).unwrap();
    assert!(session.favorites.is_empty());
}

#[tokio::test]
async fn test_session_survives_failed_interactions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_json()))
        .mount(&server)
        .await;

    let planner = planner_for_mock(&server);
    let mut session = SessionState::new();

    // A run of failing interactions must leave the session usable
    assert!(planner.suggestions("", &mut session).await.is_err());
    assert!(planner.suggestions("Narnia", &mut session).await.is_err());
    assert!(session.favorites.remove_at(0).is_err());

    let suggestions = planner.suggestions("london", &mut session).await.unwrap();
    assert_eq!(suggestions.city, "London");
    assert_eq!(session.current_sample.len(), 3);
}
