use chrono::{TimeZone, Utc};
use eyre::eyre;
use lumen_core::models::{
    reservation::CreateReservationResponse,
    time_slot::{CheckScheduleResponse, TimeSlot},
};
use lumen_tools::{
    client::{ApiEnvelope, MockReservationApi},
    tools::{call_tool, definitions, ToolOutput, CHECK_SCHEDULE, CREATE_RESERVATION},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use uuid::Uuid;

fn schedule_arguments() -> Value {
    json!({
        "restaurant_id": "6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f",
        "date": "2024-01-20T00:00:00.000Z"
    })
}

fn reservation_arguments() -> Value {
    json!({
        "restaurant_id": "6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f",
        "client_id": "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d",
        "reservation_date": "2024-01-20T20:00:00.000Z",
        "party_size": 4
    })
}

fn reservation_response(message: &str) -> CreateReservationResponse {
    CreateReservationResponse {
        reservation_id: Uuid::nil(),
        table_number: 3,
        reservation_date: Utc.with_ymd_and_hms(2024, 1, 20, 20, 0, 0).unwrap(),
        party_size: 4,
        message: message.to_string(),
    }
}

#[test]
fn test_definitions_list_both_tools() {
    let tools = definitions();
    let names: Vec<&str> = tools
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec![CHECK_SCHEDULE, CREATE_RESERVATION]);
    assert_eq!(
        tools[1]["inputSchema"]["required"],
        json!(["restaurant_id", "client_id", "reservation_date", "party_size"])
    );
    let properties = &tools[1]["inputSchema"]["properties"];
    assert_eq!(properties["duration_minutes"]["default"], 120);
    assert_eq!(properties["party_size"]["type"], "integer");
    assert_eq!(properties["duration_minutes"]["type"], "integer");
}

#[tokio::test]
async fn test_check_schedule_returns_api_message() {
    let mut api = MockReservationApi::new();
    api.expect_check_schedule()
        .withf(|request| request.date == Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap())
        .times(1)
        .returning(|_| {
            Ok(ApiEnvelope {
                success: true,
                data: CheckScheduleResponse {
                    available: true,
                    closed: false,
                    time_slots: vec![TimeSlot {
                        time: Utc.with_ymd_and_hms(2024, 1, 20, 18, 0, 0).unwrap(),
                        available: true,
                    }],
                    message: "Encontré 1 horario disponible: 18:00".to_string(),
                },
            })
        });

    let output = call_tool(&api, CHECK_SCHEDULE, Some(schedule_arguments())).await;

    assert_eq!(output, ToolOutput::text("Encontré 1 horario disponible: 18:00"));
}

#[tokio::test]
async fn test_check_schedule_reports_api_errors() {
    let mut api = MockReservationApi::new();
    api.expect_check_schedule()
        .times(1)
        .returning(|_| Err(eyre!("Restaurant not found: 6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f")));

    let output = call_tool(&api, CHECK_SCHEDULE, Some(schedule_arguments())).await;

    assert!(output.is_error);
    assert_eq!(
        output.text,
        "Error al consultar horarios: Restaurant not found: 6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f"
    );
}

#[tokio::test]
async fn test_create_reservation_defaults_duration() {
    let mut api = MockReservationApi::new();
    api.expect_create_reservation()
        .withf(|request| request.duration_minutes == 120 && request.party_size == 4)
        .times(1)
        .returning(|_| {
            Ok(ApiEnvelope {
                success: true,
                data: reservation_response("Reserva confirmada para 4 personas en la mesa 3"),
            })
        });

    let output = call_tool(&api, CREATE_RESERVATION, Some(reservation_arguments())).await;

    assert_eq!(output, ToolOutput::text("Reserva confirmada para 4 personas en la mesa 3"));
}

#[tokio::test]
async fn test_create_reservation_falls_back_to_id() {
    let mut api = MockReservationApi::new();
    api.expect_create_reservation().times(1).returning(|_| {
        Ok(ApiEnvelope {
            success: true,
            data: reservation_response(""),
        })
    });

    let output = call_tool(&api, CREATE_RESERVATION, Some(reservation_arguments())).await;

    assert_eq!(
        output.text,
        format!("Reserva creada exitosamente. ID: {}", Uuid::nil())
    );
}

#[tokio::test]
async fn test_create_reservation_unsuccessful_envelope() {
    let mut api = MockReservationApi::new();
    api.expect_create_reservation().times(1).returning(|_| {
        Ok(ApiEnvelope {
            success: false,
            data: reservation_response("ignored"),
        })
    });

    let output = call_tool(&api, CREATE_RESERVATION, Some(reservation_arguments())).await;

    assert_eq!(output, ToolOutput::error("Error al crear la reserva."));
}

#[rstest]
#[case("party_size", json!(0))]
#[case("party_size", json!(51))]
#[case("duration_minutes", json!(481))]
#[case("reservation_date", json!("+262142-12-31T23:00:00Z"))]
#[tokio::test]
async fn test_create_reservation_validates_before_calling(#[case] field: &str, #[case] value: Value) {
    let mut api = MockReservationApi::new();
    api.expect_create_reservation().never();
    let mut arguments = reservation_arguments();
    arguments[field] = value;

    let output = call_tool(&api, CREATE_RESERVATION, Some(arguments)).await;

    assert!(output.is_error);
    assert!(output.text.starts_with("Error al crear la reserva: "));
    assert!(output.text.contains(field));
}

#[tokio::test]
async fn test_check_schedule_validates_before_calling() {
    let mut api = MockReservationApi::new();
    api.expect_check_schedule().never();
    let mut arguments = schedule_arguments();
    arguments["date"] = json!("+262142-12-31T23:00:00Z");

    let output = call_tool(&api, CHECK_SCHEDULE, Some(arguments)).await;

    assert!(output.is_error);
    assert!(output.text.starts_with("Error al consultar horarios: "));
    assert!(output.text.contains("date"));
}

#[rstest]
#[case(CHECK_SCHEDULE, None)]
#[case(CHECK_SCHEDULE, Some(json!("2024-01-20")))]
#[case(CHECK_SCHEDULE, Some(json!({ "restaurant_id": "abc", "date": "2024-01-20T00:00:00Z" })))]
#[case(CREATE_RESERVATION, Some(json!({ "party_size": 2 })))]
#[tokio::test]
async fn test_malformed_arguments_are_tool_errors(#[case] name: &str, #[case] arguments: Option<Value>) {
    let api = MockReservationApi::new();

    let output = call_tool(&api, name, arguments).await;

    assert!(output.is_error);
    assert!(output.text.starts_with(&format!("Argumentos inválidos para {}", name)));
}

#[tokio::test]
async fn test_unknown_tool() {
    let api = MockReservationApi::new();

    let output = call_tool(&api, "cancel_reservation", Some(json!({}))).await;

    assert_eq!(output, ToolOutput::error("Tool desconocida: cancel_reservation"));
    assert_eq!(
        output.to_json(),
        json!({
            "content": [{ "type": "text", "text": "Tool desconocida: cancel_reservation" }],
            "isError": true
        })
    );
}
