use chrono::{DateTime, TimeZone, Utc};
use lumen_core::models::{
    reservation::{
        CreateReservationRequest, CreateReservationResponse, NewReservation, ReservationStatus,
        validate_date, DEFAULT_DURATION_MINUTES,
    },
    time_slot::{CheckScheduleRequest, CheckScheduleResponse, TimeSlot},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, from_value, json, to_value};
use uuid::Uuid;

fn request(party_size: i32, duration_minutes: i32) -> CreateReservationRequest {
    CreateReservationRequest {
        restaurant_id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        reservation_date: Utc.with_ymd_and_hms(2024, 1, 20, 20, 0, 0).unwrap(),
        party_size,
        duration_minutes,
    }
}

#[test]
fn test_create_reservation_request_defaults_duration() {
    let restaurant_id = Uuid::new_v4();
    let client_id = Uuid::new_v4();

    let request: CreateReservationRequest = from_value(json!({
        "restaurant_id": restaurant_id,
        "client_id": client_id,
        "reservation_date": "2024-01-20T20:00:00.000Z",
        "party_size": 4
    }))
    .expect("Failed to deserialize create reservation request");

    assert_eq!(request.restaurant_id, restaurant_id);
    assert_eq!(request.duration_minutes, DEFAULT_DURATION_MINUTES);
    assert_eq!(
        request.reservation_date,
        Utc.with_ymd_and_hms(2024, 1, 20, 20, 0, 0).unwrap()
    );
}

#[test]
fn test_create_reservation_request_rejects_malformed_ids() {
    let result = from_str::<CreateReservationRequest>(
        r#"{"restaurant_id":"not-a-uuid","client_id":"also-not","reservation_date":"2024-01-20T20:00:00Z","party_size":2}"#,
    );

    assert!(result.is_err());
}

#[rstest]
#[case(1, 30, true)]
#[case(50, 480, true)]
#[case(4, 121, true)]
#[case(0, 120, false)]
#[case(51, 120, false)]
#[case(4, 29, false)]
#[case(4, 481, false)]
fn test_create_reservation_request_ranges(
    #[case] party_size: i32,
    #[case] duration_minutes: i32,
    #[case] valid: bool,
) {
    assert_eq!(request(party_size, duration_minutes).validate().is_ok(), valid);
}

#[rstest]
#[case("2024-01-20T20:00:00Z", true)]
#[case("9999-12-31T23:59:59Z", true)]
#[case("+10000-01-01T00:00:00Z", false)]
#[case("+262142-12-31T23:00:00Z", false)]
fn test_validate_date_bounds_year(#[case] raw: &str, #[case] valid: bool) {
    let instant: DateTime<Utc> = from_value(json!(raw)).unwrap();

    assert_eq!(validate_date("date", instant).is_ok(), valid);

    let mut create = request(4, 120);
    create.reservation_date = instant;
    assert_eq!(create.validate().is_ok(), valid);

    let check = CheckScheduleRequest {
        restaurant_id: Uuid::new_v4(),
        date: instant,
    };
    assert_eq!(check.validate().is_ok(), valid);
}

#[rstest]
#[case(ReservationStatus::Pending, "pending", true)]
#[case(ReservationStatus::Confirmed, "confirmed", true)]
#[case(ReservationStatus::Cancelled, "cancelled", false)]
#[case(ReservationStatus::Completed, "completed", false)]
fn test_reservation_status(
    #[case] status: ReservationStatus,
    #[case] text: &str,
    #[case] occupying: bool,
) {
    assert_eq!(status.as_str(), text);
    assert_eq!(text.parse::<ReservationStatus>().unwrap(), status);
    assert_eq!(to_value(status).unwrap(), json!(text));
    assert_eq!(ReservationStatus::OCCUPYING.contains(&status), occupying);
}

#[test]
fn test_unknown_status_is_rejected() {
    assert!("no_show".parse::<ReservationStatus>().is_err());
}

#[test]
fn test_new_reservation_end() {
    let new_reservation = NewReservation {
        restaurant_id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        table_id: Uuid::new_v4(),
        reservation_date: Utc.with_ymd_and_hms(2024, 1, 20, 20, 0, 0).unwrap(),
        party_size: 2,
        duration_minutes: 90,
        status: ReservationStatus::Confirmed,
    };

    assert_eq!(
        new_reservation.ends_at(),
        Utc.with_ymd_and_hms(2024, 1, 20, 21, 30, 0).unwrap()
    );
}

#[test]
fn test_check_schedule_serialization() {
    let request: CheckScheduleRequest = from_value(json!({
        "restaurant_id": Uuid::nil(),
        "date": "2024-01-20T00:00:00Z"
    }))
    .expect("Failed to deserialize check schedule request");
    assert_eq!(request.restaurant_id, Uuid::nil());

    let response = CheckScheduleResponse {
        available: true,
        closed: false,
        time_slots: vec![TimeSlot {
            time: Utc.with_ymd_and_hms(2024, 1, 20, 18, 0, 0).unwrap(),
            available: true,
        }],
        message: "Encontré 1 horario disponible: 18:00".to_string(),
    };

    assert_eq!(
        to_value(&response).unwrap(),
        json!({
            "available": true,
            "closed": false,
            "time_slots": [{ "time": "2024-01-20T18:00:00Z", "available": true }],
            "message": "Encontré 1 horario disponible: 18:00"
        })
    );
}

#[test]
fn test_create_reservation_response_round_trip() {
    let response = CreateReservationResponse {
        reservation_id: Uuid::new_v4(),
        table_number: 7,
        reservation_date: Utc.with_ymd_and_hms(2024, 1, 20, 20, 0, 0).unwrap(),
        party_size: 4,
        message: "Reserva confirmada".to_string(),
    };

    let json = serde_json::to_string(&response).expect("Failed to serialize response");
    let deserialized: CreateReservationResponse = from_str(&json).expect("Failed to deserialize response");

    assert_eq!(deserialized, response);
}
