use chrono::{Local, NaiveTime, TimeZone};
use rtrainwatch::{AlertKind, AlertLogic, AlertPolicy, Event};

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn event(id: i64, end: &str) -> Event {
    Event {
        id,
        location: format!("Room {id}"),
        trainer: "Ana".to_string(),
        start_time: "08:00".to_string(),
        end_time: end.to_string(),
        created_at: "2025-01-01 08:00:00.000".to_string(),
    }
}

#[test]
fn test_finished_at_end_time_and_one_minute_after() {
    let events = [event(1, "10:00")];

    for now in [at(10, 0), at(10, 1)] {
        let alerts = AlertLogic::evaluate(&events, now);
        assert_eq!(alerts.len(), 1, "expected one alert at {now}");
        assert_eq!(alerts[0].kind, AlertKind::Finished);
        assert_eq!(alerts[0].minutes_remaining, None);
        assert_eq!(alerts[0].event, events[0]);
    }

    assert!(AlertLogic::evaluate(&events, at(10, 2)).is_empty());
}

#[test]
fn test_warning_windows() {
    let events = [event(1, "10:00")];

    for (now, expected) in [
        (at(9, 50), 10),
        (at(9, 51), 10),
        (at(9, 55), 5),
        (at(9, 56), 5),
    ] {
        let alerts = AlertLogic::evaluate(&events, now);
        assert_eq!(alerts.len(), 1, "expected one alert at {now}");
        assert_eq!(alerts[0].kind, AlertKind::Warning);
        assert_eq!(alerts[0].minutes_remaining, Some(expected));
    }

    for quiet in [at(9, 49), at(9, 52), at(9, 54), at(9, 57), at(9, 59)] {
        assert!(
            AlertLogic::evaluate(&events, quiet).is_empty(),
            "no alert expected at {quiet}"
        );
    }
}

#[test]
fn test_warning_wraps_past_midnight() {
    let events = [event(1, "00:03")];

    let alerts = AlertLogic::evaluate(&events, at(23, 53));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Warning);
    assert_eq!(alerts[0].minutes_remaining, Some(10));

    // five-minute window also wraps: 00:03 - 5 = 23:58
    let alerts = AlertLogic::evaluate(&events, at(23, 58));
    assert_eq!(alerts[0].minutes_remaining, Some(5));
}

#[test]
fn test_finished_window_at_midnight() {
    let events = [event(1, "00:00")];

    assert_eq!(
        AlertLogic::evaluate(&events, at(0, 1))[0].kind,
        AlertKind::Finished
    );
    assert_eq!(
        AlertLogic::evaluate(&events, at(23, 50))[0].minutes_remaining,
        Some(10)
    );
}

#[test]
fn test_malformed_end_time_is_skipped() {
    let events = [
        event(1, "not a time"),
        event(2, "10:00"),
        event(3, "24:10"),
        event(4, ""),
    ];

    let alerts = AlertLogic::evaluate(&events, at(10, 0));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Finished);
    assert_eq!(alerts[0].event.id, 2);
}

#[test]
fn test_each_event_gets_at_most_one_alert_in_input_order() {
    let events = [event(1, "10:00"), event(2, "10:10"), event(3, "10:05")];

    let alerts = AlertLogic::evaluate(&events, at(10, 0));
    let summary: Vec<(i64, AlertKind, Option<u32>)> = alerts
        .iter()
        .map(|a| (a.event.id, a.kind, a.minutes_remaining))
        .collect();

    assert_eq!(
        summary,
        vec![
            (1, AlertKind::Finished, None),
            (2, AlertKind::Warning, Some(10)),
            (3, AlertKind::Warning, Some(5)),
        ]
    );
}

#[test]
fn test_ten_minute_window_takes_precedence() {
    // with 10 and 9 both configured, 09:51 sits in both windows
    let policy = AlertPolicy {
        warning_offsets: vec![10, 9],
        window: 1,
    };
    let events = [event(1, "10:00")];

    let alerts = AlertLogic::evaluate_with(&policy, &events, at(9, 51));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].minutes_remaining, Some(10));
}

#[test]
fn test_evaluation_is_idempotent() {
    let events = [event(1, "10:00"), event(2, "10:05"), event(3, "bad")];

    let first = AlertLogic::evaluate(&events, at(9, 55));
    let second = AlertLogic::evaluate(&events, at(9, 55));
    assert_eq!(first, second);
}

#[test]
fn test_messages_mention_event() {
    let events = [event(1, "10:00")];

    let finished = &AlertLogic::evaluate(&events, at(10, 0))[0];
    assert!(finished.message.contains("Room 1"));
    assert!(finished.message.contains("Ana"));

    let warning = &AlertLogic::evaluate(&events, at(9, 55))[0];
    assert!(warning.message.contains("5 minutes"));
    assert!(warning.message.contains("10:00"));
}

#[test]
fn test_report_shape() {
    let events = [event(1, "09:05")];
    let now = Local.with_ymd_and_hms(2025, 3, 10, 9, 5, 30).unwrap();

    let report = AlertLogic::check(&AlertPolicy::default(), &events, now);
    assert_eq!(report.current_time, "9:05");
    assert!(report.timestamp.ends_with('Z'));
    assert_eq!(report.alerts.len(), 1);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["alerts"][0]["type"], "finished");
    assert_eq!(json["alerts"][0]["event"]["hora_fin"], "09:05");
    assert_eq!(json["alerts"][0]["event"]["ubicacion"], "Room 1");
    assert!(json["alerts"][0].get("minutes_remaining").is_none());
    assert_eq!(json["current_time"], "9:05");
}

#[test]
fn test_warning_json_carries_minutes_remaining() {
    let events = [event(1, "10:00")];
    let alerts = AlertLogic::evaluate(&events, at(9, 50));

    let json = serde_json::to_value(&alerts[0]).unwrap();
    assert_eq!(json["type"], "warning");
    assert_eq!(json["minutes_remaining"], 10);
    assert_eq!(json["event"]["formador"], "Ana");
    assert_eq!(json["event"]["hora_inicio"], "08:00");
}

#[test]
fn test_loose_stored_end_times_still_alert() {
    let with_seconds = [event(1, "10:00:00")];
    let alerts = AlertLogic::evaluate(&with_seconds, at(10, 0));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Finished);

    let short_minutes = [event(2, "9:5")];
    let alerts = AlertLogic::evaluate(&short_minutes, at(9, 5));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Finished);

    let alerts = AlertLogic::evaluate(&short_minutes, at(8, 55));
    assert_eq!(alerts[0].minutes_remaining, Some(10));
}
