//! Fleet event tests
//!
//! Availability tracking under concurrent producers with an async
//! subscriber, the way a dispatcher task consumes notifications.

use crate::test_utils::*;
use mvplan_fleet::{Availability, AvailabilityEvent, VehicleState};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::time::{timeout, Duration};

#[tokio::test]
async fn test_async_subscriber_sees_committed_order() {
    init_logging();
    let (registry, awareness) = test_awareness();
    let mut updates = awareness.subscribe();

    for vehicle in 0..4 {
        registry.report(format!("veh{vehicle}"), vehicle % 2 == 0);
    }

    let mut producers = Vec::new();
    for producer in 0..4 {
        let awareness = Arc::clone(&awareness);
        producers.push(tokio::task::spawn_blocking(move || {
            let mut emitted = 0;
            for i in 0..500 {
                let id = format!("veh{}", (producer + i) % 4);
                let state = match i % 4 {
                    0 => VehicleState::Service,
                    1 => VehicleState::Maneuver,
                    2 => VehicleState::Finished,
                    _ => VehicleState::Disconnected,
                };
                if awareness
                    .on_vehicle_state_changed(&state_event(&id, state))
                    .is_some()
                {
                    emitted += 1;
                }
            }
            emitted
        }));
    }
    let mut emitted = 0;
    for producer in producers {
        emitted += producer.await.expect("producer thread");
    }

    let mut received = 0;
    let mut last: HashMap<String, Availability> = HashMap::new();
    while let Ok(Some(event)) = timeout(Duration::from_millis(50), updates.recv()).await {
        received += 1;
        let previous = last.insert(event.vehicle_id().to_string(), event.availability());
        assert_ne!(previous, Some(event.availability()), "duplicate notification {event:?}");
    }

    // The subscriber read nothing while 2000 events were processed
    assert_eq!(received, emitted);
    assert_eq!(last.len(), 4);
    for (vehicle, availability) in last {
        assert_eq!(awareness.availability(&vehicle), Some(availability));
    }
}

#[test]
fn test_unrecognised_state_labels_fail_safe() {
    let (_, awareness) = test_awareness();
    let mut updates = awareness.subscribe();

    for (vehicle, label) in [("lauv-1", "FINISHED"), ("lauv-1", "HOVERING"), ("lauv-2", "finished")] {
        awareness.on_vehicle_state_changed(&state_event(vehicle, VehicleState::parse(label)));
    }

    assert!(!awareness.is_vehicle_available("lauv-1"));
    assert!(awareness.is_vehicle_available("lauv-2"));

    let mut received = Vec::new();
    while let Ok(event) = updates.try_recv() {
        received.push(event);
    }
    assert_eq!(
        received,
        vec![
            AvailabilityEvent::Available {
                vehicle_id: "lauv-1".to_string()
            },
            AvailabilityEvent::Unavailable {
                vehicle_id: "lauv-1".to_string()
            },
            AvailabilityEvent::Available {
                vehicle_id: "lauv-2".to_string()
            },
        ]
    );
}

#[test]
fn test_events_from_json_feed() {
    let (registry, awareness) = test_awareness();
    registry.report("lauv-xplore-1", false);

    let feed = r#"[
        {"vehicle_id": "lauv-xplore-1", "state": "SERVICE", "description": "on the dock"},
        {"vehicle_id": "lauv-xplore-2", "state": "FINISHED"},
        {"vehicle_id": "lauv-xplore-2", "state": "FINISHED"}
    ]"#;
    let events: Vec<mvplan_fleet::VehicleStateChanged> =
        serde_json::from_str(feed).expect("valid feed");

    let emitted: Vec<_> = events
        .iter()
        .filter_map(|event| awareness.on_vehicle_state_changed(event))
        .collect();

    assert_eq!(emitted.len(), 2);
    assert_eq!(awareness.available_vehicles(), vec!["lauv-xplore-2"]);
    assert_eq!(awareness.unavailable_vehicles(), vec!["lauv-xplore-1"]);
}
