use frag_core::event::{Event, ParticleRecord};
use frag_core::{EventSource, FragError, SourceInit};
use frag_gen::ScriptedSource;

fn tiny_event(status: i32) -> Event {
    Event::from_records(vec![ParticleRecord::new(status, 0.0, 0.0, 1.0, 2.0, 0.14)])
}

fn any_init() -> SourceInit {
    SourceInit {
        string_mass: 500.0,
        quark_id: 2,
        massless_endpoints: false,
        seed: 1,
    }
}

#[test]
fn replays_events_in_order_then_reports_exhaustion() {
    let mut source = ScriptedSource::from_events(vec![tiny_event(83), tiny_event(84)]);
    source.initialize(&any_init()).unwrap();

    assert_eq!(source.generate().unwrap().records()[0].status, 83);
    assert_eq!(source.generate().unwrap().records()[0].status, 84);

    let err = source.generate().unwrap_err();
    assert!(matches!(err, FragError::Generation(_)));
    assert_eq!(err.info().code, "scripted-exhausted");
}

#[test]
fn failure_slots_surface_as_generation_errors() {
    let mut source = ScriptedSource::from_events(vec![tiny_event(83)]);
    source.push_failure();
    source.push_event(tiny_event(84));
    source.initialize(&any_init()).unwrap();

    assert!(source.generate().is_ok());
    let err = source.generate().unwrap_err();
    assert_eq!(err.info().code, "scripted-failure");
    // The slot after the failure is still reachable if the caller retries.
    assert_eq!(source.generate().unwrap().records()[0].status, 84);
}

#[test]
fn scripted_initialization_failure_is_fatal_flavored() {
    let mut source = ScriptedSource::fail_initialization("no tune available");
    let err = source.initialize(&any_init()).unwrap_err();
    assert!(matches!(err, FragError::Init(_)));
    assert_eq!(err.info().code, "scripted-init");
}

#[test]
fn generate_before_initialize_is_rejected() {
    let mut source = ScriptedSource::from_events(vec![tiny_event(83)]);
    let err = source.generate().unwrap_err();
    assert_eq!(err.info().code, "source-order");
}
