use frag_core::status::{classify, StatusClass};
use frag_core::{EventSource, FragError, SourceInit};
use frag_gen::ToyStringSource;

fn base_init() -> SourceInit {
    SourceInit {
        string_mass: 500.0,
        quark_id: 2,
        massless_endpoints: false,
        seed: 99,
    }
}

#[test]
fn same_seed_reproduces_identical_events() {
    let mut source_a = ToyStringSource::new();
    let mut source_b = ToyStringSource::new();
    source_a.initialize(&base_init()).unwrap();
    source_b.initialize(&base_init()).unwrap();

    for _ in 0..5 {
        let event_a = source_a.generate().unwrap();
        let event_b = source_b.generate().unwrap();
        assert_eq!(event_a, event_b);
    }
}

#[test]
fn different_seeds_diverge() {
    let mut source_a = ToyStringSource::new();
    let mut source_b = ToyStringSource::new();
    source_a.initialize(&base_init()).unwrap();
    source_b
        .initialize(&SourceInit {
            seed: 100,
            ..base_init()
        })
        .unwrap();

    assert_ne!(source_a.generate().unwrap(), source_b.generate().unwrap());
}

#[test]
fn reinitializing_resets_the_stream() {
    let mut source = ToyStringSource::new();
    source.initialize(&base_init()).unwrap();
    let first = source.generate().unwrap();
    let _ = source.generate().unwrap();

    source.initialize(&base_init()).unwrap();
    assert_eq!(source.generate().unwrap(), first);
}

#[test]
fn statuses_stay_within_the_taxonomy() {
    let mut source = ToyStringSource::new();
    source.initialize(&base_init()).unwrap();

    for _ in 0..20 {
        let event = source.generate().unwrap();
        assert!(event.len() >= 4);
        for record in event.records() {
            let magnitude = record.status.abs();
            assert!(
                matches!(magnitude, 23 | 83 | 84 | 1216),
                "unexpected status {}",
                record.status
            );
        }
    }
}

#[test]
fn exactly_one_adjacent_joining_pair_sits_between_the_chains() {
    let mut source = ToyStringSource::new();
    source.initialize(&base_init()).unwrap();

    for _ in 0..10 {
        let event = source.generate().unwrap();
        let joining: Vec<usize> = event
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| classify(r.status) == StatusClass::Joining)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(joining.len(), 2);
        assert_eq!(joining[1], joining[0] + 1);
        assert_eq!(event.records()[joining[0]].status, 1216);
        assert_eq!(event.records()[joining[1]].status, -1216);

        for (i, record) in event.records().iter().enumerate() {
            match record.status {
                83 => assert!(i < joining[0]),
                84 => assert!(i > joining[1]),
                _ => {}
            }
        }
    }
}

#[test]
fn lightcone_budget_is_conserved_by_the_hadrons() {
    let mut source = ToyStringSource::new();
    source.initialize(&base_init()).unwrap();

    for _ in 0..10 {
        let event = source.generate().unwrap();
        let (mut plus, mut minus) = (0.0, 0.0);
        for record in event.records() {
            if record.status.abs() == 23 {
                continue;
            }
            plus += record.energy + record.pz;
            minus += record.energy - record.pz;
        }
        assert!((plus - 500.0).abs() < 1e-6 * 500.0, "p+ total {plus}");
        assert!((minus - 500.0).abs() < 1e-6 * 500.0, "p- total {minus}");
    }
}

#[test]
fn massless_endpoints_put_partons_on_the_light_cone() {
    let mut source = ToyStringSource::new();
    source
        .initialize(&SourceInit {
            massless_endpoints: true,
            ..base_init()
        })
        .unwrap();

    let event = source.generate().unwrap();
    let quark = &event.records()[0];
    assert_eq!(quark.mass, 0.0);
    assert!((quark.energy - quark.pz.abs()).abs() < 1e-12);
}

#[test]
fn generate_before_initialize_is_a_generation_error() {
    let mut source = ToyStringSource::new();
    let err = source.generate().unwrap_err();
    assert!(matches!(err, FragError::Generation(_)));
    assert_eq!(err.info().code, "source-order");
}

#[test]
fn initialize_rejects_unusable_setups() {
    let mut source = ToyStringSource::new();

    let err = source
        .initialize(&SourceInit {
            string_mass: 1.0,
            ..base_init()
        })
        .unwrap_err();
    assert!(matches!(err, FragError::Init(_)));
    assert_eq!(err.info().code, "source-init");

    let err = source
        .initialize(&SourceInit {
            quark_id: 0,
            ..base_init()
        })
        .unwrap_err();
    assert!(matches!(err, FragError::Init(_)));
}
