use patchsheet_core::{PatchBatch, PatchError, PatchSession};

fn par(channel_count: u16, universe: u32, starting_address: u16, quantity: u32) -> PatchBatch {
    PatchBatch::new("Chauvet", "COLORado 1-Quad", channel_count, universe, starting_address, quantity)
}

#[test]
fn test_overflow_reported_at_first_index() {
    let mut session = PatchSession::new();
    let result = session.submit_batch(&par(4, 1, 510, 3));

    assert_eq!(
        result,
        Err(PatchError::UniverseOverflow {
            index: 0,
            universe: 1
        })
    );
    assert!(session.is_empty());
}

#[test]
fn test_overlapping_batch_rejected() {
    let mut session = PatchSession::new();
    session.submit_batch(&par(10, 1, 1, 2)).unwrap();

    // [5, 14] overlaps [1, 10]
    let result = session.submit_batch(&par(10, 1, 5, 2));
    assert_eq!(
        result,
        Err(PatchError::PatchCollision {
            index: 0,
            universe: 1
        })
    );
    assert_eq!(session.len(), 2);
}

#[test]
fn test_abutting_ranges_accepted() {
    let mut session = PatchSession::new();
    session.submit_batch(&par(10, 1, 1, 1)).unwrap();

    // [1, 10] and [11, 20] share no address
    session.submit_batch(&par(10, 1, 11, 2)).unwrap();
    assert_eq!(session.len(), 3);

    // A two-fixture block at 1 ends at 20; the next free address is 21
    let mut session = PatchSession::new();
    session.submit_batch(&par(10, 1, 1, 2)).unwrap();
    assert!(matches!(
        session.submit_batch(&par(10, 1, 11, 1)),
        Err(PatchError::PatchCollision { index: 0, .. })
    ));
    session.submit_batch(&par(10, 1, 21, 1)).unwrap();
    assert_eq!(session.len(), 3);
}

#[test]
fn test_failed_submission_is_idempotent() {
    let mut session = PatchSession::new();
    session.submit_batch(&par(16, 1, 1, 4)).unwrap();
    let snapshot = session.fixtures().to_vec();

    for _ in 0..3 {
        assert!(session.submit_batch(&par(16, 1, 50, 2)).is_err());
        assert!(session.submit_batch(&par(16, 1, 500, 2)).is_err());
    }

    assert_eq!(session.fixtures(), snapshot.as_slice());
}

#[test]
fn test_fixture_numbers() {
    let mut session = PatchSession::new();
    session.submit_batch(&par(4, 1, 1, 3)).unwrap();
    session
        .submit_batch(&par(4, 2, 1, 3).with_fixture_numbers(101).with_control_channels(1))
        .unwrap();

    let (unnumbered, numbered) = session.fixtures().split_at(3);
    assert!(unnumbered.iter().all(|f| f.fixture_number.is_none()));
    assert!(unnumbered.iter().all(|f| f.control_channel.is_none()));

    for (i, fixture) in numbered.iter().enumerate() {
        assert_eq!(fixture.fixture_number, Some(101 + i as u32));
        assert_eq!(fixture.control_channel, Some(1 + i as u32));
    }
}

#[test]
fn test_shared_text_fields_copied() {
    let mut session = PatchSession::new();
    session
        .submit_batch(&par(4, 1, 1, 2).with_position("FOH Truss").with_notes("DMX mode 4ch"))
        .unwrap();

    for fixture in session.fixtures() {
        assert_eq!(fixture.manufacturer, "Chauvet");
        assert_eq!(fixture.model, "COLORado 1-Quad");
        assert_eq!(fixture.position.as_deref(), Some("FOH Truss"));
        assert_eq!(fixture.notes.as_deref(), Some("DMX mode 4ch"));
        assert!(fixture.unit_on_position.is_none());
    }
}
