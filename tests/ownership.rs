use pcb_geometry::testing::sample_board;
use pcb_geometry::{
    Board, BoardError, HoleElement, ItemRef, LayerId, LayerSet, LineElement, Owner, Part, Point, TraversalOptions,
};
use rstest::rstest;

fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .try_init();
}

fn free_line() -> LineElement {
    LineElement::new(LayerSet::single(LayerId::TOP_COPPER), Point::ZERO, Point::new(1_000, 0), 100).unwrap()
}

#[test]
fn test_element_moves_between_owners() {
    init_logging();
    let mut sample = sample_board();
    let board = &mut sample.board;
    let other = board.add_component("OTHER");

    let id = board.create_element(free_line());
    assert_eq!(board.element_owner(id), None);
    assert!(!board.free_elements().contains(&id));

    board
        .attach_element(id, Owner::Board)
        .unwrap();
    assert_eq!(board.element_owner(id), Some(Owner::Board));
    assert!(board.free_elements().contains(&id));

    assert_eq!(board.attach_element(id, Owner::Component(other)), Err(BoardError::AlreadyOwned(Owner::Board)));

    assert_eq!(board.detach_element(id), Ok(Owner::Board));
    assert!(!board.free_elements().contains(&id));
    assert_eq!(board.detach_element(id), Err(BoardError::NotOwned));

    board
        .attach_element(id, Owner::Component(other))
        .unwrap();
    assert_eq!(board.element_owner(id), Some(Owner::Component(other)));
    assert_eq!(
        board
            .component(other)
            .unwrap()
            .elements(),
        &[id]
    );
}

#[test]
fn test_removed_element_handle_goes_stale() {
    let mut sample = sample_board();
    let count = sample.board.element_count();

    let removed = sample
        .board
        .remove_element(sample.trace)
        .unwrap();

    assert!(matches!(removed, pcb_geometry::Element::Line(_)));
    assert_eq!(sample.board.element_count(), count - 1);
    assert_eq!(sample.board.element(sample.trace), None);
    assert!(sample.board.free_elements().is_empty());

    // the freed slot is reused, the old handle must not resolve to the new element
    let reused = sample
        .board
        .add_element(HoleElement::new(Point::ZERO, 500).unwrap());
    assert_ne!(reused, sample.trace);
    assert_eq!(sample.board.element(sample.trace), None);
    assert_eq!(sample.board.remove_element(sample.trace), Err(BoardError::UnknownElement(sample.trace)));
}

#[rstest]
#[case::board(true)]
#[case::component(false)]
fn test_part_owner(#[case] board_owned: bool) {
    let mut sample = sample_board();
    let owner = match board_owned {
        true => Owner::Board,
        false => Owner::Component(sample.component),
    };
    let part = sample
        .board
        .create_part(Part::new("R3", sample.component))
        .unwrap();
    assert_eq!(sample.board.parts().count(), 2);

    let result = sample.board.attach_part(part, owner);

    match board_owned {
        true => {
            assert_eq!(result, Ok(()));
            assert_eq!(sample.board.parts().count(), 3);
            assert_eq!(sample.board.part_owner(part), Some(Owner::Board));
        }
        false => {
            assert_eq!(result, Err(BoardError::InvalidPartOwner(owner)));
            assert_eq!(sample.board.parts().count(), 2);
            assert_eq!(sample.board.part_owner(part), None);
        }
    }
}

#[test]
fn test_unplaced_part_is_not_traversed() {
    let mut sample = sample_board();
    let bounds_before = sample.board.world_bounding_box();

    assert_eq!(sample.board.detach_part(sample.parts[1]), Ok(Owner::Board));
    assert_eq!(sample.board.parts().count(), 1);
    assert!(sample.board.part(sample.parts[1]).is_some());

    let bounds_after = sample.board.world_bounding_box();
    assert!(bounds_after.max.x < bounds_before.max.x);

    sample
        .board
        .attach_part(sample.parts[1], Owner::Board)
        .unwrap();
    assert_eq!(sample.board.world_bounding_box(), bounds_before);
}

#[test]
fn test_connect_validates_items() {
    let mut sample = sample_board();
    let board = &mut sample.board;

    // a component element referenced as a free element
    assert_eq!(
        board.connect(sample.signal, ItemRef::Free(sample.pads[0])),
        Err(BoardError::UnknownElement(sample.pads[0]))
    );

    // connecting twice keeps a single entry
    let item = ItemRef::PartElement {
        part: sample.parts[1],
        element: sample.pads[0],
    };
    board
        .connect(sample.signal, item)
        .unwrap();
    board
        .connect(sample.signal, item)
        .unwrap();
    assert_eq!(
        board
            .signal(sample.signal)
            .unwrap()
            .items()
            .len(),
        3
    );
}

#[test]
fn test_empty_board() {
    let board = Board::with_default_layers("empty");

    assert_eq!(board.element_count(), 0);
    assert!(board.world_bounding_box().is_empty());
    assert_eq!(TraversalOptions::default().layer_filter, None);
}
