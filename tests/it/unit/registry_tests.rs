use std::cell::Cell;
use std::rc::Rc;

use mapboard::{HandlerManager, InputError, ManagerOptions};

use crate::helpers::{pointer_down, pointer_move, Harness, StubHandler, StubResponse};

fn manager_with_stub(stub: StubHandler) -> HandlerManager {
    let mut manager = HandlerManager::new(ManagerOptions::default());
    manager.add_handler("stub", Box::new(stub), vec![]).unwrap();
    manager
}

#[test]
fn test_duplicate_handler_name_rejected() {
    let mut manager = manager_with_stub(StubHandler::new(StubResponse::default()));
    let err = manager
        .add_handler(
            "stub",
            Box::new(StubHandler::new(StubResponse::default())),
            vec![],
        )
        .unwrap_err();
    assert_eq!(err, InputError::DuplicateHandler("stub".to_string()));
}

#[test]
fn test_unknown_handler_name_rejected() {
    let mut manager = HandlerManager::new(ManagerOptions::default());
    assert_eq!(
        manager.enable_handler("missing").unwrap_err(),
        InputError::UnknownHandler("missing".to_string())
    );
    assert!(manager.disable_handler("missing").is_err());
    assert!(manager.is_handler_enabled("missing").is_err());
}

#[test]
fn test_disable_resets_and_silences_handler() {
    let resets = Rc::new(Cell::new(0));
    let stub = StubHandler::new(StubResponse::pan(5.0, 0.0)).with_reset_probe(resets.clone());
    let mut h = Harness::new(manager_with_stub(stub));

    // Engage a drag, then disable mid-gesture
    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    h.manager.disable_handler("stub").unwrap();
    assert_eq!(resets.get(), 1);
    assert!(!h.manager.is_handler_enabled("stub").unwrap());

    // Disabled handlers are skipped entirely
    h.dispatch(pointer_move(16.0, 110.0, 100.0));
    h.settle();
    assert!(h.host.events.is_empty());
    assert_eq!(h.host.renders, 0);
}

#[test]
fn test_reenable_restores_dispatch() {
    let stub = StubHandler::new(StubResponse::pan(5.0, 0.0));
    let mut h = Harness::new(manager_with_stub(stub));
    h.manager.disable_handler("stub").unwrap();
    h.manager.enable_handler("stub").unwrap();

    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    h.dispatch(pointer_move(16.0, 105.0, 100.0));
    h.settle();
    assert_eq!(h.host.count("dragstart"), 1);
}
