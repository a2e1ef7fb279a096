#[path = "core/designer_state.rs"]
mod designer_state;
#[path = "core/history.rs"]
mod history;
#[path = "core/observer.rs"]
mod observer;
#[path = "core/storage.rs"]
mod storage;
