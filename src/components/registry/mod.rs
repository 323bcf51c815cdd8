#[path = "kind.rs"]
pub mod kind;

#[path = "record.rs"]
pub mod record;

#[path = "store.rs"]
pub mod store;
