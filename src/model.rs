pub mod category;
pub mod draft;
pub mod event;
pub mod event_store;
pub mod month;
pub mod notice;
pub mod projections;
pub mod session;
