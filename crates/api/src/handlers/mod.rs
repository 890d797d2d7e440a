pub mod charts;
pub mod chat;
pub mod dashboard;
pub mod entries;
pub mod export;
pub mod support;
