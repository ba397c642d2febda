pub mod check;
pub mod deps;
pub mod dispatch;
pub mod export;
pub mod list;
pub mod show;
pub mod validate;
