pub mod chat;
pub mod check;
pub mod dashboard;
pub mod dispatch;
pub mod history;
pub mod serve;
pub mod session;
pub mod shared;
pub mod stats;
pub mod suggest;
pub mod tips;
