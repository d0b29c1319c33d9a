pub mod answers;
pub mod checkout;
pub mod clock;
pub mod config;
pub mod session;

pub use answers::{replay, Answers};
pub use session::{Funnel, FunnelError, Screen};
