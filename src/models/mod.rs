pub mod calendar;
pub mod contributions;
pub mod event;
pub mod insights;
pub mod user;

pub use calendar::*;
pub use contributions::*;
pub use event::*;
pub use insights::*;
pub use user::*;
