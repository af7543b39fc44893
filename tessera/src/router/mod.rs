pub mod calendar;
pub mod macros;
pub mod presence;
pub mod sources;

pub mod util;
