pub mod contributions;
pub mod events;
pub mod presence;
