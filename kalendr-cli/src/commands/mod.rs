pub mod events;
pub mod new;
pub mod open;
