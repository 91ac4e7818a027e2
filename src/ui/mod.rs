pub mod interactive;
pub mod messages;
