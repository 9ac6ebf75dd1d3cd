pub mod branch;
pub mod message;
pub mod ticket;
