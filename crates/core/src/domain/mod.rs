pub mod booking;
pub mod helper;
pub mod service;
