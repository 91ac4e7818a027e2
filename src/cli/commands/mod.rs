pub mod config;
pub mod employee;
pub mod init;
pub mod list;
pub mod view;
