pub mod config;
pub mod detect;
pub mod init;
pub mod last;
pub mod remote;
pub mod report;
