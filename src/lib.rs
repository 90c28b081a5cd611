pub mod cli;
pub mod conf;
pub mod init;
pub mod shared;
