pub mod demo;
pub mod init;
pub mod serve;
