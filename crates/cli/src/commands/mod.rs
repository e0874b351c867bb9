pub mod init;
pub mod reflect;
pub mod status;
pub mod window;
