pub mod check;
pub mod columns;
pub mod generate;
pub mod init;
