mod binary;
mod common;
mod session;
