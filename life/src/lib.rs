pub mod logging;
pub mod printer;
pub mod sleeper;
