pub mod date_utils;
pub mod logging;
pub mod page;
pub mod scheduler;
pub mod storage;
