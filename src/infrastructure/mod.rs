pub mod router;
pub mod storage;
