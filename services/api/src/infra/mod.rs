pub mod db;
pub mod oauth;
pub mod storage;
