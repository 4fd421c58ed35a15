pub mod db;
pub mod maps;
pub mod partner;
