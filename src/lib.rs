pub mod attack_tables;
pub mod board;
pub mod evaluation;
