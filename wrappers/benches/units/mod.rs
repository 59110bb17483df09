pub mod basic_dictionary;
pub mod concurrent;
