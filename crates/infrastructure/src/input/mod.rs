//! Input sources

mod city_list_reader;

pub use city_list_reader::{InputError, read_city_names};
