pub mod input_utils;
