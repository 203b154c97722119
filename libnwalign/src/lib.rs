pub mod align;
pub mod alphabet;
pub mod output;
pub mod structs;
pub mod util;
