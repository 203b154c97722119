pub mod output_json;
pub mod output_standard;
pub mod output_tabular;

pub use output_json::write_json_output;
pub use output_standard::write_standard_output;
pub use output_tabular::{write_tabular_output, Field, TableFormat};
