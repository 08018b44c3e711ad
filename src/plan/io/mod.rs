mod csv;
mod manifest;

pub use csv::CsvPlanWriter;
