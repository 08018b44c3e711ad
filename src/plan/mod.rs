mod district;
mod io;
mod plan;
mod writer;

pub use district::District;
pub use io::CsvPlanWriter;
pub use plan::Plan;
pub use writer::PlanWriter;
