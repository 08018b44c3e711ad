mod io;
mod profile;
mod table;
mod unit;

pub use io::UnitData;
pub use profile::{Demographics, Profile, Totals};
pub use table::UnitTable;
pub use unit::Unit;
