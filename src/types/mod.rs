mod unit_id;

pub use unit_id::{normalize_name, UnitId, PART_SEPARATOR};
