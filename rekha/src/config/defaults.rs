//! Default value functions for serde deserialization.

pub fn output_dir() -> String {
    "./output".to_string()
}

pub fn planner_suffix() -> String {
    "_planner".to_string()
}
