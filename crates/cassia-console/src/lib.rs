pub mod descriptor;
pub mod labels;
pub mod render;
pub mod v1;
