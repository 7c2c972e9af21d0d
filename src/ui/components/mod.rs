pub mod failure;
pub mod header;
pub mod sidebar;
pub mod spinner;
