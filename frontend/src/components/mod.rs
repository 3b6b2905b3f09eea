pub mod data_table;
pub mod empty_state;
pub mod layout;
