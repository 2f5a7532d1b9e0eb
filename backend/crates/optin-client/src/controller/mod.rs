pub mod opt_in_controller;
pub mod toggle_outcome;
