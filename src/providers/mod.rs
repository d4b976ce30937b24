pub mod action_labs;
