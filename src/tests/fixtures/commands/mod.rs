pub mod add_shift;
