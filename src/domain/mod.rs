pub mod case_mix_input;
pub mod case_selection;
pub mod procedure;
pub mod summary;
