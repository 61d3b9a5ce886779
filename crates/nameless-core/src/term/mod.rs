pub mod basic;
pub mod force;
pub mod print;

pub use basic::*;
pub use force::{expose, force, occurs_free, resolve};
pub use print::{
    dump_term, print_identifier, print_sequence, print_term, print_term_to_string, PrintError,
};
