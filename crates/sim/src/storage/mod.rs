//! Import and export of repeat arrays.

mod fasta;

pub use fasta::{
    read_fasta, read_fasta_file, write_color_table, write_fasta, write_fasta_file,
};
