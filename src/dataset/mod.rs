//! In-memory match dataset
//!
//! A dataset is the header record plus every data record of one input file,
//! held in input order until sorted.

pub(crate) mod reader;
pub(crate) mod sort;
pub(crate) mod types;

pub(crate) use reader::read_dataset;
pub(crate) use types::Dataset;
