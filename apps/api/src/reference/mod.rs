//! Static reference tables shared by the wizard and the summary builders.

pub mod industries;

pub use industries::{all_industries, industry_label, IndustryRef, INDUSTRIES};
