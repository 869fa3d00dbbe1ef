//! Student enrollment backend: a student directory over course and student
//! stores, with credential lookup and password login.

pub mod domain;
pub mod outbound;
pub mod seed;
pub mod settings;
