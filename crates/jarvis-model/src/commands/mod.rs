//! Commands over the [`Model`](crate::model::Model)

pub mod finance;

pub use finance::{ListPaidCommand, RemovePaidCommand, SetPaidCommand};
