pub mod delegates;

pub use delegates::{DelegateCommand, Outcome, Report};
