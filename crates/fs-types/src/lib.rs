#[macro_use]
extern crate err_derive;

mod fs;
mod outcome;

pub use self::{fs::*, outcome::*};
