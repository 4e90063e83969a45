pub mod history;
pub mod portfolio;
pub mod signals;

pub mod util;
