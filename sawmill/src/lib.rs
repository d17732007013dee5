use std::sync::LazyLock;
use std::time::Instant;

pub mod io;
pub mod script;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
