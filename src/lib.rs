pub mod agent;
pub(crate) mod console;
pub(crate) mod error;
pub mod tafl;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        console::{Console, ConsoleOptions, Interface, Server},
        error::{Error, Kind, Result},
        tafl::*,
    };
}
