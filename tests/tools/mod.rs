#![allow(dead_code)]

mod servers;

pub use self::servers::*;
