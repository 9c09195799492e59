// Domain layer: the book record, commands and the capability traits operations implement.

pub mod model;
pub mod ports;
