pub mod cli;
pub mod conf;
pub mod corpus;
pub mod ctx;
pub mod device;
pub mod logging;
pub mod proxy;
pub mod selection;
pub mod server;
pub mod visitors;
