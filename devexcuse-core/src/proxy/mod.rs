mod excuse_gateway;
pub mod handlers;

pub use excuse_gateway::{ExcuseGateway, REQUEST_ID_HEADER};
