mod garden_error;

pub use garden_error::garden_error_response;
