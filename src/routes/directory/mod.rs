mod handler;

pub use handler::users_data;
