pub mod health;
pub mod my_postman;
pub mod send_request;
