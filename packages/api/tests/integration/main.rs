mod auth_tests;
mod connection_tests;
