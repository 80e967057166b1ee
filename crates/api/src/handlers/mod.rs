pub mod ticket_config;
