// Services module for business logic
pub mod metrics_exporter;
pub mod queue_parser;
pub mod ticket_tracker;
pub mod town_hall_client;
