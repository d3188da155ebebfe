pub mod poll_controller;
pub mod results_poller;
