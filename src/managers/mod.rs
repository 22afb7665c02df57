// webtools managers
// Stateful components layered over the services.

pub mod history_log;
