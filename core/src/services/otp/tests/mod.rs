
mod limiter_tests;
mod service_tests;
