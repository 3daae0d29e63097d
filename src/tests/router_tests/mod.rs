mod favorites_tests;
mod proxy_tests;
mod seen_tests;
mod static_tests;
mod status_tests;
