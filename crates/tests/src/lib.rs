#[cfg(test)]
mod common;

#[cfg(test)]
mod api_client_tests;

#[cfg(test)]
mod auth_flow_tests;

#[cfg(test)]
mod nav_guard_tests;
