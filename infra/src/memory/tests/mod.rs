#[cfg(test)]
mod access_log_tests;
#[cfg(test)]
mod record_store_tests;
