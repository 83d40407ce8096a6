pub mod logic;
pub mod repository;

#[cfg(any(test, feature = "integration_test"))]
pub mod test;
