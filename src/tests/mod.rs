pub use selector::test_selector;
#[cfg(feature = "config")]
pub use selector::TestValue;
