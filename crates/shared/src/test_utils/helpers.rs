use std::sync::Once;

pub struct TestContext {
    pub crate_root: String,
    pub test_name: String,
}

pub static INIT_TEST_ONCE: Once = Once::new();

/// One-time test initialisation: loads optional `.env` files and installs the
/// logging subscriber. Returns a [`TestContext`] describing the calling test.
#[macro_export]
macro_rules! setup_test {
    () => {{
        $crate::test_utils::helpers::INIT_TEST_ONCE.call_once(|| {
            $crate::env::load_optional_env_files();
            $crate::logging::configure_logging().unwrap();
        });

        let cur_thread = std::thread::current();
        let test_name = cur_thread.name().unwrap_or("unknown").to_string();

        $crate::test_utils::helpers::TestContext {
            crate_root: env!("CARGO_MANIFEST_DIR").to_string(),
            test_name,
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_setup_test_returns_context() {
        let ctx = crate::setup_test!();
        assert!(!ctx.test_name.is_empty());
        assert!(!ctx.crate_root.is_empty());
    }
}
