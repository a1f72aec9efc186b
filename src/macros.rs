/// `assert_eq!` that prints both sides as hex bytes on failure.
#[macro_export]
macro_rules! assert_eq_hex {
    ($left:expr, $right:expr $(,)?) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    panic!(
                        r#"assertion failed: `(left == right)`
  left: `{:02x?}`,
 right: `{:02x?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $($arg:tt)+) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    panic!(
                        r#"assertion failed: `(left == right)`
  left: `{:02x?}`,
 right: `{:02x?}`: {}"#,
                        &*left_val,
                        &*right_val,
                        format_args!($($arg)+)
                    )
                }
            }
        }
    }};
}
