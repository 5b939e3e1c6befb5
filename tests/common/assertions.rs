//! Domain-specific assertion macros for mediadeck harnesses.
//!
//! These add context-rich failure messages that make it clear *which* card
//! contract was violated.

/// Assert that a card cannot navigate: activation is suppressed and no link
/// is exposed.
///
/// ```rust
/// assert_inert!(view);
/// ```
#[macro_export]
macro_rules! assert_inert {
    ($view:expr) => {{
        let view: &mediadeck_core::card::CardView = &$view;
        match view.activate() {
            mediadeck_core::card::Activation::Suppressed => {}
            other => panic!(
                "assert_inert! failed: activation produced {:?}\n  card: {:?}",
                other, view
            ),
        }
        assert!(
            matches!(view.navigation, mediadeck_core::card::Navigation::Inert { .. }),
            "assert_inert! failed: navigation is {:?}",
            view.navigation
        );
    }};
}

/// Assert that a card navigates to the given path when activated.
///
/// ```rust
/// assert_navigates!(view, "/content/abc");
/// ```
#[macro_export]
macro_rules! assert_navigates {
    ($view:expr, $path:expr) => {{
        let view: &mediadeck_core::card::CardView = &$view;
        let expected: &str = $path;
        match view.activate() {
            mediadeck_core::card::Activation::Navigate(path) if path == expected => {}
            other => panic!(
                "assert_navigates! failed:\n  expected: Navigate({:?})\n  actual:   {:?}",
                expected, other
            ),
        }
    }};
}
