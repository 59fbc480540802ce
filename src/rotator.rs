//! The configured rotation runner
//!
//! Ties generation, ordering and rendering together behind one
//! [`RotatorConfig`].

use crate::config::RotatorConfig;
use crate::display::render_table;
use crate::rotation::{generate_rotations, RotationEntry};

/// Generates and orders rotation sets according to a [`RotatorConfig`]
#[derive(Debug, Clone, Default)]
pub struct Rotator {
    config: RotatorConfig,
}

impl Rotator {
    /// Create a rotator with the given configuration
    ///
    /// # Example
    /// ```
    /// use rotator::{RotationOrder, Rotator, RotatorConfig};
    ///
    /// let rotator = Rotator::new(RotatorConfig {
    ///     order: RotationOrder::Lexicographic,
    ///     color: false,
    /// });
    /// let first = &rotator.rotate("banana")[0];
    /// assert_eq!((first.index(), first.rotation()), (5, "abanan"));
    /// ```
    #[must_use]
    pub const fn new(config: RotatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &RotatorConfig {
        &self.config
    }

    /// Generate every rotation of `base` in the configured order
    #[must_use]
    pub fn rotate(&self, base: &str) -> Vec<RotationEntry> {
        let rotations = generate_rotations(base);
        self.config.order.apply(&rotations)
    }

    /// Render entries as a text table, colored if configured
    #[must_use]
    pub fn render(&self, entries: &[RotationEntry]) -> String {
        render_table(entries, self.config.color)
    }
}
