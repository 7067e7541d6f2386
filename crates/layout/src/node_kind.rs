/// The kind of layout strategy a node uses.
///
/// A fieldless mirror of [`Strategy`](crate::Strategy) for logging, profiling
/// keys and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Stack,
    Grid,
    Absolute,
    Flex,
    Relative,
    Leaf,
}

impl StrategyKind {
    /// Returns a string representation, primarily for debugging or error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Stack => "Stack",
            StrategyKind::Grid => "Grid",
            StrategyKind::Absolute => "Absolute",
            StrategyKind::Flex => "Flex",
            StrategyKind::Relative => "Relative",
            StrategyKind::Leaf => "Leaf",
        }
    }

    /// Children of these containers may legitimately extend past the
    /// container's content rectangle.
    pub fn allows_overflow(&self) -> bool {
        matches!(self, StrategyKind::Absolute | StrategyKind::Flex)
    }
}
