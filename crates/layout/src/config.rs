use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// The maximum number of `(constraint, size)` pairs remembered per node.
    ///
    /// Containers such as Grid and Flex measure a child more than once per
    /// pass with different constraints, so a handful of slots keeps repeat
    /// passes free of re-measurement.
    ///
    /// Defaults to `4`.
    pub measure_cache_capacity: usize,
    /// Serve repeated measurements from the per-node cache. Defaults to `true`.
    pub memoize: bool,
    /// Log a warning when a child's bounds leave its container's content
    /// rectangle (Absolute and Flex overflow excepted). Defaults to `true`.
    pub check_bounds: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            measure_cache_capacity: 4,
            memoize: true,
            check_bounds: true,
        }
    }
}
