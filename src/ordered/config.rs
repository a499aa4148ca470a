//! Per-instance behaviour switches for [`OrderedVec`](super::OrderedVec).

/// Whether mutable access is tracked as a possible break of ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tracking {
    /// Every mutable access records which element may have moved out of place.
    #[default]
    Tracked,
    /// Mutable access is assumed never to change the sort key.
    ///
    /// Appropriate only when the ordering key of `T` cannot be changed through
    /// `&mut T`. The container always considers itself sorted and every search
    /// takes the binary path.
    Ignored,
}

/// Construction-time configuration of an [`OrderedVec`](super::OrderedVec).
///
/// # Examples
///
/// ```rust
/// use ordvec::ordered::{Config, OrderedVec, Tracking};
///
/// let config = Config::new().auto_repair(false);
/// let vector: OrderedVec<i32> = OrderedVec::with_config(config);
/// assert!(!vector.config().is_auto_repair());
/// assert_eq!(vector.config().tracking_mode(), Tracking::Tracked);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    tracking: Tracking,
    auto_repair: bool,
}

impl Config {
    /// Creates the default configuration: tracked, with automatic repair.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tracking: Tracking::Tracked,
            auto_repair: true,
        }
    }

    /// Switches to ignore-corruption mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::{Config, Tracking};
    ///
    /// assert_eq!(Config::new().ignore_corruption().tracking_mode(), Tracking::Ignored);
    /// ```
    #[inline]
    #[must_use]
    pub const fn ignore_corruption(self) -> Self {
        self.tracking(Tracking::Ignored)
    }

    /// Sets the tracking mode.
    #[inline]
    #[must_use]
    pub const fn tracking(mut self, tracking: Tracking) -> Self {
        self.tracking = tracking;
        self
    }

    /// Enables or disables repair on entry to mutating operations.
    #[inline]
    #[must_use]
    pub const fn auto_repair(mut self, enabled: bool) -> Self {
        self.auto_repair = enabled;
        self
    }

    /// Returns the tracking mode.
    #[inline]
    #[must_use]
    pub const fn tracking_mode(&self) -> Tracking {
        self.tracking
    }

    /// Returns `true` if mutable access is tracked.
    #[inline]
    #[must_use]
    pub const fn is_tracked(&self) -> bool {
        matches!(self.tracking, Tracking::Tracked)
    }

    /// Returns `true` if mutating operations repair a dirty container first.
    #[inline]
    #[must_use]
    pub const fn is_auto_repair(&self) -> bool {
        self.auto_repair
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
