use crate::settings::Settings;

use log::trace;
use std::ops::{Deref, DerefMut};

/// Guard for temporary setting overrides
///
/// Created by [Settings::scoped]. Dereferences to the live [Settings], so
/// overrides are applied with the usual setters and the guard can be passed
/// anywhere a `&Settings` is expected.
///
/// The values captured on entry are written back on drop, whether the scope
/// ends normally, through an early return, or by unwinding.
///
/// ```rust
/// # use stools_settings::Settings;
/// let mut settings = Settings::default();
///
/// let result = (|| -> Result<(), String> {
///     let mut scope = settings.scoped();
///     scope.set_num_groups(Some(3));
///     Err("failed inside the scope".to_string())
/// })();
///
/// assert!(result.is_err());
/// assert_eq!(settings.num_groups(), None);
/// ```
#[derive(Debug)]
pub struct ScopedSettings<'a> {
    settings: &'a mut Settings,
    snapshot: Settings,
}

impl<'a> ScopedSettings<'a> {
    pub(crate) fn new(settings: &'a mut Settings) -> Self {
        let snapshot = settings.clone();
        trace!("Entering settings scope {snapshot:?}");
        Self { settings, snapshot }
    }
}

impl Deref for ScopedSettings<'_> {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        self.settings
    }
}

impl DerefMut for ScopedSettings<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.settings
    }
}

impl Drop for ScopedSettings<'_> {
    fn drop(&mut self) {
        *self.settings = std::mem::take(&mut self.snapshot);
        trace!("Restored settings {:?}", self.settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NUM_GROUPS, RESHAPE_SCATTER};

    #[test]
    fn restored_on_normal_exit() {
        let mut settings = Settings::default();
        {
            let mut scope = settings.scoped();
            scope.set_value(RESHAPE_SCATTER, true).unwrap();
            scope.set_value(NUM_GROUPS, 4_usize).unwrap();
            assert!(scope.reshape_scatter());
            assert_eq!(scope.num_groups(), Some(4));
        }
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn restored_on_panic() {
        let mut settings = Settings::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut scope = settings.scoped();
            scope.set_reshape_scatter(true);
            panic!("failure inside the scope");
        }));

        assert!(result.is_err());
        assert!(!settings.reshape_scatter());
    }

    #[test]
    fn nested_scopes() {
        let mut settings = Settings::default();
        settings.set_num_groups(Some(2));
        {
            let mut outer = settings.scoped();
            outer.set_reshape_scatter(true);
            {
                let mut inner = outer.scoped();
                inner.set_num_groups(Some(8));
                assert!(inner.reshape_scatter());
            }
            assert_eq!(outer.num_groups(), Some(2));
            assert!(outer.reshape_scatter());
        }
        assert!(!settings.reshape_scatter());
        assert_eq!(settings.num_groups(), Some(2));
    }
}
