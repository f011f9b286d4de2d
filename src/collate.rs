//! Locale-aware ordering for presentation folder names.
//!
//! Names are compared with the CLDR root collation at tertiary strength
//! (accents and case are secondary/tertiary differences, punctuation is not
//! ignored, digits compare character by character). Names the collator
//! considers equal fall back to code point order so the order is total.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

use crate::error::{PickerError, PickerResult};

/// Root-locale collator for folder names.
pub struct FolderCollator {
    inner: Collator,
}

impl FolderCollator {
    pub fn new() -> PickerResult<Self> {
        let inner = Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| PickerError::Collation(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.inner.compare(a, b).then_with(|| a.cmp(b))
    }

    pub fn sort(&self, names: &mut [String]) {
        names.sort_by(|a, b| self.compare(a, b));
    }
}

/// Sort names in place the way folder listings are presented.
pub fn sort_names(names: &mut [String]) -> PickerResult<()> {
    FolderCollator::new()?.sort(names);
    Ok(())
}
