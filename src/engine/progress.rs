//! Progress counter for the traversal (verbose mode only).

use kdam::{Animation, Bar, BarExt};

use crate::utils::config::PROGRESS_UPDATE_BATCH_SIZE;

/// Create a counter for unknown total (shows count without percentage)
pub fn create_counter(desc: &'static str) -> Bar {
    kdam::tqdm!(
        total = 0,
        desc = desc,
        animation = Animation::Classic,
        position = 0,
        unit = " assets"
    )
}

/// Counts recorded assets and pushes to the bar every `chunk_size` items.
pub struct AssetProgress {
    bar: Option<Bar>,
    count: usize,
    chunk_size: usize,
}

impl AssetProgress {
    /// `enabled: false` gives a no-op counter.
    pub fn new(enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let mut bar = create_counter("Scanning");
            let _ = bar.refresh();
            bar
        });
        Self {
            bar,
            count: 0,
            chunk_size: PROGRESS_UPDATE_BATCH_SIZE,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Record one asset; updates the bar once a full chunk has accumulated.
    pub fn tick(&mut self) {
        self.count += 1;
        if let Some(bar) = self.bar.as_mut()
            && self.count.is_multiple_of(self.chunk_size)
        {
            let _ = bar.update(self.chunk_size);
        }
    }

    /// Flush the remainder after the last full chunk and end the bar's line.
    pub fn finish(mut self) {
        if let Some(bar) = self.bar.as_mut() {
            let remaining = self.count % self.chunk_size;
            if remaining > 0 {
                let _ = bar.update(remaining);
            }
            let _ = bar.refresh();
            eprintln!();
        }
    }
}
