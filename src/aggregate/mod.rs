pub mod circular;
pub mod hourly;
pub mod resample;

/// Running arithmetic mean over the non-null values of one field.
#[derive(Debug, Default)]
pub(crate) struct MeanAccum {
    sum: f64,
    count: u32,
}

impl MeanAccum {
    pub(crate) fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    /// `None` when no value was pushed.
    pub(crate) fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / f64::from(self.count))
        }
    }
}
