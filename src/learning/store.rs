use super::Sample;

/// Append-only collection of training samples. Order carries no meaning
/// to training and duplicates are kept.
#[derive(Debug, Default, Clone)]
pub struct SampleStore {
    samples: Vec<Sample>,
}

impl SampleStore {
    pub fn append(&mut self, sample: Sample) {
        log::debug!("sample #{} {}", self.samples.len() + 1, sample);
        self.samples.push(sample);
    }
    pub fn reset(&mut self) {
        self.samples.clear();
    }
    pub fn all(&self) -> &[Sample] {
        &self.samples
    }
    pub fn size(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
