use crate::config::StripConfig;
use crate::error::StripError;
use crate::geometry::Geometry;
use crate::signal::buffer::SampleWindow;
use crate::signal::source::SampleSource;
use crate::types::Sample;
/// Pulls batches from a source into a one-period window and exposes
/// ready-to-draw frames.
pub struct StripPipeline<S: SampleSource> {
    source: S,
    window: SampleWindow,
}
impl<S: SampleSource> StripPipeline<S> {
    /// Sizes the window to one strip period for `config`.
    pub fn new(source: S, config: &StripConfig) -> Result<Self, StripError> {
        let geometry = Geometry::new(config)?;
        let window = SampleWindow::new(geometry.sampling_rate(), geometry.samples_per_period())?;
        Ok(Self { source, window })
    }
    /// Pulls one batch; `None` once the source is exhausted.
    pub fn pump_once(&mut self) -> Result<Option<Vec<Sample>>, StripError> {
        let Some(batch) = self.source.next_batch()? else {
            return Ok(None);
        };
        self.window.push_batch(&batch)?;
        Ok(Some(self.window.snapshot()))
    }
    /// Pulls batches until at least `count` samples arrived or the source
    /// ran dry, returning how many were taken.
    pub fn pump_samples(&mut self, count: usize) -> Result<usize, StripError> {
        let mut taken = 0;
        while taken < count {
            let Some(batch) = self.source.next_batch()? else {
                break;
            };
            self.window.push_batch(&batch)?;
            taken += batch.len();
        }
        Ok(taken)
    }
    pub fn latest_frame(&self) -> Vec<Sample> {
        self.window.snapshot()
    }
    pub fn window(&self) -> &SampleWindow {
        &self.window
    }
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
