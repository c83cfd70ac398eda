/// Emitted after each processed record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// 1-based index of the record that was just processed.
    pub current: usize,
    pub total: usize,
    /// `current / total`, ends at exactly `1.0`.
    pub fraction: f64,
}

impl Progress {
    pub(crate) fn after(index: usize, total: usize) -> Self {
        debug_assert!(index < total);
        let current = index + 1;
        Self {
            current,
            total,
            fraction: current as f64 / total as f64,
        }
    }
}

pub trait ProgressSink {
    fn progress(&mut self, event: Progress);
}

impl<F> ProgressSink for F
where
    F: FnMut(Progress),
{
    fn progress(&mut self, event: Progress) {
        self(event)
    }
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn progress(&mut self, _: Progress) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_of_last_record_is_one() {
        let p = Progress::after(2, 3);
        assert_eq!(3, p.current);
        assert_eq!(1.0, p.fraction);
    }

    #[test]
    fn closures_are_sinks() {
        let mut events = vec![];
        let mut sink = |p: Progress| events.push(p.current);
        sink.progress(Progress::after(0, 2));
        sink.progress(Progress::after(1, 2));
        assert_eq!(vec![1, 2], events);
    }
}
