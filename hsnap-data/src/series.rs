//! Cutoff filtering of parallel label/value sequences.
//!
//! Labels are ISO dates, so comparing them as strings orders them by date.

/// A view of a label sequence starting at the first label on or after a cutoff.
///
/// The same window is applied to every series parallel to the labels so that
/// index alignment is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutoffWindow<'a> {
    labels: &'a [String],
    start: usize,
}

impl<'a> CutoffWindow<'a> {
    /// Window over `labels` beginning at the first label `>= cutoff`.
    ///
    /// When no label reaches the cutoff the window is empty.
    pub fn new(labels: &'a [String], cutoff: &str) -> Self {
        let start = labels
            .iter()
            .position(|label| label.as_str() >= cutoff)
            .unwrap_or(labels.len());
        Self { labels, start }
    }

    /// Index of the first kept period in the unfiltered sequence.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn labels(&self) -> &'a [String] {
        &self.labels[self.start..]
    }

    /// The part of a parallel series that falls inside the window.
    pub fn slice<'s, T>(&self, series: &'s [T]) -> &'s [T] {
        series.get(self.start..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.labels.len() - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::CutoffWindow;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_window_drops_earlier_periods() {
        let labels = labels(&["1998-11-01", "1998-12-01", "1999-01-01", "1999-02-01"]);
        let values = vec![1, 2, 3, 4];
        let window = CutoffWindow::new(&labels, "1999-01-01");
        assert_eq!(window.start(), 2);
        assert_eq!(window.labels(), &labels[2..]);
        assert_eq!(window.slice(&values), &[3, 4]);
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_window_keeps_everything_when_cutoff_precedes_all() {
        let labels = labels(&["2000-01-01", "2000-02-01", "2000-03-01"]);
        let window = CutoffWindow::new(&labels, "1999-01-01");
        assert_eq!(window.start(), 0);
        assert_eq!(window.labels().len(), 3);
        assert_eq!(window.slice(&[10, 20, 30]), &[10, 20, 30]);
    }

    #[test]
    fn test_window_is_empty_when_no_label_reaches_cutoff() {
        let labels = labels(&["1990-01-01", "1995-01-01"]);
        let window = CutoffWindow::new(&labels, "1999-01-01");
        assert!(window.is_empty());
        assert!(window.labels().is_empty());
        assert!(window.slice(&[1, 2]).is_empty());
    }

    #[test]
    fn test_short_series_is_clamped() {
        let labels = labels(&["1998-01-01", "1999-01-01", "1999-02-01"]);
        let window = CutoffWindow::new(&labels, "1999-01-01");
        let too_short: Vec<u32> = vec![7];
        assert!(window.slice(&too_short).is_empty());
    }
}
