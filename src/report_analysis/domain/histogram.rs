use super::vulnerability::Severity;
use indexmap::IndexMap;

/// Vulnerability counts per canonical severity
///
/// All four severities are always present, starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityHistogram {
    counts: [usize; 4],
}

impl SeverityHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, severity: Severity) {
        self.counts[severity.index()] += 1;
    }

    pub fn get(&self, severity: Severity) -> usize {
        self.counts[severity.index()]
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterates `(severity, count)` in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        Severity::ALL.iter().map(move |s| (*s, self.get(*s)))
    }
}

impl FromIterator<(Severity, usize)> for SeverityHistogram {
    fn from_iter<I: IntoIterator<Item = (Severity, usize)>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for (severity, count) in iter {
            histogram.counts[severity.index()] = count;
        }
        histogram
    }
}

/// Component counts per observed component type
///
/// Keys are exactly the types seen, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeHistogram {
    counts: IndexMap<String, usize>,
}

impl TypeHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, component_type: &str) {
        *self.counts.entry(component_type.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, component_type: &str) -> usize {
        self.counts.get(component_type).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(type, count)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for TypeHistogram {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for (component_type, count) in iter {
            *histogram.counts.entry(component_type.into()).or_insert(0) += count;
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_histogram_starts_at_zero() {
        let histogram = SeverityHistogram::new();
        for severity in Severity::ALL {
            assert_eq!(histogram.get(severity), 0);
        }
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.iter().count(), 4);
    }

    #[test]
    fn test_severity_histogram_increment() {
        let mut histogram = SeverityHistogram::new();
        histogram.increment(Severity::High);
        histogram.increment(Severity::High);
        histogram.increment(Severity::Low);

        assert_eq!(histogram.get(Severity::High), 2);
        assert_eq!(histogram.get(Severity::Low), 1);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn test_severity_histogram_iter_order() {
        let histogram: SeverityHistogram =
            [(Severity::Low, 4), (Severity::Critical, 1)].into_iter().collect();
        let order: Vec<_> = histogram.iter().collect();
        assert_eq!(
            order,
            vec![
                (Severity::Critical, 1),
                (Severity::High, 0),
                (Severity::Medium, 0),
                (Severity::Low, 4),
            ]
        );
    }

    #[test]
    fn test_type_histogram_first_seen_order() {
        let mut histogram = TypeHistogram::new();
        histogram.increment("library");
        histogram.increment("application");
        histogram.increment("library");

        let entries: Vec<_> = histogram.iter().collect();
        assert_eq!(entries, vec![("library", 2), ("application", 1)]);
        assert_eq!(histogram.total(), 3);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.get("framework"), 0);
    }

    #[test]
    fn test_type_histogram_from_iter() {
        let histogram: TypeHistogram = [("A", 3), ("B", 1)].into_iter().collect();
        assert_eq!(histogram.get("A"), 3);
        assert_eq!(histogram.get("B"), 1);
        assert!(!histogram.is_empty());
    }
}
